//! Declarative logging configuration
//!
//! A [`LoggingConfig`] describes a full set of bindings and is applied with
//! [`LoggingContext::apply_config`](super::LoggingContext::apply_config).
//! Sections are applied in order (syslog, then streams, then `disabled`), so
//! a level named in a later section overrides an earlier one.
//!
//! ```
//! use rust_tagged_logger::core::LoggingConfig;
//!
//! let config = LoggingConfig::from_json_str(r#"{
//!     "syslog": { "identity": "billing", "facility": "local3" },
//!     "streams": [ { "target": "stderr", "levels": "error" } ],
//!     "disabled": ["debug"]
//! }"#).unwrap();
//!
//! assert_eq!(config.streams.len(), 1);
//! ```

use super::{
    error::{LoggerError, Result},
    log_level::Level,
};
use crate::syslog::Facility;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Bind every level to the system log
    pub syslog: Option<SyslogConfig>,
    /// Stream bindings, applied in order
    pub streams: Vec<StreamConfig>,
    /// Levels bound to nothing
    pub disabled: Vec<Level>,
    /// Turn `Logger::trace` on or off; absent leaves the switch as it is
    pub trace: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyslogConfig {
    pub identity: Option<String>,
    pub facility: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamConfig {
    /// `"stdout"`, `"stderr"`, or a path opened for appending
    pub target: String,
    pub levels: LevelSpec,
}

/// One level name or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSpec {
    One(Level),
    Many(Vec<Level>),
}

impl LevelSpec {
    pub fn levels(&self) -> &[Level] {
        match self {
            LevelSpec::One(level) => std::slice::from_ref(level),
            LevelSpec::Many(levels) => levels,
        }
    }
}

impl From<Level> for LevelSpec {
    fn from(level: Level) -> Self {
        LevelSpec::One(level)
    }
}

impl From<Vec<Level>> for LevelSpec {
    fn from(levels: Vec<Level>) -> Self {
        LevelSpec::Many(levels)
    }
}

/// Resolved stream destination of a [`StreamConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamDestination<'a> {
    Stdout,
    Stderr,
    Path(&'a Path),
}

impl StreamConfig {
    pub fn new(target: impl Into<String>, levels: impl Into<LevelSpec>) -> Self {
        Self {
            target: target.into(),
            levels: levels.into(),
        }
    }

    pub fn destination(&self) -> StreamDestination<'_> {
        match self.target.as_str() {
            "stdout" => StreamDestination::Stdout,
            "stderr" => StreamDestination::Stderr,
            path => StreamDestination::Path(Path::new(path)),
        }
    }
}

impl SyslogConfig {
    pub fn facility(&self) -> Result<Facility> {
        match self.facility.as_deref() {
            Some(name) => name.parse(),
            None => Ok(Facility::default()),
        }
    }
}

impl LoggingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logging configuration",
                path.display().to_string(),
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    /// Check everything that can be checked without touching the system
    pub fn validate(&self) -> Result<()> {
        if let Some(syslog) = &self.syslog {
            syslog.facility()?;
        }
        for stream in &self.streams {
            if stream.target.is_empty() {
                return Err(LoggerError::config("streams", "empty stream target"));
            }
            if stream.levels.levels().is_empty() {
                return Err(LoggerError::config(
                    "streams",
                    format!("stream '{}' names no levels", stream.target),
                ));
            }
        }
        Ok(())
    }
}
