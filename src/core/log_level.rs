//! Level definitions

use super::error::LoggerError;
use crate::syslog::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named logging level with its own backend binding.
///
/// Levels are not ordered by severity; each one is routed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Log = 0,
    #[serde(alias = "warning")]
    Warn = 1,
    Info = 2,
    Debug = 3,
    Error = 4,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Log,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Error,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Log => "log",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Error => "error",
        }
    }

    /// Slot of this level in a binding table
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Severity submitted to the system log for this level.
    ///
    /// `log` maps to "info" and `info` to "notice", so plain `log` calls rank
    /// below `info` in syslog.
    pub fn severity(&self) -> Severity {
        match self {
            Level::Log => Severity::Info,
            Level::Warn => Severity::Warning,
            Level::Info => Severity::Notice,
            Level::Debug => Severity::Debug,
            Level::Error => Severity::Err,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" => Ok(Level::Log),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "error" => Ok(Level::Error),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
