//! # Rust Tagged Logger
//!
//! Tagged, level-routed logging with backends that can be switched while the
//! program runs.
//!
//! ## Features
//!
//! - **Per-level routing**: each of `log`, `warn`, `info`, `debug` and `error`
//!   is bound to the system log, an append-only stream, or nothing
//! - **Hierarchical tags**: derived loggers extend their parent's tag
//! - **Free disabled levels**: a disabled level skips formatting entirely
//! - **Timers**: `time`/`time_end` report elapsed milliseconds at `debug`
//!
//! ## Example
//!
//! ```no_run
//! use rust_tagged_logger::prelude::*;
//! use rust_tagged_logger::info;
//!
//! let log = Logger::new("[server]");
//! info!(log, "port=%d", 8080);
//!
//! // later, route everything to syslog and silence debug output
//! rust_tagged_logger::bind_to_system_log(Some("server"), None).unwrap();
//! rust_tagged_logger::disable(&[Level::Debug]);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;
pub mod syslog;

use std::path::Path;

pub mod prelude {
    pub use crate::core::{
        FormatArg, Level, Logger, LoggerError, LoggingConfig, LoggingContext, Result, Sink,
    };
    pub use crate::sinks::{StreamHandle, StreamTarget};
    pub use crate::syslog::{Facility, Severity};
}

pub use crate::core::{
    global, FormatArg, Level, LineBreak, Logger, LoggerError, LoggerMetrics, LoggingConfig,
    LoggingContext, Result, Sink,
};
pub use crate::sinks::{MemoryWriter, StreamHandle, StreamTarget};
pub use crate::syslog::{Facility, Severity, SyslogTransport};

/// Route every level of the process-wide context to the system log
pub fn bind_to_system_log(identity: Option<&str>, facility: Option<&str>) -> Result<()> {
    global().bind_to_system_log(identity, facility)
}

/// Route `levels` of the process-wide context to a stream or file
pub fn bind_to_stream(target: impl Into<StreamTarget>, levels: &[Level]) -> Result<()> {
    global().bind_to_stream(target, levels)
}

/// Disable `levels` on the process-wide context
pub fn disable(levels: &[Level]) {
    global().disable(levels)
}

pub fn close_system_log() -> Result<()> {
    global().close_system_log()
}

pub fn is_enabled(level: Level) -> bool {
    global().is_enabled(level)
}

/// Load a JSON logging configuration and apply it to the process-wide context
pub fn configure_from_file(path: impl AsRef<Path>) -> Result<()> {
    let config = LoggingConfig::from_json_file(path)?;
    global().apply_config(&config)
}
