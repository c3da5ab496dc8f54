//! Logging macros for printf-style calls.
//!
//! Each macro takes a logger followed by the call's arguments. The first
//! argument is usually a pattern with `%s`/`%d`-style placeholders; every
//! argument is converted with [`FormatArg::from`](crate::FormatArg).
//! When the level is disabled the arguments are not even converted.
//!
//! # Examples
//!
//! ```
//! use rust_tagged_logger::prelude::*;
//! use rust_tagged_logger::{info, warn};
//!
//! let logger = Logger::new("[demo]");
//!
//! info!(logger, "Server started");
//! info!(logger, "listening on %s:%d", "0.0.0.0", 8080);
//! warn!(logger, "retrying", 3, "times");
//! ```

/// Emit at an explicit level.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = Logger::new("");
/// use rust_tagged_logger::emit;
/// emit!(logger, Level::Info, "Simple message");
/// emit!(logger, Level::Error, "Error code: %d", 500);
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.emit(level, &[$($crate::FormatArg::from($arg)),+]);
        } else {
            logger.context().metrics().record_suppressed();
        }
    }};
}

/// Emit at `log` level.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = Logger::new("");
/// use rust_tagged_logger::log;
/// log!(logger, "cache size %d", 128);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::emit!($logger, $crate::Level::Log, $($arg),+)
    };
}

/// Emit at `warn` level.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::emit!($logger, $crate::Level::Warn, $($arg),+)
    };
}

/// Emit at `info` level.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = Logger::new("");
/// use rust_tagged_logger::info;
/// info!(logger, "port=%d", 8080);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::emit!($logger, $crate::Level::Info, $($arg),+)
    };
}

/// Emit at `debug` level.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::emit!($logger, $crate::Level::Debug, $($arg),+)
    };
}

/// Emit at `error` level.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = Logger::new("");
/// use rust_tagged_logger::error;
/// error!(logger, "request %s failed: %j", "GET /", serde_json::json!({"status": 502}));
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::emit!($logger, $crate::Level::Error, $($arg),+)
    };
}

/// Emit the arguments and a backtrace at `error` level, if tracing is on.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.trace(&[$($crate::FormatArg::from($arg)),+])
    };
}
