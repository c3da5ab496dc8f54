//! Core logger types and traits

pub mod bindings;
pub mod config;
pub mod context;
pub mod error;
pub mod format_arg;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timers;
pub mod timestamp;

pub use bindings::BindingTable;
pub use config::{LevelSpec, LoggingConfig, StreamConfig, SyslogConfig};
pub use context::{global, LoggingContext, DEFAULT_STDOUT_LEVELS};
pub use error::{LoggerError, Result};
pub use format_arg::FormatArg;
pub use formatter::{format_args, format_message, LineBreak};
pub use log_level::Level;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timers::{timing_record, TimerRegistry, UNMEASURED};
pub use timestamp::{now_stream_timestamp, stream_timestamp};
