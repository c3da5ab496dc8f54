//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Unknown syslog facility name
    #[error("Invalid syslog facility: '{0}'")]
    InvalidFacility(String),

    /// A path could not be opened for appending
    #[error("Cannot open '{path}' for appending: {source}")]
    StreamOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// System log transport missing or not opened
    #[error("System log unavailable: {0}")]
    SyslogUnavailable(String),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn stream_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::StreamOpen {
            path: path.into(),
            source,
        }
    }

    pub fn syslog_unavailable<S: Into<String>>(msg: S) -> Self {
        LoggerError::SyslogUnavailable(msg.into())
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// True for errors raised while (re)configuring bindings, as opposed to
    /// failures of an individual write.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidConfiguration { .. }
                | LoggerError::InvalidLevel(_)
                | LoggerError::InvalidFacility(_)
                | LoggerError::StreamOpen { .. }
                | LoggerError::JsonError(_)
        )
    }
}
