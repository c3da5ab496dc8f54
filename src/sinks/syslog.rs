//! System log sink

use super::stream::StreamHandle;
use crate::core::{Level, Result, Sink};
use crate::syslog::{Severity, SyslogTransport};
use std::sync::Arc;

/// Submits `tag + " " + message` at the level's syslog severity.
///
/// Records at the `err` severity are also written to the fallback stream
/// (standard error by default): syslog output is easy for an operator at a
/// terminal to miss.
pub struct SyslogSink {
    transport: Arc<dyn SyslogTransport>,
    fallback: StreamHandle,
}

impl SyslogSink {
    pub fn new(transport: Arc<dyn SyslogTransport>, fallback: StreamHandle) -> Self {
        Self {
            transport,
            fallback,
        }
    }
}

impl Sink for SyslogSink {
    fn emit(&self, level: Level, tag: &str, message: &str) -> Result<()> {
        let severity = level.severity();
        let mut record = String::with_capacity(tag.len() + message.len() + 1);
        record.push_str(tag);
        record.push(' ');
        record.push_str(message);

        let submitted = self.transport.submit(severity, &record);
        if severity == Severity::Err {
            let mut line = String::with_capacity(message.len() + 1);
            line.push_str(message);
            line.push('\n');
            self.fallback.write_str(&line)?;
        }
        submitted
    }

    fn flush(&self) -> Result<()> {
        self.fallback.flush()
    }

    fn name(&self) -> &str {
        self.transport.name()
    }
}
