//! System log transport
//!
//! The transport is the boundary to the platform's system logger: open a
//! connection with an identity and facility, submit `(severity, message)`
//! pairs, close it again. [`PosixSyslog`] goes through the POSIX
//! `openlog`/`syslog`/`closelog` calls; [`RecordingTransport`] keeps every
//! submission in memory.
//!
//! POSIX keeps one connection per process and `openlog` settings live in libc
//! globals, so only one open transport should exist at a time.

mod facility;
#[cfg(all(unix, feature = "syslog"))]
mod posix;
mod severity;

pub use facility::Facility;
#[cfg(all(unix, feature = "syslog"))]
pub use posix::PosixSyslog;
pub use severity::Severity;

use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Connection flags passed to `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyslogOptions {
    /// Connect immediately instead of on the first message (`LOG_NDELAY`)
    pub low_latency: bool,
    /// Fall back to the system console when the logger is unreachable (`LOG_CONS`)
    pub also_console: bool,
}

impl Default for SyslogOptions {
    fn default() -> Self {
        Self {
            low_latency: true,
            also_console: true,
        }
    }
}

pub trait SyslogTransport: Send + Sync {
    fn open(&self, identity: &str, options: SyslogOptions, facility: Facility) -> Result<()>;
    fn submit(&self, severity: Severity, message: &str) -> Result<()>;
    fn close(&self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Platform transport: POSIX syslog where available.
pub fn default_transport() -> Arc<dyn SyslogTransport> {
    #[cfg(all(unix, feature = "syslog"))]
    {
        Arc::new(PosixSyslog::new())
    }
    #[cfg(not(all(unix, feature = "syslog")))]
    {
        Arc::new(UnavailableSyslog)
    }
}

/// Transport for platforms without a system logger; every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableSyslog;

impl SyslogTransport for UnavailableSyslog {
    fn open(&self, _identity: &str, _options: SyslogOptions, _facility: Facility) -> Result<()> {
        Err(LoggerError::syslog_unavailable(
            "no system log transport on this platform",
        ))
    }

    fn submit(&self, _severity: Severity, _message: &str) -> Result<()> {
        Err(LoggerError::syslog_unavailable("transport not open"))
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

/// Parameters a [`RecordingTransport`] was last opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRecord {
    pub identity: String,
    pub options: SyslogOptions,
    pub facility: Facility,
}

#[derive(Debug, Default)]
struct RecordingState {
    open: Option<OpenRecord>,
    messages: Vec<(Severity, String)>,
    opens: usize,
    closes: usize,
}

/// In-memory transport that records every call.
///
/// Clones share their record, so a clone can be installed in a context while
/// the original is inspected.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().open.is_some()
    }

    /// Settings of the current connection, if open
    pub fn opened_with(&self) -> Option<OpenRecord> {
        self.state.lock().open.clone()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.state.lock().messages.clone()
    }

    pub fn open_count(&self) -> usize {
        self.state.lock().opens
    }

    pub fn close_count(&self) -> usize {
        self.state.lock().closes
    }
}

impl SyslogTransport for RecordingTransport {
    fn open(&self, identity: &str, options: SyslogOptions, facility: Facility) -> Result<()> {
        let mut state = self.state.lock();
        state.open = Some(OpenRecord {
            identity: identity.to_string(),
            options,
            facility,
        });
        state.opens += 1;
        Ok(())
    }

    fn submit(&self, severity: Severity, message: &str) -> Result<()> {
        self.state
            .lock()
            .messages
            .push((severity, message.to_string()));
        Ok(())
    }

    fn close(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.open = None;
        state.closes += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
