//! POSIX syslog API transport

use super::{Facility, Severity, SyslogOptions, SyslogTransport};
use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::ffi::CString;

/// Submits records through libc's `openlog`/`syslog`/`closelog`.
///
/// `openlog` keeps the identity pointer, so the `CString` is owned here until
/// the connection is closed or reopened.
#[derive(Debug, Default)]
pub struct PosixSyslog {
    identity: Mutex<Option<CString>>,
}

impl PosixSyslog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_c_string(s: &str) -> CString {
    match CString::new(s) {
        Ok(c) => c,
        // interior NULs would truncate the record; make them visible instead
        Err(_) => CString::new(s.replace('\0', "\\0")).unwrap_or_default(),
    }
}

impl SyslogTransport for PosixSyslog {
    fn open(&self, identity: &str, options: SyslogOptions, facility: Facility) -> Result<()> {
        let ident = CString::new(identity)
            .map_err(|_| LoggerError::config("syslog", "identity contains a NUL byte"))?;

        let mut logopt = 0;
        if options.low_latency {
            logopt |= libc::LOG_NDELAY;
        }
        if options.also_console {
            logopt |= libc::LOG_CONS;
        }

        let mut guard = self.identity.lock();
        // SAFETY: `ident` is stored in `self.identity` below and outlives the
        // connection; the previous identity is dropped only after the new
        // `openlog` call has replaced the pointer libc holds.
        unsafe {
            libc::openlog(ident.as_ptr(), logopt, facility.code() << 3);
        }
        *guard = Some(ident);
        Ok(())
    }

    fn submit(&self, severity: Severity, message: &str) -> Result<()> {
        let message = to_c_string(message);
        // SAFETY: both pointers are valid NUL-terminated strings and the
        // format string consumes exactly one `%s` argument.
        unsafe {
            libc::syslog(
                severity.code(),
                b"%s\0".as_ptr() as *const libc::c_char,
                message.as_ptr(),
            );
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        let mut guard = self.identity.lock();
        // SAFETY: closelog takes no arguments; the identity is released after it.
        unsafe {
            libc::closelog();
        }
        *guard = None;
        Ok(())
    }

    fn name(&self) -> &str {
        "syslog"
    }
}
