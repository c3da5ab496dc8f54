//! Logging context: the shared binding table and its configuration entry points
//!
//! Every [`Logger`](super::Logger) holds an `Arc<LoggingContext>` and resolves
//! each call through the context's binding table, so reconfiguring a context
//! takes effect for all of its loggers at once, including ones created
//! before the change.
//!
//! Configuration calls are meant to happen at startup or at well-defined
//! points; they are safe to race against logging calls but the order in
//! which concurrent writers observe a rebinding is unspecified.

use super::{
    bindings::BindingTable,
    config::{LoggingConfig, StreamDestination},
    error::Result,
    formatter::LineBreak,
    log_level::Level,
    metrics::LoggerMetrics,
    sink::Sink,
};
use crate::sinks::{StreamHandle, StreamSink, StreamTarget, SyslogSink};
use crate::syslog::{default_transport, Facility, SyslogOptions, SyslogTransport};
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Levels bound to standard output by default; `error` goes to standard error.
pub const DEFAULT_STDOUT_LEVELS: [Level; 4] = [Level::Log, Level::Warn, Level::Info, Level::Debug];

pub struct LoggingContext {
    bindings: RwLock<BindingTable>,
    /// Set once by `bind_to_system_log`, never cleared
    escape_line_breaks: AtomicBool,
    trace_enabled: AtomicBool,
    stdout: StreamHandle,
    stderr: StreamHandle,
    transport: Arc<dyn SyslogTransport>,
    metrics: LoggerMetrics,
}

impl LoggingContext {
    /// A context in the default configuration, writing to the process's
    /// standard streams
    #[must_use]
    pub fn new() -> Self {
        Self::with_std_streams(StreamHandle::stdout(), StreamHandle::stderr())
    }

    /// A context in the default configuration with substitute standard streams
    #[must_use]
    pub fn with_std_streams(stdout: StreamHandle, stderr: StreamHandle) -> Self {
        let mut table = BindingTable::disabled();
        table.bind(
            &DEFAULT_STDOUT_LEVELS,
            Arc::new(StreamSink::new(stdout.clone())),
        );
        table.bind(&[Level::Error], Arc::new(StreamSink::new(stderr.clone())));

        Self {
            bindings: RwLock::new(table),
            escape_line_breaks: AtomicBool::new(false),
            trace_enabled: AtomicBool::new(false),
            stdout,
            stderr,
            transport: default_transport(),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Replace the system log transport used by [`bind_to_system_log`](Self::bind_to_system_log)
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn SyslogTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// Route every level to the system log.
    ///
    /// `identity` defaults to the executable's file name and `facility` to
    /// `local7`. From now on line breaks in messages are escaped instead of
    /// indented, for every level and every sink.
    ///
    /// # Errors
    ///
    /// An unknown facility name or a transport that cannot be opened; the
    /// context is left unchanged.
    pub fn bind_to_system_log(&self, identity: Option<&str>, facility: Option<&str>) -> Result<()> {
        let facility = match facility.filter(|f| !f.is_empty()) {
            Some(name) => name.parse::<Facility>()?,
            None => Facility::default(),
        };
        let identity = match identity.filter(|i| !i.is_empty()) {
            Some(identity) => identity.to_string(),
            None => default_identity(),
        };

        self.transport
            .open(&identity, SyslogOptions::default(), facility)?;
        self.escape_line_breaks.store(true, Ordering::Release);

        let sink: Arc<dyn Sink> = Arc::new(SyslogSink::new(
            Arc::clone(&self.transport),
            self.stderr.clone(),
        ));
        self.bindings.write().bind(&Level::ALL, sink);
        Ok(())
    }

    /// Route `levels` to a stream, opening `target` in append mode if it is a path.
    ///
    /// # Errors
    ///
    /// The path cannot be opened; the context is left unchanged.
    pub fn bind_to_stream(&self, target: impl Into<StreamTarget>, levels: &[Level]) -> Result<()> {
        let stream = target.into().open()?;
        self.bindings
            .write()
            .bind(levels, Arc::new(StreamSink::new(stream)));
        Ok(())
    }

    /// Route `levels` to a caller-supplied sink
    pub fn bind_sink(&self, levels: &[Level], sink: Arc<dyn Sink>) {
        self.bindings.write().bind(levels, sink);
    }

    /// Bind `levels` to nothing; calls on them skip formatting entirely
    pub fn disable(&self, levels: &[Level]) {
        self.bindings.write().disable(levels);
    }

    /// Release the system log connection. Bindings are not changed.
    pub fn close_system_log(&self) -> Result<()> {
        self.transport.close()
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.bindings.read().is_enabled(level)
    }

    /// Apply a declarative configuration.
    ///
    /// Everything fallible except opening the system log is resolved before
    /// the first binding changes.
    pub fn apply_config(&self, config: &LoggingConfig) -> Result<()> {
        config.validate()?;

        let mut streams = Vec::with_capacity(config.streams.len());
        for stream in &config.streams {
            let handle = match stream.destination() {
                StreamDestination::Stdout => self.stdout.clone(),
                StreamDestination::Stderr => self.stderr.clone(),
                StreamDestination::Path(path) => StreamHandle::open_append(path)?,
            };
            streams.push((handle, stream.levels.levels()));
        }

        if let Some(syslog) = &config.syslog {
            self.bind_to_system_log(syslog.identity.as_deref(), syslog.facility.as_deref())?;
        }
        for (handle, levels) in streams {
            self.bind_to_stream(handle, levels)?;
        }
        self.disable(&config.disabled);
        if let Some(trace) = config.trace {
            self.set_trace_enabled(trace);
        }
        Ok(())
    }

    pub fn line_break(&self) -> LineBreak {
        if self.escape_line_breaks.load(Ordering::Acquire) {
            LineBreak::Escaped
        } else {
            LineBreak::Indented
        }
    }

    /// Sink currently bound to `level`
    pub fn sink_for(&self, level: Level) -> Arc<dyn Sink> {
        self.bindings.read().sink_for(level)
    }

    /// Snapshot of the binding table
    pub fn bindings(&self) -> BindingTable {
        self.bindings.read().clone()
    }

    pub fn set_trace_enabled(&self, enabled: bool) {
        self.trace_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace_enabled.load(Ordering::Relaxed)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn stdout(&self) -> &StreamHandle {
        &self.stdout
    }

    pub fn stderr(&self) -> &StreamHandle {
        &self.stderr
    }

    pub fn flush(&self) -> Result<()> {
        self.bindings().flush_all()
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingContext")
            .field("bindings", &*self.bindings.read())
            .field("line_break", &self.line_break())
            .field("trace_enabled", &self.trace_enabled())
            .field("transport", &self.transport.name())
            .finish()
    }
}

static GLOBAL: OnceLock<Arc<LoggingContext>> = OnceLock::new();

/// The process-wide context used by [`Logger::new`](super::Logger::new)
pub fn global() -> Arc<LoggingContext> {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(LoggingContext::new())))
}

fn default_identity() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::sinks::MemoryWriter;
    use crate::syslog::RecordingTransport;

    struct Harness {
        ctx: LoggingContext,
        stdout: MemoryWriter,
        stderr: MemoryWriter,
        syslog: RecordingTransport,
    }

    fn harness() -> Harness {
        let stdout = MemoryWriter::new();
        let stderr = MemoryWriter::new();
        let syslog = RecordingTransport::new();
        let ctx = LoggingContext::with_std_streams(
            StreamHandle::from_writer("stdout", stdout.clone()),
            StreamHandle::from_writer("stderr", stderr.clone()),
        )
        .with_transport(Arc::new(syslog.clone()));
        Harness {
            ctx,
            stdout,
            stderr,
            syslog,
        }
    }

    #[test]
    fn test_default_bindings() {
        let h = harness();
        let described = h.ctx.bindings().describe();
        assert_eq!(
            described,
            vec![
                (Level::Log, "stdout".to_string()),
                (Level::Warn, "stdout".to_string()),
                (Level::Info, "stdout".to_string()),
                (Level::Debug, "stdout".to_string()),
                (Level::Error, "stderr".to_string()),
            ]
        );
        assert_eq!(h.ctx.line_break(), LineBreak::Indented);
        assert!(!h.ctx.trace_enabled());
    }

    #[test]
    fn test_bind_to_system_log() {
        let h = harness();
        h.ctx
            .bind_to_system_log(Some("billing"), Some("local3"))
            .unwrap();

        let opened = h.syslog.opened_with().unwrap();
        assert_eq!(opened.identity, "billing");
        assert_eq!(opened.facility, Facility::Local3);
        assert_eq!(opened.options, SyslogOptions::default());
        assert_eq!(h.ctx.line_break(), LineBreak::Escaped);
        for level in Level::ALL {
            assert_eq!(h.ctx.sink_for(level).name(), "recording");
        }
    }

    #[test]
    fn test_bind_to_system_log_defaults() {
        let h = harness();
        h.ctx.bind_to_system_log(None, None).unwrap();

        let opened = h.syslog.opened_with().unwrap();
        assert!(!opened.identity.is_empty());
        assert_eq!(opened.facility, Facility::Local7);
    }

    #[test]
    fn test_invalid_facility_leaves_context_unchanged() {
        let h = harness();
        let err = h
            .ctx
            .bind_to_system_log(Some("app"), Some("nowhere"))
            .unwrap_err();

        assert!(matches!(err, LoggerError::InvalidFacility(_)));
        assert!(!h.syslog.is_open());
        assert_eq!(h.ctx.line_break(), LineBreak::Indented);
        assert_eq!(h.ctx.sink_for(Level::Info).name(), "stdout");
    }

    #[test]
    fn test_line_break_flip_is_permanent() {
        let h = harness();
        h.ctx.bind_to_system_log(None, None).unwrap();
        h.ctx.bind_to_stream(h.ctx.stdout().clone(), &Level::ALL).unwrap();
        h.ctx.close_system_log().unwrap();

        assert_eq!(h.ctx.line_break(), LineBreak::Escaped);
    }

    #[test]
    fn test_close_keeps_bindings() {
        let h = harness();
        h.ctx.bind_to_system_log(None, None).unwrap();
        h.ctx.close_system_log().unwrap();

        assert!(!h.syslog.is_open());
        assert_eq!(h.syslog.close_count(), 1);
        assert_eq!(h.ctx.sink_for(Level::Warn).name(), "recording");
    }

    #[test]
    fn test_stream_after_syslog_wins() {
        let h = harness();
        h.ctx.bind_to_system_log(None, None).unwrap();
        h.ctx
            .bind_to_stream(h.ctx.stderr().clone(), &[Level::Debug])
            .unwrap();

        assert_eq!(h.ctx.sink_for(Level::Debug).name(), "stderr");
        assert_eq!(h.ctx.sink_for(Level::Info).name(), "recording");
    }

    #[test]
    fn test_disable() {
        let h = harness();
        h.ctx.disable(&[Level::Debug, Level::Log]);

        assert!(!h.ctx.is_enabled(Level::Debug));
        assert!(!h.ctx.is_enabled(Level::Log));
        assert!(h.ctx.is_enabled(Level::Info));
    }

    #[test]
    fn test_bind_to_unwritable_path() {
        let h = harness();
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("no-such-dir").join("app.log");

        let err = h.ctx.bind_to_stream(bad, &[Level::Info]).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(h.ctx.sink_for(Level::Info).name(), "stdout");
    }

    #[test]
    fn test_apply_config_order() {
        let h = harness();
        let config = LoggingConfig::from_json_str(
            r#"{
                "syslog": {"identity": "svc"},
                "streams": [{"target": "stderr", "levels": ["error", "debug"]}],
                "disabled": ["debug"],
                "trace": true
            }"#,
        )
        .unwrap();

        h.ctx.apply_config(&config).unwrap();

        assert_eq!(h.ctx.sink_for(Level::Log).name(), "recording");
        assert_eq!(h.ctx.sink_for(Level::Error).name(), "stderr");
        assert!(!h.ctx.is_enabled(Level::Debug));
        assert!(h.ctx.trace_enabled());
    }

    #[test]
    fn test_apply_config_without_trace_keeps_switch() {
        let h = harness();
        h.ctx.set_trace_enabled(true);

        let config = LoggingConfig::from_json_str(r#"{"disabled": ["debug"]}"#).unwrap();
        assert_eq!(config.trace, None);
        h.ctx.apply_config(&config).unwrap();
        assert!(h.ctx.trace_enabled());

        let config = LoggingConfig::from_json_str(r#"{"trace": false}"#).unwrap();
        h.ctx.apply_config(&config).unwrap();
        assert!(!h.ctx.trace_enabled());
    }

    #[test]
    fn test_apply_config_bad_path_changes_nothing() {
        let h = harness();
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("missing").join("x.log");
        let config = LoggingConfig {
            syslog: Some(Default::default()),
            streams: vec![crate::core::StreamConfig::new(
                bad.display().to_string(),
                Level::Info,
            )],
            ..Default::default()
        };

        assert!(h.ctx.apply_config(&config).is_err());
        assert!(!h.syslog.is_open());
        assert_eq!(h.ctx.sink_for(Level::Info).name(), "stdout");
        assert!(h.stdout.is_empty());
        assert!(h.stderr.is_empty());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(Arc::ptr_eq(&global(), &global()));
    }
}
