//! Tagged logger handle

use super::{
    context::{global, LoggingContext},
    error::Result,
    format_arg::FormatArg,
    formatter::{format_args, format_message},
    log_level::Level,
    timers::{timing_record, TimerRegistry},
};
use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

/// A tag plus a handle on the logging context.
///
/// The tag is fixed at construction and prefixed to every record. Loggers
/// keep no copy of the bindings: every call is resolved through the context,
/// so reconfiguring it affects loggers that already exist.
///
/// # Example
///
/// ```
/// use rust_tagged_logger::prelude::*;
/// use rust_tagged_logger::sinks::MemoryWriter;
///
/// let out = MemoryWriter::new();
/// let ctx = LoggingContext::with_std_streams(
///     StreamHandle::from_writer("stdout", out.clone()),
///     StreamHandle::from_writer("stderr", MemoryWriter::new()),
/// );
///
/// let root = Logger::with_context(ctx, "[api]");
/// let worker = root.derive("[worker-1]");
/// assert_eq!(worker.tag(), "[api][worker-1]");
///
/// worker.info("started");
/// assert!(out.contents().ends_with(" [api][worker-1]\tstarted\n"));
/// ```
pub struct Logger {
    tag: String,
    timers: TimerRegistry,
    context: Arc<LoggingContext>,
}

impl Logger {
    /// A logger on the process-wide context
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_context(global(), tag)
    }

    #[must_use]
    pub fn with_context(context: impl Into<Arc<LoggingContext>>, tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            timers: TimerRegistry::new(),
            context: context.into(),
        }
    }

    /// A new logger on the same context whose tag is this tag followed by
    /// `suffix`. Timers are not inherited.
    #[must_use]
    pub fn derive(&self, suffix: &str) -> Logger {
        let mut tag = String::with_capacity(self.tag.len() + suffix.len());
        tag.push_str(&self.tag);
        tag.push_str(suffix);
        Logger::with_context(Arc::clone(&self.context), tag)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn context(&self) -> &Arc<LoggingContext> {
        &self.context
    }

    pub fn timers(&self) -> &TimerRegistry {
        &self.timers
    }

    /// False when `level` is bound to nothing; check it before building
    /// expensive arguments.
    pub fn is_enabled(&self, level: Level) -> bool {
        self.context.is_enabled(level)
    }

    /// Format `args` and write them through the sink bound to `level`.
    ///
    /// Write failures are counted and reported on standard error, never
    /// returned; use [`try_emit`](Self::try_emit) to observe them.
    pub fn emit(&self, level: Level, args: &[FormatArg]) {
        if let Err(e) = self.try_emit(level, args) {
            eprintln!("[LOGGER ERROR] {} record from '{}' dropped: {}", level, self.tag, e);
        }
    }

    pub fn try_emit(&self, level: Level, args: &[FormatArg]) -> Result<()> {
        let metrics = self.context.metrics();
        let sink = self.context.sink_for(level);
        if sink.is_null() {
            metrics.record_suppressed();
            return Ok(());
        }

        let message = format_message(args, self.context.line_break());
        match sink.emit(level, &self.tag, &message) {
            Ok(()) => {
                metrics.record_emitted();
                Ok(())
            }
            Err(e) => {
                metrics.record_failed();
                Err(e)
            }
        }
    }

    pub fn log(&self, message: impl Into<FormatArg>) {
        self.emit(Level::Log, &[message.into()]);
    }

    pub fn warn(&self, message: impl Into<FormatArg>) {
        self.emit(Level::Warn, &[message.into()]);
    }

    pub fn info(&self, message: impl Into<FormatArg>) {
        self.emit(Level::Info, &[message.into()]);
    }

    pub fn debug(&self, message: impl Into<FormatArg>) {
        self.emit(Level::Debug, &[message.into()]);
    }

    pub fn error(&self, message: impl Into<FormatArg>) {
        self.emit(Level::Error, &[message.into()]);
    }

    /// Start (or restart) the timer `label`
    pub fn time(&self, label: &str) {
        self.timers.start(label);
    }

    /// Stop the timer `label` and report it at `debug` level
    pub fn time_end(&self, label: &str) {
        self.time_end_with_threshold(label, 0);
    }

    /// Stop the timer `label`; report it at `debug` level only if at least
    /// `threshold_ms` elapsed.
    ///
    /// A label that was never started reports `-1` (see
    /// [`UNMEASURED`](super::timers::UNMEASURED)), which a non-negative
    /// threshold filters out.
    pub fn time_end_with_threshold(&self, label: &str, threshold_ms: i64) {
        let elapsed = self.timers.stop(label);
        if elapsed >= threshold_ms {
            self.emit(
                Level::Debug,
                &[FormatArg::Str(timing_record(label, elapsed))],
            );
        }
    }

    /// Emit `args` followed by a backtrace of the call site at `error` level.
    ///
    /// Does nothing unless tracing was turned on with
    /// [`LoggingContext::set_trace_enabled`].
    pub fn trace(&self, args: &[FormatArg]) {
        if !self.context.trace_enabled() || !self.is_enabled(Level::Error) {
            return;
        }
        let mut message = format_args(args);
        message.push('\n');
        message.push_str(&Backtrace::force_capture().to_string());
        self.emit(Level::Error, &[FormatArg::Str(message)]);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tag", &self.tag)
            .field("timers", &self.timers.len())
            .finish_non_exhaustive()
    }
}
