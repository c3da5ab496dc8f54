//! Per-logger elapsed-time measurement

use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Elapsed value reported when a timer is stopped without being started.
pub const UNMEASURED: i64 = -1;

/// Label → start time (wall clock, milliseconds since the epoch).
#[derive(Debug, Default)]
pub struct TimerRegistry {
    started: Mutex<HashMap<String, i64>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current time under `label`, replacing an earlier start
    pub fn start(&self, label: &str) {
        self.start_at(label, now_millis());
    }

    pub(crate) fn start_at(&self, label: &str, millis: i64) {
        self.started.lock().insert(label.to_string(), millis);
    }

    /// Remove `label` and return the milliseconds since it was started,
    /// or [`UNMEASURED`] when it never was.
    pub fn stop(&self, label: &str) -> i64 {
        self.stop_at(label, now_millis())
    }

    pub(crate) fn stop_at(&self, label: &str, now: i64) -> i64 {
        match self.started.lock().remove(label) {
            Some(since) => now - since,
            None => UNMEASURED,
        }
    }

    pub fn is_running(&self, label: &str) -> bool {
        self.started.lock().contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.started.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.started.lock().is_empty()
    }
}

/// Build the record emitted when a timer stops:
/// `label="<label>" time="<elapsed>ms"`, whitespace in the label turned into `_`.
pub fn timing_record(label: &str, elapsed: i64) -> String {
    let label: String = label
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("label=\"{}\" time=\"{}ms\"", label, elapsed)
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
