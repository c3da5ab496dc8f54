//! Level → sink binding table

use super::{log_level::Level, sink::Sink};
use crate::sinks::NullSink;
use std::fmt;
use std::sync::Arc;

/// One sink slot per level. Unbound levels hold a [`NullSink`].
#[derive(Clone)]
pub struct BindingTable {
    slots: [Arc<dyn Sink>; Level::COUNT],
}

impl BindingTable {
    /// A table with every level disabled
    pub fn disabled() -> Self {
        let null: Arc<dyn Sink> = Arc::new(NullSink);
        Self {
            slots: std::array::from_fn(|_| Arc::clone(&null)),
        }
    }

    /// Bind each of `levels` to `sink`; the last binding of a level wins
    pub fn bind(&mut self, levels: &[Level], sink: Arc<dyn Sink>) {
        for level in levels {
            self.slots[level.index()] = Arc::clone(&sink);
        }
    }

    pub fn disable(&mut self, levels: &[Level]) {
        self.bind(levels, Arc::new(NullSink));
    }

    pub fn sink_for(&self, level: Level) -> Arc<dyn Sink> {
        Arc::clone(&self.slots[level.index()])
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        !self.slots[level.index()].is_null()
    }

    /// `(level, sink name)` for every level, in [`Level::ALL`] order
    pub fn describe(&self) -> Vec<(Level, String)> {
        Level::ALL
            .iter()
            .map(|level| (*level, self.slots[level.index()].name().to_string()))
            .collect()
    }

    /// Flush every distinct bound sink
    pub fn flush_all(&self) -> super::error::Result<()> {
        let mut flushed: Vec<&Arc<dyn Sink>> = Vec::new();
        for sink in &self.slots {
            if flushed.iter().any(|seen| Arc::ptr_eq(seen, sink)) {
                continue;
            }
            sink.flush()?;
            flushed.push(sink);
        }
        Ok(())
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::disabled()
    }
}

impl fmt::Debug for BindingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.describe()).finish()
    }
}
