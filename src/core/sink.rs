//! Sink trait for log output destinations

use super::{error::Result, log_level::Level};

/// A backend a level can be bound to.
///
/// `message` has already been formatted and had its line breaks replaced;
/// the sink only decorates it with `tag` (and whatever else its record layout
/// needs) and writes it out.
pub trait Sink: Send + Sync {
    fn emit(&self, level: Level, tag: &str, message: &str) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;

    /// A null sink drops everything; callers skip formatting for it.
    fn is_null(&self) -> bool {
        false
    }
}
