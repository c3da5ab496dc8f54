//! Sink for disabled levels

use crate::core::{Level, Result, Sink};

#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl Sink for NullSink {
    fn emit(&self, _level: Level, _tag: &str, _message: &str) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }

    fn is_null(&self) -> bool {
        true
    }
}
