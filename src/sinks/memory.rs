//! In-memory writer for capturing output

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A cloneable, growable byte buffer implementing [`Write`].
///
/// Clones share the buffer, so one clone can be handed to a stream binding
/// while another inspects what was written.
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
/// Logger::with_context(ctx, "[demo]").info("ready");
/// assert!(out.contents().ends_with("[demo]\tready\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
