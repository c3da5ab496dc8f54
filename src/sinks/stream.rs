//! Append-only stream sink
//!
//! Writes one tab-separated line per record:
//!
//! ```text
//! <level>\t<day><Mon> <h>:<m>:<s> <tag>\t<message>\n
//! ```

use crate::core::{now_stream_timestamp, Level, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared handle to an append-only output stream.
///
/// Clones write to the same underlying stream; each record is written under
/// the lock so lines from different callers never interleave.
#[derive(Clone)]
pub struct StreamHandle {
    name: Arc<str>,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl StreamHandle {
    pub fn from_writer(name: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: Arc::from(name.into()),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::from_writer("stdout", std::io::stdout())
    }

    pub fn stderr() -> Self {
        Self::from_writer("stderr", std::io::stderr())
    }

    /// Open `path` for appending, creating it if missing
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::stream_open(path.display().to_string(), e))?;
        Ok(Self::from_writer(path.display().to_string(), file))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write `data` in full and flush it through
    pub fn write_str(&self, data: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(data.as_bytes()).map_err(|e| {
            LoggerError::io_operation("writing log record", self.name.to_string(), e)
        })?;
        writer.flush()?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    /// True when both handles write to the same stream
    pub fn same_stream(&self, other: &StreamHandle) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Where a stream binding writes: an already open handle or a path to open.
#[derive(Debug, Clone)]
pub enum StreamTarget {
    Handle(StreamHandle),
    Path(PathBuf),
}

impl StreamTarget {
    /// Resolve to a handle, opening a path in append mode
    pub fn open(self) -> Result<StreamHandle> {
        match self {
            StreamTarget::Handle(handle) => Ok(handle),
            StreamTarget::Path(path) => StreamHandle::open_append(path),
        }
    }
}

impl From<StreamHandle> for StreamTarget {
    fn from(handle: StreamHandle) -> Self {
        StreamTarget::Handle(handle)
    }
}

impl From<&StreamHandle> for StreamTarget {
    fn from(handle: &StreamHandle) -> Self {
        StreamTarget::Handle(handle.clone())
    }
}

impl From<PathBuf> for StreamTarget {
    fn from(path: PathBuf) -> Self {
        StreamTarget::Path(path)
    }
}

impl From<&Path> for StreamTarget {
    fn from(path: &Path) -> Self {
        StreamTarget::Path(path.to_path_buf())
    }
}

impl From<&str> for StreamTarget {
    fn from(path: &str) -> Self {
        StreamTarget::Path(PathBuf::from(path))
    }
}

impl From<String> for StreamTarget {
    fn from(path: String) -> Self {
        StreamTarget::Path(PathBuf::from(path))
    }
}

/// Build one stream record line
pub fn stream_record(level: Level, timestamp: &str, tag: &str, message: &str) -> String {
    let mut line = String::with_capacity(
        level.as_str().len() + timestamp.len() + tag.len() + message.len() + 4,
    );
    line.push_str(level.as_str());
    line.push('\t');
    line.push_str(timestamp);
    line.push(' ');
    line.push_str(tag);
    line.push('\t');
    line.push_str(message);
    line.push('\n');
    line
}

pub struct StreamSink {
    stream: StreamHandle,
}

impl StreamSink {
    pub fn new(stream: StreamHandle) -> Self {
        Self { stream }
    }

    pub fn stream(&self) -> &StreamHandle {
        &self.stream
    }
}

impl Sink for StreamSink {
    fn emit(&self, level: Level, tag: &str, message: &str) -> Result<()> {
        let line = stream_record(level, &now_stream_timestamp(), tag, message);
        self.stream.write_str(&line)
    }

    fn flush(&self) -> Result<()> {
        self.stream.flush()
    }

    fn name(&self) -> &str {
        self.stream.name()
    }
}
