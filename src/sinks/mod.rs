//! Sink implementations

pub mod memory;
pub mod null;
pub mod stream;
pub mod syslog;

pub use memory::MemoryWriter;
pub use null::NullSink;
pub use stream::{stream_record, StreamHandle, StreamSink, StreamTarget};
pub use syslog::SyslogSink;

pub use crate::core::Sink;
