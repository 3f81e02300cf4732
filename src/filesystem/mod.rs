//! Filesystem boundary the scaffold is written through.

mod local;
mod sink;

pub use local::LocalFilesystem;
pub use sink::{FilesystemSink, SinkError};
