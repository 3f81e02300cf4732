use std::path::{Path, PathBuf};

use snafu::Snafu;

/// Where a scaffold is materialized.
///
/// Both operations are idempotent: creating something that already exists
/// succeeds. Failures are reported, never retried.
pub trait FilesystemSink {
    /// Creates `path` and every missing ancestor.
    async fn ensure_directory(&self, path: &Path) -> Result<(), SinkError>;

    /// Creates an empty file at `path`, truncating an existing one. The
    /// parent directory must already exist.
    async fn create_empty_file(&self, path: &Path) -> Result<(), SinkError>;
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SinkError {
    #[snafu(display("Failed to create directory {}", path.display()))]
    CreateDirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file {}", path.display()))]
    CreateFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}
