use std::path::Path;

use compio::fs::{self, File};
use snafu::ResultExt;
use tracing::debug;

use crate::filesystem::sink::{CreateDirectorySnafu, CreateFileSnafu};
use crate::filesystem::{FilesystemSink, SinkError};

/// Writes the scaffold to the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl FilesystemSink for LocalFilesystem {
    async fn ensure_directory(&self, path: &Path) -> Result<(), SinkError> {
        debug!("Ensuring directory {}", path.display());
        fs::create_dir_all(path)
            .await
            .context(CreateDirectorySnafu { path })
    }

    async fn create_empty_file(&self, path: &Path) -> Result<(), SinkError> {
        debug!("Creating empty file {}", path.display());
        let file = File::create(path).await.context(CreateFileSnafu { path })?;
        file.close().await.context(CreateFileSnafu { path })
    }
}
