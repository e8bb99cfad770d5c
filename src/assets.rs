use std::{
    env,
    path::{Path, PathBuf},
};

use tokio::fs;
use tracing::{debug, info};

use crate::{config::DEFAULT_PUBLIC_DIR, error::AppError, utils::non_blank};

pub const PDF_WORKER_FILE: &str = "pdf.worker.min.mjs";
pub const DEFAULT_WORKER_SOURCE: &str = "node_modules/pdfjs-dist/build/pdf.worker.min.mjs";

/// The PDF rendering worker shipped by `pdfjs-dist`, and the public directory
/// it gets served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerAsset {
    pub source: PathBuf,
    pub destination_dir: PathBuf,
}

impl WorkerAsset {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination_dir: destination_dir.into(),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(
            non_blank(lookup("PDF_WORKER_SOURCE")).unwrap_or_else(|| DEFAULT_WORKER_SOURCE.into()),
            non_blank(lookup("PUBLIC_DIR")).unwrap_or_else(|| DEFAULT_PUBLIC_DIR.into()),
        )
    }

    #[must_use]
    pub fn destination(&self) -> PathBuf {
        self.destination_dir.join(PDF_WORKER_FILE)
    }

    /// Creates the destination directory if needed and copies the worker into
    /// it, returning the written path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CreateDir`] when the directory cannot be created and
    /// [`AppError::CopyAsset`] when the source is missing or the copy cannot be
    /// written.
    pub async fn install(&self) -> Result<PathBuf, AppError> {
        ensure_dir(&self.destination_dir).await?;

        let destination = self.destination();
        let bytes = fs::copy(&self.source, &destination)
            .await
            .map_err(|source| AppError::CopyAsset {
                from: self.source.clone(),
                to: destination.clone(),
                source,
            })?;
        debug!("Copied {bytes} bytes");
        info!(
            "[copy-pdf-worker] Copied {} -> {}",
            self.source.display(),
            destination.display()
        );
        Ok(destination)
    }
}

impl Default for WorkerAsset {
    fn default() -> Self {
        Self::new(DEFAULT_WORKER_SOURCE, DEFAULT_PUBLIC_DIR)
    }
}

/// Whether `public_dir` already holds the worker file.
pub async fn is_worker_installed(public_dir: &Path) -> bool {
    fs::metadata(public_dir.join(PDF_WORKER_FILE))
        .await
        .is_ok_and(|meta| meta.is_file())
}

async fn ensure_dir(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path)
        .await
        .map_err(|source| AppError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}
