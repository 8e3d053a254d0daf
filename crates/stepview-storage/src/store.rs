//! Filesystem upload store.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use stepview_core::error::{AppError, ErrorKind};
use stepview_core::result::AppResult;

use crate::naming::sanitize_file_name;

/// Name of the directory that holds uploads and conversion outputs.
const UPLOAD_DIR: &str = "upload";

/// Flat-directory store for uploaded and converted files.
///
/// All files live directly under `<data_root>/upload`. Writes to the
/// same filename are last-write-wins: concurrent uploads of one name
/// race on the write and on the subsequent conversion, and the store
/// does not serialize them.
#[derive(Debug, Clone)]
pub struct UploadStore {
    /// The upload directory all paths resolve into.
    root: PathBuf,
}

impl UploadStore {
    /// Open the store rooted at `<data_root>/upload`, creating the
    /// directory if needed.
    pub async fn open(data_root: &str) -> AppResult<Self> {
        let root = Path::new(data_root).join(UPLOAD_DIR);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The upload directory this store resolves into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a filename to its path inside the upload directory.
    ///
    /// The name is sanitized first; a name that could escape the
    /// directory is a validation error.
    pub fn local_path(&self, name: &str) -> AppResult<PathBuf> {
        let name = sanitize_file_name(name)?;
        Ok(self.root.join(name))
    }

    /// Persist raw bytes verbatim under the given filename.
    ///
    /// Returns the path the file was written to.
    pub async fn write(&self, name: &str, data: Bytes) -> AppResult<PathBuf> {
        let path = self.local_path(name)?;
        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {name}"),
                e,
            )
        })?;
        debug!(name, bytes = data.len(), "Stored uploaded file");
        Ok(path)
    }

    /// Open a stored file for streaming, returning the handle and its
    /// size in bytes.
    pub async fn open_file(&self, name: &str) -> AppResult<(fs::File, u64)> {
        let path = self.local_path(name)?;
        let file = fs::File::open(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {name}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open file: {name}"),
                    e,
                )
            }
        })?;
        let len = file
            .metadata()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read metadata: {name}"),
                    e,
                )
            })?
            .len();
        Ok((file, len))
    }

    /// Read a stored file fully into memory.
    pub async fn read_bytes(&self, name: &str) -> AppResult<Bytes> {
        let path = self.local_path(name)?;
        let data = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {name}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read file: {name}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    /// Whether a file with the given name exists in the store.
    pub async fn exists(&self, name: &str) -> AppResult<bool> {
        let path = self.local_path(name)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    /// List the names of all plain files in the upload directory,
    /// sorted. The listing is a snapshot of the directory at call time.
    pub async fn list(&self) -> AppResult<Vec<String>> {
        let mut dir = fs::read_dir(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to list upload directory: {}", self.root.display()),
                e,
            )
        })?;

        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to read directory entry", e)
        })? {
            let file_type = entry.file_type().await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to read entry type", e)
            })?;
            if !file_type.is_file() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().to_string());
        }

        names.sort();
        Ok(names)
    }
}
