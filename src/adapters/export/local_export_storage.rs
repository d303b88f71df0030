//! Local Export Storage - Writes exported documents to a directory.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::ports::{ExportError, ExportedDocument};

/// Writes exported documents under a base directory.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{filename}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{filename}`
///
/// A failure at any step removes the temp file.
#[derive(Debug, Clone)]
pub struct LocalExportStorage {
    base_path: PathBuf,
}

impl LocalExportStorage {
    /// Creates storage rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the base directory.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Writes a document and returns its final path.
    pub fn write(&self, document: &ExportedDocument) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.base_path).map_err(|e| {
            ExportError::IoError(format!(
                "Failed to create export directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let path = self.base_path.join(&document.filename);
        let temp_path = self.base_path.join(format!("{}.tmp", document.filename));

        write_temp(&temp_path, |file| {
            file.write_all(document.content.as_bytes())?;
            file.sync_all()
        })?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ExportError::IoError(format!("Failed to finalize {}: {}", path.display(), e))
        })?;

        info!(
            path = %path.display(),
            format = %document.format,
            bytes = document.content.len(),
            "Export written"
        );

        Ok(path)
    }
}

/// Creates `temp_path` and hands it to `fill`, removing it if either fails.
fn write_temp<F>(temp_path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let result = File::create(temp_path).and_then(|mut file| fill(&mut file));
    if result.is_err() {
        let _ = fs::remove_file(temp_path);
    }
    result
}
