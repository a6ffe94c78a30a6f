use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::models::RezipError;

/// Temporary workspace for archive processing
///
/// Creates a disk-based temporary directory with an `extracted/` subdirectory
/// that holds the archive contents while they are transformed in place.
///
/// The whole workspace is removed when dropped, so cleanup happens on every
/// exit path of a run.
pub struct TempWorkspace {
    temp_dir: TempDir,
    extracted_path: PathBuf,
}

impl TempWorkspace {
    /// Create a new temporary workspace
    ///
    /// # Arguments
    /// * `archive_name` - Name of the archive (used in the directory prefix
    ///   for debugging)
    pub fn new(archive_name: &str) -> Result<Self, RezipError> {
        let temp_dir = tempfile::Builder::new()
            .prefix(&format!("rezip_{}_", archive_name))
            .tempdir()
            .map_err(|e| {
                RezipError::Archive(format!("Failed to create temporary directory: {}", e))
            })?;

        let extracted_path = temp_dir.path().join("extracted");
        fs::create_dir_all(&extracted_path).map_err(|e| {
            RezipError::Archive(format!("Failed to create extracted directory: {}", e))
        })?;

        Ok(Self {
            temp_dir,
            extracted_path,
        })
    }

    /// Get path to the extracted files directory
    pub fn extracted_path(&self) -> &Path {
        &self.extracted_path
    }

    /// Get base temporary directory path
    pub fn base_path(&self) -> &Path {
        self.temp_dir.path()
    }
}
