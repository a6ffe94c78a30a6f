use serde::Serialize;
use std::path::PathBuf;

/// A regular file found inside the extracted workspace
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Relative path from the archive root (preserves hierarchy)
    pub relative_path: String,
    /// Absolute path inside the temporary workspace
    pub temp_path: PathBuf,
}

impl ScannedFile {
    pub fn new(relative_path: String, temp_path: PathBuf) -> Self {
        Self {
            relative_path,
            temp_path,
        }
    }
}

/// Summary of a completed pipeline run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    /// Regular files found in the extracted archive
    pub files_scanned: usize,
    /// Files handled by the transformation
    pub files_transformed: usize,
    /// Files left unchanged under the skip policy
    pub files_skipped: usize,
    /// Path of the written output archive
    pub output_path: PathBuf,
}
