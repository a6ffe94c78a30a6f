use serde::{Deserialize, Serialize};

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    /// What to do when a file cannot be handled by the selected transformation
    #[serde(default)]
    pub on_unsupported: UnsupportedFilePolicy,
}

impl PipelineConfig {
    pub fn new(on_unsupported: UnsupportedFilePolicy) -> Self {
        Self { on_unsupported }
    }
}

/// Policy for files the selected transformation cannot handle
///
/// Transformation is in-place, so skipping a file and copying it through
/// unchanged are the same thing: the file stays as extracted and is carried
/// into the output archive verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum UnsupportedFilePolicy {
    /// Abort the entire run on the first unsupported file
    #[default]
    Fail,
    /// Leave the file unchanged and continue with the rest of the archive
    Skip,
}
