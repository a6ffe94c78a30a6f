// Per-file transformation capability
pub mod image_scale;
pub mod text_replace;

pub use image_scale::ImageScale;
pub use text_replace::TextReplace;

use std::path::Path;

use crate::models::RezipError;

/// Trait for mutating one extracted file in place
///
/// This is the single substitution point of the pipeline: everything else
/// (extraction, scanning, re-archiving, cleanup) is shared. Implementations
/// must be pure per file and hold no cross-file state.
///
/// A file the implementation cannot handle is reported as
/// `RezipError::UnsupportedFile`; the pipeline decides whether that aborts
/// the run or skips the file (see `UnsupportedFilePolicy`). Any other error
/// aborts the run unconditionally.
pub trait FileTransform: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Mutate the file at `path` in place
    fn apply(&self, path: &Path) -> Result<(), RezipError>;
}
