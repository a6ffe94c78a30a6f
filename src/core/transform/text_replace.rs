use std::fs;
use std::path::Path;

use crate::core::transform::FileTransform;
use crate::models::RezipError;

/// Text search-and-replace transformation
///
/// Replaces every occurrence of `search` with `replace` in UTF-8 text files.
/// Files that are not valid UTF-8 are reported as unsupported; the pipeline's
/// policy decides whether that fails the run or carries the file through
/// unchanged.
pub struct TextReplace {
    search: String,
    replace: String,
}

impl TextReplace {
    /// Create a new text replacement transform
    ///
    /// The search string must be non-empty.
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Result<Self, RezipError> {
        let search = search.into();
        if search.is_empty() {
            return Err(RezipError::InvalidConfig(
                "Search string must not be empty".to_string(),
            ));
        }

        Ok(Self {
            search,
            replace: replace.into(),
        })
    }
}

impl FileTransform for TextReplace {
    fn name(&self) -> &'static str {
        "text-replace"
    }

    fn apply(&self, path: &Path) -> Result<(), RezipError> {
        let bytes = fs::read(path)?;

        let contents = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(_) => return Err(RezipError::UnsupportedFile(path.to_path_buf())),
        };

        // Only rewrite when something actually changed, so untouched files
        // stay byte-identical
        if contents.contains(&self.search) {
            let replaced = contents.replace(&self.search, &self.replace);
            fs::write(path, replaced)?;
            log::debug!("text-replace rewrote {}", path.display());
        }

        Ok(())
    }
}
