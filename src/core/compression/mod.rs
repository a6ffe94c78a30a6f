// Archive container modules
pub mod common;
pub mod zip_handler;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::models::RezipError;
use common::ArchiveHandler;
use zip_handler::ZipHandler;

/// Archive processor that dispatches to the right container handler
///
/// Currently only ZIP is supported; the handler list is the seam where a TAR
/// or 7z handler would be registered.
pub struct ArchiveProcessor {
    handlers: Vec<Arc<dyn ArchiveHandler>>,
}

impl ArchiveProcessor {
    /// Create a new archive processor with all supported handlers
    pub fn new() -> Self {
        let handlers: Vec<Arc<dyn ArchiveHandler>> = vec![Arc::new(ZipHandler::new())];

        Self { handlers }
    }

    /// Auto-detect and get the appropriate handler for an archive path
    fn get_handler(&self, archive_path: &Path) -> Result<Arc<dyn ArchiveHandler>, RezipError> {
        for handler in &self.handlers {
            if handler.supports(archive_path) {
                return Ok(Arc::clone(handler));
            }
        }

        let ext = archive_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown");

        Err(RezipError::UnsupportedArchive(format!(
            "Unsupported archive format: .{}",
            ext
        )))
    }

    /// Extract archive to destination directory
    pub fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<PathBuf, RezipError> {
        let handler = self.get_handler(archive_path)?;
        handler.extract(archive_path, dest_dir)?;
        Ok(dest_dir.to_path_buf())
    }

    /// Create archive from source directory
    pub fn create(&self, source_dir: &Path, output_path: &Path) -> Result<PathBuf, RezipError> {
        let handler = self.get_handler(output_path)?;
        handler.create(source_dir, output_path)?;
        Ok(output_path.to_path_buf())
    }

    /// Generate a default output filename with a "_transformed" suffix
    ///
    /// # Example
    /// ```ignore
    /// "archive.zip" -> "archive_transformed.zip"
    /// ```
    pub fn generate_output_name(input_path: &Path) -> PathBuf {
        let parent = input_path.parent();
        let stem = input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("archive");
        let extension = input_path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let new_name = if extension.is_empty() {
            format!("{}_transformed", stem)
        } else {
            format!("{}_transformed.{}", stem, extension)
        };

        match parent {
            Some(p) => p.join(new_name),
            None => PathBuf::from(new_name),
        }
    }

    /// Check if a file is a supported archive format
    pub fn is_supported(&self, path: &Path) -> bool {
        self.handlers.iter().any(|h| h.supports(path))
    }
}

impl Default for ArchiveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_files(dir: &Path) {
        fs::create_dir_all(dir.join("subdir")).unwrap();
        fs::write(dir.join("file1.txt"), b"test content 1").unwrap();
        fs::write(dir.join("subdir/file2.txt"), b"test content 2").unwrap();
    }

    #[test]
    fn test_generate_output_name() {
        let input = Path::new("/path/to/archive.zip");
        let output = ArchiveProcessor::generate_output_name(input);
        assert_eq!(output, Path::new("/path/to/archive_transformed.zip"));

        let input2 = Path::new("data.zip");
        let output2 = ArchiveProcessor::generate_output_name(input2);
        assert_eq!(output2, Path::new("data_transformed.zip"));

        let input3 = Path::new("noext");
        let output3 = ArchiveProcessor::generate_output_name(input3);
        assert_eq!(output3, Path::new("noext_transformed"));
    }

    #[test]
    fn test_is_supported() {
        let processor = ArchiveProcessor::new();
        assert!(processor.is_supported(Path::new("test.zip")));
        assert!(processor.is_supported(Path::new("TEST.ZIP")));
        assert!(!processor.is_supported(Path::new("test.rar")));
        assert!(!processor.is_supported(Path::new("test.tar.gz")));
    }

    #[test]
    fn test_extract_and_create_zip() {
        let temp_source = TempDir::new().unwrap();
        let temp_extract = TempDir::new().unwrap();
        let temp_output = TempDir::new().unwrap();

        create_test_files(temp_source.path());

        let processor = ArchiveProcessor::new();

        let zip_path = temp_output.path().join("test.zip");
        processor.create(temp_source.path(), &zip_path).unwrap();
        assert!(zip_path.exists());

        let extract_path = temp_extract.path();
        processor.extract(&zip_path, extract_path).unwrap();

        assert!(extract_path.join("file1.txt").exists());
        assert!(extract_path.join("subdir/file2.txt").exists());

        let content = fs::read_to_string(extract_path.join("file1.txt")).unwrap();
        assert_eq!(content, "test content 1");
    }

    #[test]
    fn test_unsupported_format() {
        let processor = ArchiveProcessor::new();
        let temp_dest = TempDir::new().unwrap();

        let result = processor.extract(Path::new("archive.rar"), temp_dest.path());
        assert!(result.is_err());

        if let Err(RezipError::UnsupportedArchive(msg)) = result {
            assert!(msg.contains("rar"));
        } else {
            panic!("Expected UnsupportedArchive error");
        }
    }

    #[test]
    fn test_get_handler() {
        let processor = ArchiveProcessor::new();

        assert!(processor.get_handler(Path::new("test.zip")).is_ok());
        assert!(processor.get_handler(Path::new("test.rar")).is_err());
        assert!(processor.get_handler(Path::new("test.tar.gz")).is_err());
    }
}
