use std::path::Path;
use walkdir::WalkDir;

use crate::models::ScannedFile;

/// Recursive file scanner for the extracted workspace
///
/// Finds every regular file below a root directory and records its path
/// relative to that root. Results are sorted by relative path so processing
/// order (and therefore the output archive) is reproducible regardless of
/// filesystem walk order.
pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Scan a directory recursively for regular files
    ///
    /// Returns a `Vec<ScannedFile>` sorted by relative path. Symlinks are not
    /// followed.
    pub fn scan(&self, root_path: &Path) -> Result<Vec<ScannedFile>, std::io::Error> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root_path)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let relative_path = path
                .strip_prefix(root_path)
                .map_err(|e| {
                    std::io::Error::other(format!("Failed to calculate relative path: {}", e))
                })?
                .to_path_buf();

            files.push(ScannedFile::new(
                relative_path.to_string_lossy().to_string(),
                path.to_path_buf(),
            ));
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        Ok(files)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_structure() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join("images/photos")).unwrap();
        fs::create_dir_all(base.join("documents")).unwrap();
        fs::create_dir_all(base.join("empty")).unwrap();

        fs::write(base.join("readme.txt"), b"text file").unwrap();
        fs::write(base.join("image1.png"), b"fake png").unwrap();
        fs::write(base.join("images/photo.jpg"), b"photo").unwrap();
        fs::write(base.join("images/photos/vacation.jpg"), b"vacation").unwrap();
        fs::write(base.join("documents/report.pdf"), b"pdf").unwrap();

        temp_dir
    }

    #[test]
    fn test_scan_finds_all_files() {
        let temp_dir = create_test_structure();
        let scanner = FileScanner::new();

        let files = scanner.scan(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 5);
    }

    #[test]
    fn test_scan_skips_directories() {
        let temp_dir = create_test_structure();
        let scanner = FileScanner::new();

        let files = scanner.scan(temp_dir.path()).unwrap();
        assert!(files.iter().all(|f| f.temp_path.is_file()));
        assert!(!files.iter().any(|f| f.relative_path == "empty"));
    }

    #[test]
    fn test_scan_sorts_by_path() {
        let temp_dir = create_test_structure();
        let scanner = FileScanner::new();

        let files = scanner.scan(temp_dir.path()).unwrap();

        for i in 0..files.len() - 1 {
            assert!(files[i].relative_path <= files[i + 1].relative_path);
        }
    }

    #[test]
    fn test_scan_preserves_relative_paths() {
        let temp_dir = create_test_structure();
        let scanner = FileScanner::new();

        let files = scanner.scan(temp_dir.path()).unwrap();

        let vacation = files
            .iter()
            .find(|f| f.relative_path.contains("vacation.jpg"))
            .expect("Should find vacation.jpg");

        assert!(vacation.relative_path.contains("images"));
        assert!(vacation.relative_path.contains("photos"));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = FileScanner::new();

        let files = scanner.scan(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 0);
    }
}
