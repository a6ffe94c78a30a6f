use std::fs::{self, File};
use std::io;
use std::path::Path;
use walkdir::WalkDir;
use zip::{write::FileOptions, CompressionMethod, ZipArchive, ZipWriter};

use crate::core::compression::common::ArchiveHandler;
use crate::models::RezipError;

/// ZIP archive handler
///
/// Handles extraction and creation of ZIP archives while preserving directory
/// hierarchy.
pub struct ZipHandler;

impl ZipHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveHandler for ZipHandler {
    /// Extract ZIP archive to destination directory
    ///
    /// # Behavior
    /// - Preserves directory hierarchy
    /// - Creates parent directories as needed
    /// - Skips entries whose names escape the destination
    /// - Sets file permissions on Unix systems
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<(), RezipError> {
        let file = File::open(archive_path).map_err(|e| {
            RezipError::Archive(format!(
                "Failed to open ZIP archive {}: {}",
                archive_path.display(),
                e
            ))
        })?;

        let mut archive = ZipArchive::new(file)
            .map_err(|e| RezipError::Archive(format!("Failed to read ZIP archive: {}", e)))?;

        fs::create_dir_all(dest_dir).map_err(|e| {
            RezipError::Archive(format!("Failed to create destination directory: {}", e))
        })?;

        for i in 0..archive.len() {
            let mut file = archive.by_index(i).map_err(|e| {
                RezipError::Archive(format!("Failed to read file at index {}: {}", i, e))
            })?;

            let file_path = match file.enclosed_name() {
                Some(path) => path.to_owned(),
                None => continue, // Skip files with invalid names
            };

            let output_path = dest_dir.join(&file_path);

            if file.is_dir() {
                fs::create_dir_all(&output_path).map_err(|e| {
                    RezipError::Archive(format!(
                        "Failed to create directory {}: {}",
                        output_path.display(),
                        e
                    ))
                })?;
            } else {
                if let Some(parent) = output_path.parent() {
                    fs::create_dir_all(parent).map_err(|e| {
                        RezipError::Archive(format!(
                            "Failed to create parent directory {}: {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }

                let mut output_file = File::create(&output_path).map_err(|e| {
                    RezipError::Archive(format!(
                        "Failed to create output file {}: {}",
                        output_path.display(),
                        e
                    ))
                })?;

                io::copy(&mut file, &mut output_file).map_err(|e| {
                    RezipError::Archive(format!(
                        "Failed to extract file {}: {}",
                        file_path.display(),
                        e
                    ))
                })?;

                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    if let Some(mode) = file.unix_mode() {
                        fs::set_permissions(&output_path, fs::Permissions::from_mode(mode))
                            .map_err(|e| {
                                RezipError::Archive(format!("Failed to set permissions: {}", e))
                            })?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Create ZIP archive from source directory
    ///
    /// # Behavior
    /// - Entries are written sorted by relative path, so identical directory
    ///   contents produce identical entry order
    /// - Already-compressed formats (PNG, JPG, MP3…) are stored without
    ///   re-compression
    /// - Everything else uses Deflate level 1 for quick compression
    fn create(&self, source_dir: &Path, output_path: &Path) -> Result<(), RezipError> {
        let mut dir_names: Vec<String> = Vec::new();
        let mut file_infos: Vec<(std::path::PathBuf, String)> = Vec::new();

        for entry in WalkDir::new(source_dir)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            let relative = path.strip_prefix(source_dir).map_err(|e| {
                RezipError::Archive(format!("Failed to calculate relative path: {}", e))
            })?;
            if relative.as_os_str().is_empty() {
                continue;
            }
            let name = relative.to_string_lossy().to_string();
            if path.is_dir() {
                dir_names.push(name);
            } else if path.is_file() {
                file_infos.push((path.to_path_buf(), name));
            }
        }

        dir_names.sort();
        file_infos.sort_by(|a, b| a.1.cmp(&b.1));

        let file = File::create(output_path).map_err(|e| {
            RezipError::Archive(format!(
                "Failed to create ZIP file {}: {}",
                output_path.display(),
                e
            ))
        })?;
        let mut zip = ZipWriter::new(file);

        let stored_opts = FileOptions::<()>::default()
            .compression_method(CompressionMethod::Stored)
            .unix_permissions(0o755);

        for name in dir_names {
            zip.add_directory(&name, stored_opts).map_err(|e| {
                RezipError::Archive(format!("Failed to add directory {} to archive: {}", name, e))
            })?;
        }

        for (path, name) in file_infos {
            // Already-compressed formats: store as-is (zero CPU cost)
            // Text/binary formats: fast Deflate level 1
            let opts = if is_already_compressed(&name) {
                stored_opts
            } else {
                FileOptions::<()>::default()
                    .compression_method(CompressionMethod::Deflated)
                    .compression_level(Some(1))
                    .unix_permissions(0o755)
            };

            zip.start_file(&name, opts).map_err(|e| {
                RezipError::Archive(format!("Failed to start file {} in archive: {}", name, e))
            })?;

            let mut input = File::open(&path).map_err(|e| {
                RezipError::Archive(format!("Failed to read file {}: {}", path.display(), e))
            })?;
            io::copy(&mut input, &mut zip).map_err(|e| {
                RezipError::Archive(format!("Failed to write file {} to archive: {}", name, e))
            })?;
        }

        zip.finish()
            .map_err(|e| RezipError::Archive(format!("Failed to finalize ZIP archive: {}", e)))?;

        Ok(())
    }

    /// Returns true for .zip files (case-insensitive)
    fn supports(&self, archive_path: &Path) -> bool {
        archive_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("zip"))
            .unwrap_or(false)
    }
}

/// Returns true for formats that are already compressed and won't benefit from
/// Deflate. Storing them avoids wasting CPU on incompressible data.
fn is_already_compressed(name: &str) -> bool {
    let ext = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    matches!(
        ext.as_str(),
        "png" | "jpg" | "jpeg" | "gif" | "webp"
            | "mp3" | "mp4" | "ogg" | "wav" | "aac" | "flac"
            | "zip" | "7z" | "rar"
    )
}

impl Default for ZipHandler {
    fn default() -> Self {
        Self::new()
    }
}
