use std::path::{Path, PathBuf};

use crate::core::compression::ArchiveProcessor;
use crate::core::file_ops::{FileScanner, TempWorkspace};
use crate::core::transform::FileTransform;
use crate::models::{PipelineConfig, PipelineReport, RezipError, UnsupportedFilePolicy};

/// The pipeline orchestrator
///
/// Sequences the three fixed steps — extract, transform every file, repack —
/// around a temporary workspace that is removed on every exit path. The only
/// variable part is the transformation, passed in at construction.
///
/// The output archive is written to a staging file next to the destination
/// and renamed into place once complete, so a failed run never leaves a
/// partial archive behind and never touches a pre-existing destination.
pub struct ZipPipeline {
    transform: Box<dyn FileTransform>,
    config: PipelineConfig,
    processor: ArchiveProcessor,
}

impl ZipPipeline {
    /// Create a pipeline with the default configuration
    pub fn new(transform: Box<dyn FileTransform>) -> Self {
        Self::with_config(transform, PipelineConfig::default())
    }

    /// Create a pipeline with an explicit configuration
    pub fn with_config(transform: Box<dyn FileTransform>, config: PipelineConfig) -> Self {
        Self {
            transform,
            config,
            processor: ArchiveProcessor::new(),
        }
    }

    /// Default destination path for a given input archive
    pub fn default_output_path(input: &Path) -> PathBuf {
        ArchiveProcessor::generate_output_name(input)
    }

    /// Run the pipeline: extract `input`, transform every file, write the
    /// result to `output`
    pub fn run(&self, input: &Path, output: &Path) -> Result<PipelineReport, RezipError> {
        // Validate inputs before creating any workspace, so a bad invocation
        // leaves nothing behind
        if !input.is_file() {
            return Err(RezipError::Archive(format!(
                "Source archive not found: {}",
                input.display()
            )));
        }
        if !self.processor.is_supported(input) {
            return Err(RezipError::UnsupportedArchive(format!(
                "Not a supported archive: {}",
                input.display()
            )));
        }
        if !self.processor.is_supported(output) {
            return Err(RezipError::UnsupportedArchive(format!(
                "Not a supported output archive name: {}",
                output.display()
            )));
        }

        let archive_name = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("archive");

        let workspace = TempWorkspace::new(archive_name)?;

        log::info!("extracting {} into workspace", input.display());
        self.processor.extract(input, workspace.extracted_path())?;

        let files = FileScanner::new()
            .scan(workspace.extracted_path())
            .map_err(RezipError::Io)?;
        log::info!(
            "applying {} to {} files",
            self.transform.name(),
            files.len()
        );

        let mut files_transformed = 0usize;
        let mut files_skipped = 0usize;

        for file in &files {
            match self.transform.apply(&file.temp_path) {
                Ok(()) => files_transformed += 1,
                Err(RezipError::UnsupportedFile(path)) => match self.config.on_unsupported {
                    UnsupportedFilePolicy::Skip => {
                        log::warn!(
                            "skipping unsupported file {} (carried through unchanged)",
                            file.relative_path
                        );
                        files_skipped += 1;
                    }
                    UnsupportedFilePolicy::Fail => {
                        return Err(RezipError::UnsupportedFile(path));
                    }
                },
                Err(e) => return Err(e),
            }
        }

        log::info!("repacking into {}", output.display());
        self.write_output(workspace.extracted_path(), output)?;

        Ok(PipelineReport {
            files_scanned: files.len(),
            files_transformed,
            files_skipped,
            output_path: output.to_path_buf(),
        })
        // workspace dropped here; also dropped on every error return above
    }

    /// Write the archive to a staging file in the destination directory, then
    /// rename it over the destination. The staging file is deleted on drop if
    /// anything fails before the rename.
    fn write_output(&self, source_dir: &Path, output: &Path) -> Result<(), RezipError> {
        let parent = match output.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let staging = tempfile::Builder::new()
            .prefix(".rezip-staging-")
            .suffix(".zip")
            .tempfile_in(&parent)
            .map_err(|e| {
                RezipError::Archive(format!(
                    "Failed to create staging file in {}: {}",
                    parent.display(),
                    e
                ))
            })?;

        self.processor.create(source_dir, staging.path())?;

        // The staging file is created owner-only (0600); give the final
        // archive the usual default mode instead of leaking that restriction
        // through the rename
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(staging.path(), std::fs::Permissions::from_mode(0o644))
                .map_err(|e| {
                    RezipError::Archive(format!("Failed to set output permissions: {}", e))
                })?;
        }

        staging.persist(output).map_err(|e| {
            RezipError::Archive(format!(
                "Failed to move output archive into place at {}: {}",
                output.display(),
                e.error
            ))
        })?;

        Ok(())
    }
}
