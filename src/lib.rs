//! rezip: extract a zip archive, transform every file in place, repack it.
//!
//! The pipeline is three fixed steps — extract into a temporary workspace,
//! apply one [`FileTransform`] to every regular file, write a new archive —
//! with guaranteed workspace cleanup and an atomic output write. The
//! transformation is the single point of variation, selected at construction:
//!
//! ```no_run
//! use rezip::{TextReplace, ZipPipeline};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), rezip::RezipError> {
//! let transform = TextReplace::new("Maria", "Mario")?;
//! let pipeline = ZipPipeline::new(Box::new(transform));
//! let report = pipeline.run(Path::new("notes.zip"), Path::new("renamed.zip"))?;
//! println!("{} files transformed", report.files_transformed);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod models;

pub use core::compression::ArchiveProcessor;
pub use core::file_ops::{FileScanner, TempWorkspace};
pub use core::pipeline::ZipPipeline;
pub use core::transform::{FileTransform, ImageScale, TextReplace};
pub use models::{PipelineConfig, PipelineReport, RezipError, ScannedFile, UnsupportedFilePolicy};
