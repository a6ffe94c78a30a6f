use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the rezip pipeline
#[derive(Error, Debug)]
pub enum RezipError {
    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Unsupported archive format: {0}")]
    UnsupportedArchive(String),

    #[error("Transformation error: {0}")]
    Transform(String),

    #[error("Unsupported file for this transformation: {}", .0.display())]
    UnsupportedFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
