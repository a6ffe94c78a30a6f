pub mod config;
pub mod error;
pub mod file;

// Re-export commonly used types
pub use config::{PipelineConfig, UnsupportedFilePolicy};
pub use error::RezipError;
pub use file::{PipelineReport, ScannedFile};
