pub mod compression;
pub mod file_ops;
pub mod pipeline;
pub mod transform;
