// Filesystem helpers: temp workspace and recursive scanning
pub mod scanner;
pub mod temp_manager;

pub use scanner::FileScanner;
pub use temp_manager::TempWorkspace;
