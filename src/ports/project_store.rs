//! Project directory storage port.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading and writing project files.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait ProjectStore {
    /// The project root.
    fn root(&self) -> &Path;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Write raw bytes to a file, creating parent directories as needed.
    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Read a file if it exists.
    fn read_optional(&self, path: &str) -> Result<Option<String>, AppError> {
        if self.file_exists(path) { self.read_file(path).map(Some) } else { Ok(None) }
    }
}
