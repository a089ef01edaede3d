//! Project file catalog.

use std::path::Path;

use crate::domain::AppError;

pub const PACKAGE_JSON: &str = "package.json";
pub const MAIN_JS: &str = "main.js";
pub const VITE_CONFIG_JS: &str = "vite.config.js";

/// Archive name used when the manifest has no name.
pub const DEFAULT_ARCHIVE_STEM: &str = "electron-project";

/// Title used for `main.js` when the manifest has neither productName nor name.
pub const DEFAULT_WINDOW_TITLE: &str = "My Electron App";

/// Content type of a project file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Json,
    JavaScript,
    Batch,
}

/// A generated or imported project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub name: String,
    pub kind: FileKind,
    pub content: String,
}

impl ProjectFile {
    pub fn new(name: impl Into<String>, kind: FileKind, content: impl Into<String>) -> Self {
        Self { name: name.into(), kind, content: content.into() }
    }
}

/// Decide whether an uploaded file can be imported and what it contains.
///
/// Only `package.json` and `main.js` are accepted, matched on the file name.
pub fn classify_upload(path: &Path) -> Result<FileKind, AppError> {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    match file_name {
        PACKAGE_JSON => Ok(FileKind::Json),
        MAIN_JS => Ok(FileKind::JavaScript),
        _ => Err(AppError::InvalidFileType(path.display().to_string())),
    }
}
