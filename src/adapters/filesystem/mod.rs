//! Filesystem adapter for the project store port.
//!
//! `FilesystemProjectStore` owns the project root path and enforces
//! path-traversal safety on every operation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem-backed store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        let full_path = self.root.join(path);
        self.validate_path_within_root(&full_path)?;
        Ok(full_path)
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.write_bytes(path, content.as_bytes())
    }

    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        log::debug!("writing {}", full_path.display());
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn file_exists(&self, path: &str) -> bool {
        match self.resolve(path) {
            Ok(full_path) => full_path.is_file(),
            Err(_) => false,
        }
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl FilesystemProjectStore {
    /// Validates that a path (after logical normalization) is within the root.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }

        Ok(())
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(std::path::Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            std::path::Component::Prefix(..) | std::path::Component::RootDir => {
                ret.push(component.as_os_str());
            }
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                ret.pop();
            }
            std::path::Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}
