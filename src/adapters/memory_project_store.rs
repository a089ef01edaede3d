use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// In-memory project store for testing.
#[derive(Debug, Clone)]
pub struct MemoryProjectStore {
    root: PathBuf,
    // Arc<Mutex> so clones observe each other's writes
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self { root: PathBuf::from("/project"), files: Arc::new(Mutex::new(HashMap::new())) }
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.to_string(), content.as_bytes().to_vec());
        self
    }

    pub fn bytes(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let files = self.files.lock().unwrap();
        let bytes = files.get(path).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("{} not found", path))
        })?;
        String::from_utf8(bytes.clone())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.write_bytes(path, content.as_bytes())
    }

    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        if path.split('/').any(|part| part == "..") {
            return Err(AppError::PathTraversal(path.to_string()));
        }
        self.files.lock().unwrap().insert(path.to_string(), content.to_vec());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
