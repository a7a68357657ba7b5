//! In-memory file store.
//!
//! Implements every storage trait over a shared map so tools can run without
//! touching disk. Clones share the same contents.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ToolError;

use super::reader::FileReader;
use super::verifier::{count_lines, FileInfo, FileVerifier};
use super::writer::FileWriter;

#[derive(Debug, Default, Clone)]
pub struct InMemoryFileStore {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<P: Into<PathBuf>>(&self, path: P, content: &str) {
        self.files.write().insert(path.into(), content.to_string());
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.read().get(path).cloned()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.read().contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

impl FileReader for InMemoryFileStore {
    fn read(&self, path: &Path) -> Result<String, ToolError> {
        self.get(path).ok_or(ToolError::FileNotFound)
    }
}

impl FileWriter for InMemoryFileStore {
    fn write(&self, path: &Path, content: &str) -> Result<u64, ToolError> {
        self.insert(path, content);
        Ok(content.len() as u64)
    }
}

impl FileVerifier for InMemoryFileStore {
    fn verify(&self, path: &Path) -> Result<FileInfo, ToolError> {
        let files = self.files.read();
        let content = files.get(path).ok_or(ToolError::FileNotFound)?;
        let lines =
            count_lines(content.as_bytes()).map_err(|e| ToolError::ReadFailed(e.to_string()))?;

        Ok(FileInfo {
            path: path.display().to_string(),
            size: content.len() as u64,
            lines,
        })
    }
}
