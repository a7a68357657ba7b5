//! File reading.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::ToolError;

/// Reads whole files as text. Invalid UTF-8 sequences are replaced with
/// U+FFFD rather than failing the read.
pub trait FileReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<String, ToolError>;
}

/// [`FileReader`] backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileReader;

impl OsFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl FileReader for OsFileReader {
    fn read(&self, path: &Path) -> Result<String, ToolError> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ToolError::FileNotFound,
            _ => ToolError::ReadFailed(e.to_string()),
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
