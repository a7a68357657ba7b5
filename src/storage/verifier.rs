//! File verification.
//!
//! Confirms a file exists and reports its size and line count.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Statistics of a verified file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub path: String,
    pub size: u64,
    pub lines: usize,
}

/// Reports statistics for an existing file.
pub trait FileVerifier: Send + Sync {
    fn verify(&self, path: &Path) -> Result<FileInfo, ToolError>;
}

/// [`FileVerifier`] backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileVerifier;

impl OsFileVerifier {
    pub fn new() -> Self {
        Self
    }
}

impl FileVerifier for OsFileVerifier {
    fn verify(&self, path: &Path) -> Result<FileInfo, ToolError> {
        let metadata = fs::metadata(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ToolError::FileNotFound,
            _ => ToolError::ReadFailed(e.to_string()),
        })?;

        let lines = File::open(path)
            .and_then(|file| count_lines(BufReader::new(file)))
            .map_err(|e| ToolError::ReadFailed(e.to_string()))?;

        Ok(FileInfo {
            path: path.display().to_string(),
            size: metadata.len(),
            lines,
        })
    }
}

/// Count newline-terminated lines plus a trailing unterminated line.
///
/// `""` has zero lines, `"a"` and `"a\n"` one, `"a\nb"` two.
pub fn count_lines<R: BufRead>(reader: R) -> io::Result<usize> {
    reader
        .split(b'\n')
        .try_fold(0, |count, line| line.map(|_| count + 1))
}
