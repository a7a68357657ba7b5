//! Atomic file writes.
//!
//! Content goes to a sibling temporary file in the destination directory,
//! which is then renamed over the destination. Readers see either the old
//! file or the new one in full; on failure the destination is untouched and
//! the temporary file is removed.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::ToolError;

/// Persists text content to a path.
pub trait FileWriter: Send + Sync {
    /// Returns the number of bytes written.
    fn write(&self, path: &Path, content: &str) -> Result<u64, ToolError>;
}

/// [`FileWriter`] using temp-file-plus-rename on the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileWriter;

impl OsFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl FileWriter for OsFileWriter {
    fn write(&self, path: &Path, content: &str) -> Result<u64, ToolError> {
        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|e| ToolError::DirCreateFailed(e.to_string()))?;

        let temp_path = temp_sibling(dir, path)?;

        let result = write_temp(&temp_path, content).and_then(|_| fs::rename(&temp_path, path));
        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(ToolError::WriteFailed(e.to_string()));
        }

        Ok(content.len() as u64)
    }
}

/// `<name>.tmp.<random>` next to the destination.
fn temp_sibling(dir: &Path, path: &Path) -> Result<PathBuf, ToolError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ToolError::WriteFailed("destination has no file name".to_string()))?;
    let suffix = Uuid::new_v4().simple().to_string();
    Ok(dir.join(format!(
        "{}.tmp.{}",
        file_name.to_string_lossy(),
        &suffix[..12]
    )))
}

fn write_temp(temp_path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_leftovers(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.contains(".tmp."))
            .collect()
    }

    #[test]
    fn test_write_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");

        let size = OsFileWriter::new().write(&path, "# Title\n").unwrap();
        assert_eq!(size, 8);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Title\n");
        assert!(temp_leftovers(dir.path()).is_empty());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c/notes.md");

        OsFileWriter::new().write(&path, "nested").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "old content that is longer").unwrap();

        let size = OsFileWriter::new().write(&path, "new").unwrap();
        assert_eq!(size, 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_counts_bytes_not_chars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unicode.md");

        assert_eq!(OsFileWriter::new().write(&path, "héllo").unwrap(), 6);
    }

    #[test]
    fn test_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = OsFileWriter::new().write(&blocker.join("notes.md"), "x");
        assert!(matches!(result, Err(ToolError::DirCreateFailed(_))));
    }

    #[test]
    fn test_failed_rename_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("occupied");
        fs::create_dir(&destination).unwrap();
        fs::write(destination.join("keep.txt"), "keep").unwrap();

        let result = OsFileWriter::new().write(&destination, "content");
        assert!(matches!(result, Err(ToolError::WriteFailed(_))));
        assert!(destination.is_dir());
        assert_eq!(fs::read_to_string(destination.join("keep.txt")).unwrap(), "keep");
        assert!(temp_leftovers(dir.path()).is_empty());
    }
}
