//! User-supplied path validation.

use std::path::{Component, Path, PathBuf};

use crate::error::ToolError;

/// Turn a raw path argument into a clean absolute path.
///
/// Empty input is rejected as [`ToolError::InvalidPath`]. Any `..` anywhere
/// in the string, before or after normalization, is rejected as
/// [`ToolError::PathTraversal`]. Relative paths resolve against the current
/// working directory.
pub fn resolve(raw: &str) -> Result<PathBuf, ToolError> {
    if raw.is_empty() {
        return Err(ToolError::InvalidPath);
    }
    if raw.contains("..") {
        return Err(ToolError::PathTraversal);
    }

    let path = Path::new(raw);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|_| ToolError::InvalidPath)?
            .join(path)
    };

    let cleaned = clean(&absolute);
    if cleaned.to_string_lossy().contains("..") {
        return Err(ToolError::PathTraversal);
    }
    Ok(cleaned)
}

/// Lexical cleanup: drops `.` segments and redundant separators.
fn clean(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
