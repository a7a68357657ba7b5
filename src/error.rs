//! Domain errors shared by every tool.
//!
//! Each variant is terminal for the request that produced it. Evaluation-time
//! conditions inside a query (missing fields, mismatched types) are never
//! errors and do not appear here.

/// Failure taxonomy for tool invocations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The supplied path is empty or cannot be made absolute.
    #[error("invalid file path")]
    InvalidPath,

    /// The supplied path contains a parent-directory segment.
    #[error("path traversal detected")]
    PathTraversal,

    #[error("file not found")]
    FileNotFound,

    #[error("read operation failed: {0}")]
    ReadFailed(String),

    #[error("invalid JSON content: {0}")]
    InvalidJson(String),

    #[error("array path not found")]
    ArrayPathNotFound,

    #[error("target path is not a JSON array")]
    NotAnArray,

    #[error("write operation failed: {0}")]
    WriteFailed(String),

    #[error("directory creation failed: {0}")]
    DirCreateFailed(String),

    /// Tool arguments do not match the tool's input shape.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The tool's own output could not be encoded.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Stable identifier used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::InvalidPath => "invalid_path",
            ToolError::PathTraversal => "path_traversal",
            ToolError::FileNotFound => "file_not_found",
            ToolError::ReadFailed(_) => "read_failed",
            ToolError::InvalidJson(_) => "invalid_json",
            ToolError::ArrayPathNotFound => "array_path_not_found",
            ToolError::NotAnArray => "not_an_array",
            ToolError::WriteFailed(_) => "write_failed",
            ToolError::DirCreateFailed(_) => "dir_create_failed",
            ToolError::InvalidArguments(_) => "invalid_arguments",
            ToolError::UnknownTool(_) => "unknown_tool",
            ToolError::Internal(_) => "internal",
        }
    }
}
