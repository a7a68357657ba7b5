//! `write` tool: atomic text file writes.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ToolError;
use crate::log_info;
use crate::logging::structured::LogContext;
use crate::storage::paths::resolve;

use super::context::ToolContext;
use super::{structured_output, ToolDefinition, ToolOutput};

pub const NAME: &str = "write";

#[derive(Debug, Clone, Deserialize)]
pub struct WriteArgs {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteOutput {
    pub path: String,
    pub size: u64,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "Write markdown content to a file path with atomic writes",
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Absolute or relative path to the markdown file to write"
                },
                "content": {
                    "type": "string",
                    "description": "Markdown content to write to the file"
                }
            },
            "required": ["path", "content"]
        }),
    )
}

pub fn handle(
    tools: &ToolContext,
    args: WriteArgs,
    ctx: &LogContext,
) -> Result<ToolOutput, ToolError> {
    let path = resolve(&args.path)?;

    log_info!(
        ctx,
        "TOOL_CALL",
        path = path.display(),
        content_length = args.content.len()
    );

    let size = tools.writer.write(&path, &args.content)?;
    let output = WriteOutput {
        path: path.display().to_string(),
        size,
    };

    let text = format!("Successfully wrote {} bytes to {}", size, output.path);
    structured_output(text, &output)
}
