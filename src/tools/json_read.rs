//! `json_read` tool: raw file contents.
//!
//! Returns the file as-is; the content is not parsed.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ToolError;
use crate::log_info;
use crate::logging::structured::LogContext;
use crate::storage::paths::resolve;

use super::context::ToolContext;
use super::{structured_output, ToolDefinition, ToolOutput};

pub const NAME: &str = "json_read";

#[derive(Debug, Clone, Deserialize)]
pub struct JsonReadArgs {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReadOutput {
    pub path: String,
    pub content: String,
    pub size: u64,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "Read JSON file contents from a file path",
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Absolute or relative path to the JSON file to read"
                }
            },
            "required": ["path"]
        }),
    )
}

pub fn handle(
    tools: &ToolContext,
    args: JsonReadArgs,
    ctx: &LogContext,
) -> Result<ToolOutput, ToolError> {
    let path = resolve(&args.path)?;

    log_info!(ctx, "TOOL_CALL", path = path.display());

    let content = tools.reader.read(&path)?;
    let output = JsonReadOutput {
        path: path.display().to_string(),
        size: content.len() as u64,
        content,
    };

    let text = output.content.clone();
    structured_output(text, &output)
}
