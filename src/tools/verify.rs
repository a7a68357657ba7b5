//! `verify` tool: existence check with size and line statistics.

use serde::Deserialize;
use serde_json::json;

use crate::error::ToolError;
use crate::log_info;
use crate::logging::structured::LogContext;
use crate::storage::paths::resolve;
use crate::storage::verifier::FileInfo;

use super::context::ToolContext;
use super::{structured_output, ToolDefinition, ToolOutput};

pub const NAME: &str = "verify";

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyArgs {
    pub path: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "Verify that a markdown file exists and get its statistics",
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Absolute or relative path to the markdown file to verify"
                }
            },
            "required": ["path"]
        }),
    )
}

pub fn handle(
    tools: &ToolContext,
    args: VerifyArgs,
    ctx: &LogContext,
) -> Result<ToolOutput, ToolError> {
    let path = resolve(&args.path)?;

    log_info!(ctx, "TOOL_CALL", path = path.display());

    let info: FileInfo = tools.verifier.verify(&path)?;

    let text = format!(
        "File verified: {} ({} bytes, {} lines)",
        info.path, info.size, info.lines
    );
    structured_output(text, &info)
}
