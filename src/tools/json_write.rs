//! `json_write` tool: validated, atomic JSON writes.
//!
//! Content must parse as JSON before anything touches the file system. The
//! content is written verbatim; formatting is not normalized.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::logging::structured::LogContext;
use crate::storage::paths::resolve;
use crate::{log_info, log_warn};

use super::context::ToolContext;
use super::write::WriteOutput;
use super::{structured_output, ToolDefinition, ToolOutput};

pub const NAME: &str = "json_write";

#[derive(Debug, Clone, Deserialize)]
pub struct JsonWriteArgs {
    pub path: String,
    pub content: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "Write JSON content to a file path with validation and atomic writes",
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Absolute or relative path to the JSON file to write"
                },
                "content": {
                    "type": "string",
                    "description": "JSON content to write to the file (must be valid JSON)"
                }
            },
            "required": ["path", "content"]
        }),
    )
}

pub fn handle(
    tools: &ToolContext,
    args: JsonWriteArgs,
    ctx: &LogContext,
) -> Result<ToolOutput, ToolError> {
    let path = resolve(&args.path)?;

    if let Err(e) = serde_json::from_str::<Value>(&args.content) {
        log_warn!(ctx, "JSON_INVALID", path = path.display(), error = e.to_string());
        return Err(ToolError::InvalidJson(e.to_string()));
    }

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

    let text = format!("Successfully wrote {} bytes of JSON to {}", size, output.path);
    structured_output(text, &output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryFileStore;
    use std::path::Path;

    #[test]
    fn test_write_valid_json() {
        let store = InMemoryFileStore::new();
        let tools = ToolContext::in_memory(&store);
        let content = "{\n  \"items\": [1, 2]\n}";
        let args = JsonWriteArgs {
            path: "/data/items.json".to_string(),
            content: content.to_string(),
        };

        let output = handle(&tools, args, &LogContext::new("test")).unwrap();
        assert_eq!(
            output.text,
            format!("Successfully wrote {} bytes of JSON to /data/items.json", content.len())
        );
        assert_eq!(store.get(Path::new("/data/items.json")).as_deref(), Some(content));
    }

    #[test]
    fn test_invalid_json_not_written() {
        let store = InMemoryFileStore::new();
        let tools = ToolContext::in_memory(&store);
        let args = JsonWriteArgs {
            path: "/data/items.json".to_string(),
            content: "{\"items\": [1, 2".to_string(),
        };

        let result = handle(&tools, args, &LogContext::new("test"));
        assert!(matches!(result, Err(ToolError::InvalidJson(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_scalar_json_accepted() {
        let store = InMemoryFileStore::new();
        let tools = ToolContext::in_memory(&store);
        let args = JsonWriteArgs {
            path: "/data/flag.json".to_string(),
            content: "true".to_string(),
        };

        assert!(handle(&tools, args, &LogContext::new("test")).is_ok());
    }
}
