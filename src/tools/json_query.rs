//! `json_query` tool: filtered selection from a JSON array in a file.

use serde::Deserialize;
use serde_json::json;

use crate::error::ToolError;
use crate::log_info;
use crate::logging::structured::LogContext;
use crate::query::engine::{parse_document, query, QueryRequest};
use crate::storage::paths::resolve;

use super::context::ToolContext;
use super::{to_structured, ToolDefinition, ToolOutput};

pub const NAME: &str = "json_query";

#[derive(Debug, Clone, Deserialize)]
pub struct JsonQueryArgs {
    pub path: String,
    #[serde(flatten)]
    pub request: QueryRequest,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "Query JSON arrays with filtering, supports nested paths and multiple filter operations",
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Absolute or relative path to the JSON file"
                },
                "arrayPath": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Path to array in JSON structure (e.g., [\"data\", \"items\"])"
                },
                "filters": {
                    "type": "array",
                    "description": "Array of filter conditions (AND logic)",
                    "items": {
                        "type": "object",
                        "properties": {
                            "field": {
                                "type": "string",
                                "description": "Top-level field name of each element (e.g., 'regions', 'type')"
                            },
                            "op": {
                                "type": "string",
                                "enum": ["eq", "neq", "contains", "is_null", "is_not_null"],
                                "description": "Operation: eq, neq, contains, is_null, is_not_null"
                            },
                            "value": {
                                "description": "Value to compare (required for eq/neq/contains)"
                            }
                        },
                        "required": ["field", "op"]
                    }
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of results to return"
                }
            },
            "required": ["path"]
        }),
    )
}

pub fn handle(
    tools: &ToolContext,
    args: JsonQueryArgs,
    ctx: &LogContext,
) -> Result<ToolOutput, ToolError> {
    let path = resolve(&args.path)?;

    log_info!(
        ctx,
        "TOOL_CALL",
        path = path.display(),
        array_path = args.request.array_path,
        filter_count = args.request.filters.len()
    );

    let content = tools.reader.read(&path)?;
    let document = parse_document(&content)?;
    let result = query(&document, &args.request, ctx)?;

    let structured = to_structured(&result)?;
    Ok(ToolOutput::new(structured.to_string(), structured))
}
