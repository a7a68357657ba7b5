//! Tool catalog and dispatch.
//!
//! Every tool resolves its path argument first, then calls the injected
//! collaborators in its [`ToolContext`]:
//! - `write` - atomic markdown writes
//! - `verify` - size and line statistics
//! - `json_read` - raw file contents
//! - `json_write` - validated JSON writes
//! - `json_query` - filtered selection from a JSON array

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;
use crate::logging::structured::LogContext;
use crate::{log_debug, log_warn};

pub mod context;
pub mod json_query;
pub mod json_read;
pub mod json_write;
pub mod verify;
pub mod write;

pub use context::ToolContext;

/// Tool metadata advertised through `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(name: &str, description: &str, input_schema: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Successful tool result: human-readable text plus the typed output.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub text: String,
    pub structured: Value,
}

impl ToolOutput {
    pub fn new(text: String, structured: Value) -> Self {
        Self { text, structured }
    }
}

lazy_static! {
    static ref TOOL_DEFINITIONS: Vec<ToolDefinition> = vec![
        write::definition(),
        verify::definition(),
        json_read::definition(),
        json_write::definition(),
        json_query::definition(),
    ];
}

/// All registered tools, in registration order.
pub fn tool_definitions() -> &'static [ToolDefinition] {
    &TOOL_DEFINITIONS
}

/// Invoke the tool called `name` with raw JSON `arguments`.
///
/// Absent arguments are treated as an empty object.
pub fn call_tool(
    tools: &ToolContext,
    name: &str,
    arguments: Value,
    ctx: &LogContext,
) -> Result<ToolOutput, ToolError> {
    let ctx = ctx.with_tool(name);

    let result = match name {
        write::NAME => parse_args(arguments).and_then(|args| write::handle(tools, args, &ctx)),
        verify::NAME => parse_args(arguments).and_then(|args| verify::handle(tools, args, &ctx)),
        json_read::NAME => {
            parse_args(arguments).and_then(|args| json_read::handle(tools, args, &ctx))
        }
        json_write::NAME => {
            parse_args(arguments).and_then(|args| json_write::handle(tools, args, &ctx))
        }
        json_query::NAME => {
            parse_args(arguments).and_then(|args| json_query::handle(tools, args, &ctx))
        }
        _ => Err(ToolError::UnknownTool(name.to_string())),
    };

    match &result {
        Ok(output) => {
            log_debug!(ctx, "TOOL_COMPLETE", text_length = output.text.len());
        }
        Err(e) => {
            log_warn!(ctx, "TOOL_FAILED", kind = e.kind(), error = e.to_string());
        }
    }

    result
}

fn parse_args<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

pub(crate) fn to_structured<T: Serialize>(output: &T) -> Result<Value, ToolError> {
    serde_json::to_value(output).map_err(|e| ToolError::Internal(e.to_string()))
}

pub(crate) fn structured_output<T: Serialize>(
    text: String,
    output: &T,
) -> Result<ToolOutput, ToolError> {
    Ok(ToolOutput::new(text, to_structured(output)?))
}
