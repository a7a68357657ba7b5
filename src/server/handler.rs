//! Method dispatch.
//!
//! Maps JSON-RPC methods onto the tool catalog. Tool failures become
//! `isError` results; malformed calls become JSON-RPC errors.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::ServerConfig;
use crate::error::ToolError;
use crate::tools::{call_tool, tool_definitions, ToolContext};

use super::context::RequestContext;
use super::protocol::{
    CallToolParams, InitializeParams, JsonRpcRequest, JsonRpcResponse, RpcError,
    JSONRPC_VERSION, LATEST_PROTOCOL_VERSION,
};

pub struct RequestHandler {
    config: ServerConfig,
    tools: ToolContext,
}

impl RequestHandler {
    pub fn new(config: ServerConfig, tools: ToolContext) -> Self {
        Self { config, tools }
    }

    /// Handle one decoded message. Notifications produce no response.
    pub fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let ctx = RequestContext::new(&request.method);
        let log_ctx = ctx.log_context();

        log::debug!(
            "{} REQUEST_RECEIVED method={} notification={}",
            log_ctx,
            request.method,
            request.is_notification()
        );

        if request.jsonrpc != JSONRPC_VERSION {
            log::warn!(
                "{} REQUEST_INVALID jsonrpc={:?}",
                log_ctx,
                request.jsonrpc
            );
            return request.id.map(|id| {
                JsonRpcResponse::failure(id, RpcError::invalid_request("jsonrpc must be \"2.0\""))
            });
        }

        let id = match request.id {
            Some(id) => id,
            None => return None,
        };

        let outcome = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tool_definitions() })),
            "tools/call" => self.call(request.params, &ctx),
            other => Err(RpcError::method_not_found(other)),
        };

        log::debug!(
            "{} REQUEST_COMPLETE method={} ok={} elapsed_ms={}",
            log_ctx,
            ctx.method,
            outcome.is_ok(),
            ctx.elapsed_ms()
        );

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    fn initialize(&self, params: Value) -> Result<Value, RpcError> {
        let params: InitializeParams = if params.is_null() {
            InitializeParams::default()
        } else {
            parse_params(params)?
        };
        let protocol_version = params
            .protocol_version
            .unwrap_or_else(|| LATEST_PROTOCOL_VERSION.to_string());

        log::info!(
            "SERVER_INITIALIZED name={} version={} protocol_version={}",
            self.config.server_name,
            self.config.server_version,
            protocol_version
        );

        Ok(json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "serverInfo": {
                "name": self.config.server_name,
                "version": self.config.server_version
            }
        }))
    }

    fn call(&self, params: Value, ctx: &RequestContext) -> Result<Value, RpcError> {
        let params: CallToolParams = parse_params(params)?;

        match call_tool(&self.tools, &params.name, params.arguments, &ctx.log_context()) {
            Ok(output) => Ok(json!({
                "content": [{ "type": "text", "text": output.text }],
                "structuredContent": output.structured,
                "isError": false
            })),
            Err(e @ ToolError::UnknownTool(_)) | Err(e @ ToolError::InvalidArguments(_)) => {
                Err(RpcError::invalid_params(&e.to_string()))
            }
            Err(e) => Ok(json!({
                "content": [{ "type": "text", "text": e.to_string() }],
                "isError": true
            })),
        }
    }
}

fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, RpcError> {
    serde_json::from_value(params).map_err(|e| RpcError::invalid_params(&e.to_string()))
}
