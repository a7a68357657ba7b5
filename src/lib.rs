//! Markdown Writer - file tools behind the Model Context Protocol
//!
//! This crate provides atomic file writes, file verification, and filtered
//! JSON queries, exposed as MCP tools over a stdio JSON-RPC transport.
//! The implementation prioritizes:
//!
//! 1. **Safety** - Path traversal rejection and all-or-nothing writes
//! 2. **Logging** - Every tool call logged with request context
//! 3. **Totality** - Query filters never fail on heterogeneous data
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `query` - Array path navigation, filter predicates, query orchestration
//! - `storage` - Path resolution, file reader/writer/verifier collaborators
//! - `tools` - Tool catalog and handlers over injected collaborators
//! - `server` - JSON-RPC protocol types, dispatch and stdio transport
//! - `config` - Environment-driven server configuration
//! - `logging` - Structured logging with request context

pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod server;
pub mod storage;
pub mod tools;

pub use config::ServerConfig;
pub use error::ToolError;

/// Initialize the process-wide logger.
///
/// Logs go to stderr; stdout carries protocol messages. Calling this more
/// than once is harmless.
pub fn init_logger(config: &ServerConfig) {
    let _ = env_logger::builder()
        .filter_level(config.log_level)
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .try_init();
}
