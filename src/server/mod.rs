//! Protocol server module.
//!
//! Exposes the tool catalog over JSON-RPC 2.0:
//! - `protocol` - message types and error codes
//! - `context` - per-request identity for log correlation
//! - `handler` - method dispatch
//! - `transport` - line-delimited stdio loop

pub mod context;
pub mod handler;
pub mod protocol;
pub mod transport;

pub use context::*;
pub use handler::*;
pub use protocol::*;
pub use transport::*;
