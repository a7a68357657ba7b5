//! Request context management.
//!
//! Provides per-request identity for logging and state tracking.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logging::structured::LogContext;

/// Context for a single protocol request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub received_at: DateTime<Utc>,
    pub method: String,
}

impl RequestContext {
    pub fn new(method: &str) -> Self {
        let request_id = format!("req-{}", &Uuid::new_v4().to_string()[..8]);

        Self {
            request_id,
            received_at: Utc::now(),
            method: method.to_string(),
        }
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.request_id)
    }

    /// Milliseconds since the request arrived.
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.received_at).num_milliseconds()
    }
}
