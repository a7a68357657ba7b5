//! Structured logging utilities.
//!
//! Provides context-aware logging with request_id and tool name included
//! in every log message.

use std::fmt;

/// Logging context for a single protocol request.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub request_id: String,
    pub tool: Option<String>,
}

impl LogContext {
    pub fn new(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            tool: None,
        }
    }

    pub fn with_tool(&self, tool: &str) -> Self {
        Self {
            request_id: self.request_id.clone(),
            tool: Some(tool.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tool {
            Some(tool) => write!(f, "[request={}] [tool={}]", self.request_id, tool),
            None => write!(f, "[request={}]", self.request_id),
        }
    }
}

/// Shared expansion for the level macros below.
///
/// Renders `<ctx> <EVENT> key=value ...` with each value in `Debug` form.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_event {
    ($level:ident, $ctx:expr, $event:expr, $($key:ident = $value:expr),+ $(,)?) => {
        log::$level!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),+), $($value),+)
        )
    };
}

#[macro_export]
macro_rules! log_info {
    ($($args:tt)+) => {
        $crate::__log_event!(info, $($args)+);
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($args:tt)+) => {
        $crate::__log_event!(warn, $($args)+);
    };
}

#[macro_export]
macro_rules! log_error {
    ($($args:tt)+) => {
        $crate::__log_event!(error, $($args)+);
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($args:tt)+) => {
        $crate::__log_event!(debug, $($args)+);
    };
}
