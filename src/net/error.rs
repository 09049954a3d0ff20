//! API error type and display-message extraction.
//!
//! Every HTTP failure is reduced to a single human-readable string with a
//! fixed precedence: the backend's structured `detail` field, then a nested
//! `error.message` field, then a generic fallback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure from the REST layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is already display-ready.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Transport-level failure (offline, DNS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The capability is not offered for this resource.
    #[error("operation not supported")]
    Unsupported,
}

impl ApiError {
    /// HTTP status, when the server responded at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Extract a display message from an error response body.
///
/// Precedence: `detail` → `error.message` → generic fallback naming the
/// status code.
pub fn response_message(status: u16, body: &Value) -> String {
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return detail.to_owned();
    }
    if let Some(message) = body
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return message.to_owned();
    }
    format!("request failed with status {status}")
}
