//! Shared response envelope types for API handlers.
//!
//! Use these instead of ad-hoc `serde_json::json!` literals to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "message": ... }` payload for operations whose result is a
/// human-readable outcome (e.g. the like toggle).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
