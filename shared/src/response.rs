//! API Response types
//!
//! Wire structure returned by the invoice status endpoint.

use serde::{Deserialize, Serialize};

/// Status-check response
///
/// The endpoint answers:
///
/// ```json
/// {
///     "success": true,
///     "message": "Status retrieved",
///     "data": { ... }
/// }
/// ```
///
/// `success` decides the UI flow; `message` is surfaced to the user verbatim
/// on failure; `data` is an opaque server payload this layer does not
/// interpret. Any body that does not fit this shape is treated as a
/// malformed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl StatusCheckResult {
    /// Server-supplied message, or a generic fallback
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}
