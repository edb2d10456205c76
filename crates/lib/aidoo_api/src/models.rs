//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// `POST /api/chat` request body.
///
/// The handler validates the raw body itself so malformed input maps to the
/// relay's own error strings; this type documents the accepted shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /api/chat` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Error body for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
