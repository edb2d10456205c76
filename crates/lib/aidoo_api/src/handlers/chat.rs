//! Chat relay endpoint.

use aidoo_core::chat;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppResult;
use crate::models::ChatResponse;

/// `POST /api/chat`: validate the message, relay it, return the reply.
///
/// The body is parsed by hand rather than with the `Json` extractor so that
/// a missing content type or broken JSON is reported as `Missing message`.
/// Accepted shape: [`ChatRequest`](crate::models::ChatRequest).
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ChatResponse>> {
    let message = chat::parse_message(&body)?;
    let reply = chat::relay(state.completion.as_ref(), &message).await?;
    Ok(Json(ChatResponse { reply }))
}

/// `OPTIONS /api/chat`: CORS preflight.
pub async fn chat_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
