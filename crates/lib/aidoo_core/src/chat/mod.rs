//! Chat module: validates a visitor's message and relays it to the
//! completion service behind the fixed system prompt.

pub mod prompt;

use serde_json::Value;
use thiserror::Error;

use crate::completion::{ChatMessage, CompletionError, CompletionRequest, CompletionService};

pub use prompt::SYSTEM_PROMPT;

/// Model used for every relayed conversation.
pub const MODEL: &str = "gpt-4o-mini";
/// Upper bound on generated tokens per reply.
pub const MAX_TOKENS: u32 = 500;
/// Longest accepted message, in characters, after trimming.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Reasons a chat request body is rejected. The `Display` text is the
/// client-facing error string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Missing message")]
    MissingMessage,

    #[error("Empty message")]
    EmptyMessage,

    #[error("Message too long")]
    MessageTooLong,
}

/// Extracts and validates `message` from a raw JSON request body.
///
/// Returns the trimmed message. Checks run in order: present string, not
/// blank, at most [`MAX_MESSAGE_CHARS`] characters.
pub fn parse_message(body: &[u8]) -> Result<String, ChatError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ChatError::MissingMessage)?;
    let raw = value
        .get("message")
        .and_then(Value::as_str)
        .ok_or(ChatError::MissingMessage)?;
    validate_message(raw).map(str::to_string)
}

/// Trims `raw` and checks it is non-empty and within the length limit.
pub fn validate_message(raw: &str) -> Result<&str, ChatError> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ChatError::MessageTooLong);
    }
    Ok(message)
}

/// Builds the request sent upstream: system prompt, then the user's message.
pub fn build_request(message: &str) -> CompletionRequest {
    CompletionRequest {
        model: MODEL.to_string(),
        max_tokens: MAX_TOKENS,
        messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(message)],
    }
}

/// Relays an already-validated message and returns the reply verbatim.
pub async fn relay(
    service: &dyn CompletionService,
    message: &str,
) -> Result<String, CompletionError> {
    let request = build_request(message);
    let reply = service.complete(&request).await?;
    tracing::debug!(
        message_chars = message.chars().count(),
        reply_chars = reply.chars().count(),
        "relayed chat message"
    );
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::completion::Role;

    #[test]
    fn missing_or_non_string_message() {
        assert_eq!(parse_message(b""), Err(ChatError::MissingMessage));
        assert_eq!(parse_message(b"not json"), Err(ChatError::MissingMessage));
        assert_eq!(parse_message(b"[]"), Err(ChatError::MissingMessage));
        assert_eq!(parse_message(b"{}"), Err(ChatError::MissingMessage));
        assert_eq!(parse_message(br#"{"message": 42}"#), Err(ChatError::MissingMessage));
        assert_eq!(parse_message(br#"{"message": null}"#), Err(ChatError::MissingMessage));
    }

    #[test]
    fn blank_message_is_empty() {
        assert_eq!(parse_message(br#"{"message": ""}"#), Err(ChatError::EmptyMessage));
        assert_eq!(
            parse_message(br#"{"message": " \n\t "}"#),
            Err(ChatError::EmptyMessage)
        );
    }

    #[test]
    fn length_limit_counts_characters_after_trim() {
        let at_limit = "é".repeat(MAX_MESSAGE_CHARS);
        assert_eq!(validate_message(&at_limit), Ok(at_limit.as_str()));

        let padded = format!("   {at_limit}   ");
        assert_eq!(validate_message(&padded), Ok(at_limit.as_str()));

        let over = "a".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(validate_message(&over), Err(ChatError::MessageTooLong));
    }

    #[test]
    fn message_is_trimmed() {
        assert_eq!(
            parse_message(br#"{"message": "  What is PIKA?  "}"#),
            Ok("What is PIKA?".to_string())
        );
    }

    #[test]
    fn error_strings_are_client_facing() {
        assert_eq!(ChatError::MissingMessage.to_string(), "Missing message");
        assert_eq!(ChatError::EmptyMessage.to_string(), "Empty message");
        assert_eq!(ChatError::MessageTooLong.to_string(), "Message too long");
    }

    #[test]
    fn request_has_system_then_user() {
        let req = build_request("hello");
        assert_eq!(req.model, MODEL);
        assert_eq!(req.max_tokens, MAX_TOKENS);
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(req.messages[1].role, Role::User);
        assert_eq!(req.messages[1].content, "hello");
    }

    struct Recording {
        seen: Mutex<Vec<CompletionRequest>>,
    }

    #[async_trait]
    impl CompletionService for Recording {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok("  reply with padding \n".to_string())
        }
    }

    #[tokio::test]
    async fn relay_returns_reply_verbatim() {
        let service = Recording {
            seen: Mutex::new(Vec::new()),
        };
        let reply = relay(&service, "hi there").await.unwrap();
        assert_eq!(reply, "  reply with padding \n");

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], build_request("hi there"));
    }
}
