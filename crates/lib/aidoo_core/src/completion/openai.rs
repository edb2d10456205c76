//! OpenAI chat completions client.
//!
//! Calls `POST {base_url}/chat/completions` once per request. No retry, no
//! streaming, no client-side timeout.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{CompletionError, CompletionRequest, CompletionService};

/// Public OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}

/// OpenAI-compatible completion client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    /// Creates a client for `base_url` (e.g. `https://api.openai.com/v1`).
    ///
    /// A missing key is only reported when a completion is requested.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        tracing::debug!(
            model = %request.model,
            max_tokens = request.max_tokens,
            messages = request.messages.len(),
            "requesting completion"
        );

        let resp = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {api_key}"))
            .json(request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(CompletionError::Status { status, body });
        }

        let data: OpenAIResponse = resp
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::NoChoices)?;

        choice
            .message
            .content
            .ok_or_else(|| CompletionError::Parse("choice has no message content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = OpenAiClient::new("http://localhost:9999/v1/", None);
        assert_eq!(client.endpoint(), "http://localhost:9999/v1/chat/completions");
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = OpenAiClient::new("http://127.0.0.1:9", None);
        let req = CompletionRequest {
            model: "gpt-4o-mini".into(),
            max_tokens: 500,
            messages: vec![],
        };
        let err = client.complete(&req).await.unwrap_err();
        assert!(matches!(err, CompletionError::MissingApiKey));
    }
}
