//! HTTP client for the Anthropic Messages API.

use crate::anthropic::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use async_trait::async_trait;
use relay_core::{ChatMessage, ChatResponse};
use relay_error::{AnthropicErrorKind, RelayResult};
use relay_interface::ChatClient;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default Anthropic API base URL.
pub const ANTHROPIC_ENDPOINT: &str = "https://api.anthropic.com";
/// API version sent in the `anthropic-version` header.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Default bound on generated tokens per reply.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic HTTP client.
///
/// Each call is a single, non-streamed request. Nothing is retried.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    endpoint: String,
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for authentication
    /// * `model` - Model identifier
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn new(api_key: impl Into<String>, model: impl AsRef<str>) -> RelayResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AnthropicErrorKind::Http(e.to_string()))?;

        debug!(model = %model.as_ref(), "Created Anthropic client");

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.as_ref().to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            endpoint: ANTHROPIC_ENDPOINT.to_string(),
        })
    }

    /// Overrides the output-length bound.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Overrides the API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns the output-length bound.
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Assembles a single-turn request: the system instruction plus one user
    /// message.
    pub fn build_request(&self, system: &str, user_text: &str) -> RelayResult<AnthropicRequest> {
        let message = AnthropicMessage::from(&ChatMessage::user(user_text));

        let request = AnthropicRequest::builder()
            .model(self.model.clone())
            .max_tokens(self.max_tokens)
            .system(Some(system.to_string()))
            .messages(vec![message])
            .build()
            .map_err(|e| AnthropicErrorKind::Request(e.to_string()))?;

        Ok(request)
    }

    /// Sends a generation request to the Anthropic API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body cannot be parsed.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate(&self, request: &AnthropicRequest) -> RelayResult<AnthropicResponse> {
        let url = format!("{}/v1/messages", self.endpoint);

        debug!(
            url = %url,
            message_count = request.messages().len(),
            max_tokens = request.max_tokens(),
            "Sending request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                AnthropicErrorKind::Http(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, error = %body, "API error");
            return Err(AnthropicErrorKind::ApiError {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        let parsed: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            AnthropicErrorKind::Parse(e.to_string())
        })?;

        debug!(
            id = %parsed.id(),
            blocks = parsed.content().len(),
            stop_reason = ?parsed.stop_reason(),
            input_tokens = parsed.usage().as_ref().map(|u| *u.input_tokens()),
            output_tokens = parsed.usage().as_ref().map(|u| *u.output_tokens()),
            "Received response"
        );

        Ok(parsed)
    }
}

#[async_trait]
impl ChatClient for AnthropicClient {
    async fn send(&self, system: &str, user_text: &str) -> RelayResult<ChatResponse> {
        let request = self.build_request(system, user_text)?;
        let response = self.generate(&request).await?;
        Ok(response.into_chat_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anthropic::AnthropicContentBlock;

    #[test]
    fn request_carries_model_and_bound() {
        let client = AnthropicClient::new("key", "claude-test")
            .unwrap()
            .with_max_tokens(64);
        let request = client.build_request("Be brief.", "Hello").unwrap();

        assert_eq!(request.model(), "claude-test");
        assert_eq!(*request.max_tokens(), 64);
        assert_eq!(request.system().as_deref(), Some("Be brief."));
        assert_eq!(request.messages().len(), 1);
        assert_eq!(request.messages()[0].role(), "user");
        assert_eq!(
            request.messages()[0].content(),
            &vec![AnthropicContentBlock::Text {
                text: "Hello".to_string()
            }]
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let client = AnthropicClient::new("sk-secret", "m").unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
