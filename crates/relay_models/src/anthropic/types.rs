//! Anthropic Messages API request and response types.

use derive_getters::Getters;
use relay_core::{ChatMessage, ChatResponse, ContentBlock};
use serde::{Deserialize, Serialize};

/// Anthropic API request.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// List of messages
    messages: Vec<AnthropicMessage>,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Optional system prompt
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

impl AnthropicRequest {
    /// Creates a builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// Anthropic message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct AnthropicMessage {
    /// Role of the message sender
    role: String,
    /// Content blocks
    content: Vec<AnthropicContentBlock>,
}

impl AnthropicMessage {
    /// Creates a builder for `AnthropicMessage`.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

impl From<&ChatMessage> for AnthropicMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role().to_string(),
            content: vec![AnthropicContentBlock::Text {
                text: message.content().clone(),
            }],
        }
    }
}

/// Content block in an Anthropic request message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Text content
    Text {
        /// Text content
        text: String,
    },
}

/// Anthropic API response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Response ID
    id: String,
    /// Response type
    #[serde(rename = "type")]
    response_type: String,
    /// Role (should be "assistant")
    role: String,
    /// Content blocks
    content: Vec<AnthropicContent>,
    /// Model used
    model: String,
    /// Stop reason
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_reason: Option<String>,
    /// Usage information
    #[serde(skip_serializing_if = "Option::is_none")]
    usage: Option<AnthropicUsage>,
}

impl AnthropicResponse {
    /// Keeps the text blocks, in order. Tool use and other block types are
    /// dropped.
    pub fn into_chat_response(self) -> ChatResponse {
        ChatResponse::new(
            self.content
                .into_iter()
                .filter(|c| c.content_type == "text")
                .filter_map(|c| c.text)
                .map(ContentBlock::new)
                .collect(),
        )
    }
}

/// Content in an Anthropic response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct AnthropicContent {
    /// Content type ("text", "tool_use", ...)
    #[serde(rename = "type")]
    content_type: String,
    /// Text content, present on text blocks only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Usage information from Anthropic API.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    /// Input tokens
    input_tokens: u32,
    /// Output tokens
    output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_single_turn_shape() {
        let request = AnthropicRequest::builder()
            .model("claude-sonnet-4-20250514")
            .max_tokens(1024u32)
            .system(Some("You are a helpful assistant.".to_string()))
            .messages(vec![
                AnthropicMessage::builder()
                    .role("user")
                    .content(vec![AnthropicContentBlock::Text {
                        text: "Hello".to_string(),
                    }])
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 1024,
                "system": "You are a helpful assistant.",
                "messages": [
                    {"role": "user", "content": [{"type": "text", "text": "Hello"}]}
                ]
            })
        );
    }

    #[test]
    fn chat_message_converts_to_text_block() {
        let message = AnthropicMessage::from(&ChatMessage::user("Hello"));
        assert_eq!(message.role(), "user");
        assert_eq!(
            message.content(),
            &vec![AnthropicContentBlock::Text {
                text: "Hello".to_string()
            }]
        );
    }

    #[test]
    fn system_is_omitted_when_absent() {
        let request = AnthropicRequest::builder()
            .model("m")
            .max_tokens(16u32)
            .messages(Vec::new())
            .build()
            .unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("system").is_none());
    }

    #[test]
    fn response_keeps_text_blocks_in_order() {
        let body = json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "content": [
                {"type": "text", "text": "first"},
                {"type": "tool_use", "id": "toolu_1", "name": "lookup", "input": {}},
                {"type": "text", "text": "second"}
            ],
            "usage": {"input_tokens": 12, "output_tokens": 4}
        });
        let response: AnthropicResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.usage().as_ref().map(|u| *u.output_tokens()), Some(4));

        let chat = response.into_chat_response();
        assert_eq!(chat.texts().collect::<Vec<_>>(), ["first", "second"]);
    }

    #[test]
    fn response_without_usage_parses() {
        let body = json!({
            "id": "msg_02",
            "type": "message",
            "role": "assistant",
            "model": "m",
            "content": [{"type": "text", "text": "Hi there!"}]
        });
        let response: AnthropicResponse = serde_json::from_value(body).unwrap();
        assert!(response.usage().is_none());
        assert_eq!(
            response.into_chat_response().texts().next(),
            Some("Hi there!")
        );
    }
}
