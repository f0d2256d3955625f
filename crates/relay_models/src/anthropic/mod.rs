mod client;
mod types;

pub use client::{ANTHROPIC_ENDPOINT, ANTHROPIC_VERSION, AnthropicClient, DEFAULT_MAX_TOKENS};
pub use types::{
    AnthropicContent, AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
};
