//! LLM provider integrations for relay.
//!
//! Currently a single provider: the Anthropic Messages API, exposed as a
//! [`relay_interface::ChatClient`].

mod anthropic;

pub use anthropic::{
    ANTHROPIC_ENDPOINT, ANTHROPIC_VERSION, AnthropicClient, AnthropicContent,
    AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage, DEFAULT_MAX_TOKENS,
};
