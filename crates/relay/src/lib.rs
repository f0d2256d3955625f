//! Thin command-line clients for an exchange-rate service and a hosted chat
//! model.
//!
//! The `check-api` binary prints one exchange-rate snapshot; the `agent`
//! binary runs an interactive single-turn chat loop. This crate re-exports
//! the pieces both are built from.

mod chat_loop;
mod config;

pub use chat_loop::{ASSISTANT_LABEL, ChatLoop, ChatState, FAREWELL, PROMPT, SENTINEL, is_sentinel};
pub use config::{
    API_KEY_VAR, ChatConfig, ChatConfigBuilder, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, EnvSource,
    MODEL_VAR, PRIVATE_ENV_DIR, load_env_file,
};

pub use relay_core::{
    ChatMessage, ChatResponse, ContentBlock, ExchangeRateResponse, RateSummary, Role,
    init_tracing,
};
pub use relay_error::{
    AnthropicError, AnthropicErrorKind, ConfigError, HttpError, IoError, JsonError, RelayError,
    RelayErrorKind, RelayResult,
};
pub use relay_interface::{ChatClient, LineSource, ScriptedLines, StdinLines};
pub use relay_models::{AnthropicClient, AnthropicRequest, AnthropicResponse};
pub use relay_rates::{
    EXCHANGE_RATE_ENDPOINT, PLACEHOLDER, RateFetcher, TARGET_CURRENCY, parse_response,
    render_summary,
};
