//! Chat configuration, resolved once at startup.

use derive_getters::Getters;
use relay_error::{ConfigError, RelayResult};
use relay_models::{AnthropicClient, DEFAULT_MAX_TOKENS};
use std::path::{Path, PathBuf};

/// Environment variable holding the API key (required).
pub const API_KEY_VAR: &str = "LLM_API_KEY";
/// Environment variable naming the model (optional).
pub const MODEL_VAR: &str = "LLM_MODEL";
/// Model used when [`MODEL_VAR`] is unset.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
/// System instruction sent with every request.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
/// Directory, next to the working directory, holding the private `.env`.
pub const PRIVATE_ENV_DIR: &str = "donotcheckin-personalkeyinfo";

/// Immutable settings for the chat loop.
///
/// # Examples
///
/// ```
/// use relay::{ChatConfig, DEFAULT_MODEL};
///
/// let config = ChatConfig::from_lookup(|key| match key {
///     "LLM_API_KEY" => Some("sk-test".to_string()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(config.model(), DEFAULT_MODEL);
/// assert_eq!(*config.max_tokens(), 1024);
/// ```
#[derive(Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChatConfig {
    /// API key for the model endpoint
    api_key: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// System instruction for every turn
    #[builder(default = "DEFAULT_SYSTEM_PROMPT.to_string()")]
    system_prompt: String,
    /// Bound on generated tokens per reply
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
}

impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl ChatConfig {
    /// Creates a builder for `ChatConfig`.
    pub fn builder() -> ChatConfigBuilder {
        ChatConfigBuilder::default()
    }

    /// Resolves configuration from the process environment.
    pub fn from_env() -> RelayResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`.
    ///
    /// A missing or empty API key is an error. A missing or empty model
    /// falls back to [`DEFAULT_MODEL`]; an empty `LLM_MODEL` is treated as
    /// unset rather than sent as an empty model name.
    pub fn from_lookup<F>(lookup: F) -> RelayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(api_key) = lookup(API_KEY_VAR).filter(|k| !k.is_empty()) else {
            tracing::error!(var = API_KEY_VAR, "API key not configured");
            return Err(ConfigError::new(format!(
                "{} environment variable is not set. Please add it to your .env file.",
                API_KEY_VAR
            ))
            .into());
        };

        let mut builder = Self::builder();
        builder.api_key(api_key);
        if let Some(model) = lookup(MODEL_VAR).filter(|m| !m.is_empty()) {
            builder.model(model);
        }

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;
        tracing::debug!(model = %config.model, "Chat configuration resolved");
        Ok(config)
    }

    /// Builds the Anthropic client these settings describe.
    pub fn client(&self) -> RelayResult<AnthropicClient> {
        Ok(AnthropicClient::new(self.api_key.clone(), &self.model)?
            .with_max_tokens(self.max_tokens))
    }
}

/// Where environment settings were loaded from.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EnvSource {
    /// The private `.env` one directory above the working directory.
    #[display("Loaded environment from: {}", _0.display())]
    Private(PathBuf),
    /// dotenvy's default `.env` search.
    #[display("Loaded environment from default locations (no private .env found)")]
    Default,
}

/// Loads `../donotcheckin-personalkeyinfo/.env` relative to `base_dir` if it
/// exists, otherwise falls back to dotenvy's default search. Variables
/// already set in the process environment win.
///
/// # Errors
///
/// A private `.env` that exists but cannot be read or parsed is a
/// [`ConfigError`]. A missing default `.env` is not an error.
pub fn load_env_file(base_dir: &Path) -> RelayResult<EnvSource> {
    let candidate = base_dir.join("..").join(PRIVATE_ENV_DIR).join(".env");

    if candidate.is_file() {
        let path = candidate.canonicalize()?;
        dotenvy::from_path(&path).map_err(|e| {
            ConfigError::new(format!("Failed to load {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "Loaded private env file");
        return Ok(EnvSource::Private(path));
    }

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded default env file"),
        Err(e) => tracing::debug!(error = %e, "No default env file loaded"),
    }
    Ok(EnvSource::Default)
}
