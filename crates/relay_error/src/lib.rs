//! Error types for the relay API clients.
//!
//! Every error records the file and line where it was constructed, so a fatal
//! error printed by a binary points straight at the failing call site.

mod anthropic;
mod config;
mod http;
mod io;
mod json;

pub use anthropic::{AnthropicError, AnthropicErrorKind};
pub use config::ConfigError;
pub use http::HttpError;
pub use io::IoError;
pub use json::JsonError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum RelayErrorKind {
    /// HTTP error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Configuration error
    Config(ConfigError),
    /// Console I/O error
    Io(IoError),
    /// Anthropic API error
    Anthropic(AnthropicError),
}

impl std::fmt::Display for RelayErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayErrorKind::Http(e) => write!(f, "{}", e),
            RelayErrorKind::Json(e) => write!(f, "{}", e),
            RelayErrorKind::Config(e) => write!(f, "{}", e),
            RelayErrorKind::Io(e) => write!(f, "{}", e),
            RelayErrorKind::Anthropic(e) => write!(f, "{}", e),
        }
    }
}

impl From<std::io::Error> for RelayErrorKind {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        RelayErrorKind::Io(IoError::new(err.to_string()))
    }
}

impl From<AnthropicErrorKind> for RelayErrorKind {
    #[track_caller]
    fn from(kind: AnthropicErrorKind) -> Self {
        RelayErrorKind::Anthropic(AnthropicError::new(kind))
    }
}

/// Relay error with kind discrimination.
#[derive(Debug)]
pub struct RelayError(Box<RelayErrorKind>);

impl RelayError {
    /// Create a new error from a kind.
    pub fn new(kind: RelayErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RelayErrorKind {
        &self.0
    }
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Relay Error: {}", self.0)
    }
}

impl std::error::Error for RelayError {}

// Generic From implementation for any type that converts to RelayErrorKind
impl<T> From<T> for RelayError
where
    T: Into<RelayErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for relay operations.
pub type RelayResult<T> = std::result::Result<T, RelayError>;
