//! Anthropic Messages API error types.

/// Anthropic-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnthropicErrorKind {
    /// HTTP client construction or transport failure
    #[display("HTTP transport failed: {_0}")]
    Http(String),
    /// Request could not be assembled
    #[display("Invalid request: {_0}")]
    Request(String),
    /// API answered with a non-success status
    #[display("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body returned by the API
        message: String,
    },
    /// Response body did not match the expected shape
    #[display("Failed to parse response: {_0}")]
    Parse(String),
}

/// Anthropic error with location tracking.
///
/// # Examples
///
/// ```
/// use relay_error::{AnthropicError, AnthropicErrorKind};
///
/// let err = AnthropicError::new(AnthropicErrorKind::ApiError {
///     status: 401,
///     message: "invalid x-api-key".to_string(),
/// });
/// assert!(format!("{}", err).contains("401"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Anthropic Error: {} at line {} in {}", kind, line, file)]
pub struct AnthropicError {
    kind: AnthropicErrorKind,
    line: u32,
    file: &'static str,
}

impl AnthropicError {
    /// Create a new AnthropicError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnthropicErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AnthropicErrorKind {
        &self.kind
    }
}
