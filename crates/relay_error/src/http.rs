//! HTTP error types.

/// HTTP transport or status error with source location.
#[derive(Debug, Clone)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// HTTP status code, when the server answered at all
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use relay_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert!(err.status.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an HttpError for a non-success status code.
    ///
    /// # Examples
    ///
    /// ```
    /// use relay_error::HttpError;
    ///
    /// let err = HttpError::status(503, "Service Unavailable");
    /// assert_eq!(err.status, Some(503));
    /// ```
    #[track_caller]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "HTTP Error: status {}: {} at line {} in {}",
                status, self.message, self.line, self.file
            ),
            None => write!(
                f,
                "HTTP Error: {} at line {} in {}",
                self.message, self.line, self.file
            ),
        }
    }
}

impl std::error::Error for HttpError {}
