//! Console I/O error types.

/// Error reading from or writing to the console.
#[derive(Debug, Clone)]
pub struct IoError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl IoError {
    /// Create a new IoError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "I/O Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for IoError {}
