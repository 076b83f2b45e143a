//! Error types for the CLI.

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Library error.
    #[error(transparent)]
    Fparams(#[from] fparams::FparamsError),

    /// JSON serialization error.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message.
        message: String,
    },
}

impl CliError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
