//! Error types for the gist summarization engine.

use thiserror::Error;

/// The main error type for gist operations.
#[derive(Error, Debug)]
pub enum GistError {
    /// Linguistic resources (stop words, abbreviations) could not be loaded.
    ///
    /// Fatal for the current request only. The provider stays uninitialized,
    /// so a later request retries the load.
    #[error("Linguistic resources unavailable: {reason}. {remediation}")]
    ResourceUnavailable {
        /// What went wrong.
        reason: String,
        /// What the user can do about it.
        remediation: String,
    },

    /// A document could not be converted to plain text.
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    /// The document format is not supported.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid caller-supplied input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GistError {
    /// Builds a [`GistError::ResourceUnavailable`].
    pub fn resource_unavailable(reason: impl Into<String>, remediation: impl Into<String>) -> Self {
        GistError::ResourceUnavailable {
            reason: reason.into(),
            remediation: remediation.into(),
        }
    }
}

/// Result type alias for gist operations.
pub type Result<T> = std::result::Result<T, GistError>;

impl From<serde_json::Error> for GistError {
    fn from(err: serde_json::Error) -> Self {
        GistError::Config(err.to_string())
    }
}

impl From<zip::result::ZipError> for GistError {
    fn from(err: zip::result::ZipError) -> Self {
        GistError::Extraction(err.to_string())
    }
}
