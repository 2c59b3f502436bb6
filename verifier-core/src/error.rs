//! Error types for the verifier

use thiserror::Error;

/// Verifier-wide error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    #[error("Search unavailable: {0}")]
    SearchUnavailable(String),

    #[error("Fetch failed for {url}: {message}")]
    FetchFailed { url: String, message: String },

    #[error("Summarization failed: {0}")]
    SummarizationFailed(String),

    #[error("Timed out after {secs}s: {operation}")]
    Timeout { operation: String, secs: u64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VerifierError {
    pub fn search(msg: impl Into<String>) -> Self {
        VerifierError::SearchUnavailable(msg.into())
    }

    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        VerifierError::FetchFailed {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn summarization(msg: impl Into<String>) -> Self {
        VerifierError::SummarizationFailed(msg.into())
    }

    pub fn timeout(operation: impl Into<String>, secs: u64) -> Self {
        VerifierError::Timeout {
            operation: operation.into(),
            secs,
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        VerifierError::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        VerifierError::Config(msg.into())
    }

    /// Whether the pipeline may continue past this error with a degraded result
    pub fn is_degradable(&self) -> bool {
        !matches!(
            self,
            VerifierError::InvalidInput(_) | VerifierError::Config(_)
        )
    }
}

/// Result type alias for verifier operations
pub type VerifierResult<T> = Result<T, VerifierError>;
