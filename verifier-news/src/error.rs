//! Error types for the news clients

use thiserror::Error;
use verifier_core::VerifierError;

/// Errors that can occur while searching or fetching articles
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Article scraping failed
    #[error("Scrape failed: {0}")]
    ScrapeFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NewsError {
    /// Build an error from a non-success HTTP status and its body
    pub(crate) fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            NewsError::RateLimited
        } else {
            NewsError::ApiError {
                status: status.as_u16(),
                message: body,
            }
        }
    }

    /// Convert into the verifier error for a failed search
    pub fn into_search_error(self, provider: &str) -> VerifierError {
        match self {
            NewsError::InvalidConfig(msg) => VerifierError::config(msg),
            other => VerifierError::search(format!("{}: {}", provider, other)),
        }
    }

    /// Convert into the verifier error for a failed article fetch
    pub fn into_fetch_error(self, url: &str) -> VerifierError {
        match self {
            NewsError::InvalidConfig(msg) => VerifierError::config(msg),
            other => VerifierError::fetch(url, other.to_string()),
        }
    }
}
