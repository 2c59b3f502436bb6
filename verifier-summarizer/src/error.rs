use thiserror::Error;
use verifier_core::VerifierError;

/// Errors from the summarization client
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("OpenAI API error: {0}")]
    Api(String),

    #[error("No summary in OpenAI response")]
    EmptyResponse,
}

impl From<SummarizeError> for VerifierError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::MissingApiKey => VerifierError::config(err.to_string()),
            other => VerifierError::summarization(other.to_string()),
        }
    }
}
