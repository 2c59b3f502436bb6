//! Capability traits for the external collaborators of a verification
//!
//! Search, article fetching and summarization are injected into the service
//! behind these traits so classification can run without any network.

use async_trait::async_trait;

use crate::error::VerifierResult;
use crate::search::SearchResult;

/// Web search provider
#[async_trait]
pub trait NewsSearcher: Send + Sync {
    /// Provider name for logs and reports
    fn name(&self) -> &'static str;

    /// Search the web, returning at most `limit` results in ranking order
    async fn search(&self, query: &str, limit: usize) -> VerifierResult<Vec<SearchResult>>;
}

/// Retrieves readable article text for a URL
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_text(&self, url: &str) -> VerifierResult<String>;
}

/// Produces a short summary of article text
#[async_trait]
pub trait Summarizer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn summarize(&self, text: &str) -> VerifierResult<String>;
}
