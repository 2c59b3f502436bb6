//! Exa.ai API client for news search

use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;
use tracing::{info, instrument};

use verifier_core::{NewsSearcher, SearchResult, VerifierResult};

use crate::error::NewsError;
use crate::types::{
    ExaContentsOptions, ExaHighlightsOptions, ExaResult, ExaSearchRequest, ExaSearchResponse,
    ExaTextOptions,
};

/// Exa.ai API client
pub struct ExaClient {
    client: Client,
    api_key: String,
    base_url: String,
    /// Only return articles published within this many days
    days_back: Option<i64>,
}

impl ExaClient {
    /// Create a new Exa.ai client
    pub fn new(api_key: String) -> Result<Self, NewsError> {
        if api_key.trim().is_empty() {
            return Err(NewsError::InvalidConfig("EXA_API_KEY is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(StdDuration::from_secs(30))
            .build()
            .map_err(|e| NewsError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: "https://api.exa.ai".to_string(),
            days_back: None,
        })
    }

    /// Restrict results to recently published articles
    pub fn with_days_back(mut self, days: i64) -> Self {
        self.days_back = Some(days);
        self
    }

    /// Search for news articles
    #[instrument(skip(self))]
    pub async fn search_news(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, NewsError> {
        let start_date = self
            .days_back
            .map(|days| (Utc::now() - Duration::days(days)).to_rfc3339());

        // No domain whitelist here: the classifier needs untrusted hosts too
        let request = ExaSearchRequest {
            query: query.to_string(),
            num_results: limit,
            search_type: "auto".to_string(),
            category: Some("news".to_string()),
            start_published_date: start_date,
            contents: ExaContentsOptions {
                text: ExaTextOptions {
                    max_characters: 1000,
                    include_html_tags: false,
                },
                highlights: ExaHighlightsOptions {
                    num_sentences: 3,
                    highlights_per_url: 1,
                },
            },
        };

        info!(
            "Searching Exa.ai: query='{}', start_date={:?}, num_results={}",
            request.query.chars().take(80).collect::<String>(),
            request.start_published_date,
            request.num_results
        );

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::from_status(status, body));
        }

        let exa_response: ExaSearchResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        info!(
            "Received {} results from Exa.ai (request_id={:?})",
            exa_response.results.len(),
            exa_response.request_id
        );

        Ok(exa_response
            .results
            .into_iter()
            .take(limit)
            .map(convert_result)
            .collect())
    }
}

#[async_trait]
impl NewsSearcher for ExaClient {
    fn name(&self) -> &'static str {
        "exa"
    }

    async fn search(&self, query: &str, limit: usize) -> VerifierResult<Vec<SearchResult>> {
        self.search_news(query, limit)
            .await
            .map_err(|e| e.into_search_error(self.name()))
    }
}

/// Convert an Exa result, preferring the highlight over raw text for the snippet
fn convert_result(result: ExaResult) -> SearchResult {
    let snippet = result
        .highlights
        .as_ref()
        .and_then(|h| h.first().cloned())
        .or_else(|| {
            result.text.as_ref().map(|t| {
                let chars: String = t.chars().take(300).collect();
                if t.chars().count() > 300 {
                    format!("{}...", chars)
                } else {
                    chars
                }
            })
        });

    let title = result.title.unwrap_or_else(|| result.url.clone());
    let converted = SearchResult::new(result.url, title);
    match snippet {
        Some(snippet) => converted.with_snippet(snippet),
        None => converted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_prefers_highlight() {
        let response: ExaSearchResponse = serde_json::from_str(
            r#"{
                "requestId": "abc",
                "results": [
                    {"url": "https://apnews.com/a", "title": "AP", "text": "full text", "highlights": ["key sentence"]},
                    {"url": "https://x.org/b", "title": null, "text": "only text"}
                ]
            }"#,
        )
        .unwrap();

        let results: Vec<SearchResult> = response.results.into_iter().map(convert_result).collect();

        assert_eq!(results[0].snippet.as_deref(), Some("key sentence"));
        assert_eq!(results[1].title, "https://x.org/b");
        assert_eq!(results[1].snippet.as_deref(), Some("only text"));
    }

    #[test]
    fn test_convert_truncates_long_text() {
        let result = ExaResult {
            url: "https://x.org".to_string(),
            title: Some("t".to_string()),
            published_date: None,
            text: Some("a".repeat(400)),
            highlights: None,
        };

        let snippet = convert_result(result).snippet.unwrap();
        assert_eq!(snippet.len(), 303);
        assert!(snippet.ends_with("..."));
    }
}
