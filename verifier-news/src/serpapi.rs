//! SerpAPI client for Google web search

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};

use verifier_core::{NewsSearcher, SearchResult, VerifierResult};

use crate::error::NewsError;
use crate::types::SerpApiResponse;

const SERPAPI_BASE_URL: &str = "https://serpapi.com";

/// SerpAPI client (Google engine)
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    /// Create a new SerpAPI client
    pub fn new(api_key: String) -> Result<Self, NewsError> {
        if api_key.trim().is_empty() {
            return Err(NewsError::InvalidConfig("SERPAPI_KEY is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| NewsError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: SERPAPI_BASE_URL.to_string(),
        })
    }

    /// Run a Google search and return organic results
    #[instrument(skip(self))]
    pub async fn search_google(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, NewsError> {
        let num = limit.to_string();

        info!("Searching SerpAPI: query='{}', num={}", query, limit);

        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::from_status(status, body));
        }

        let serp_response: SerpApiResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        let results = convert_organic_results(serp_response, limit)?;
        debug!("SerpAPI returned {} usable results", results.len());

        Ok(results)
    }
}

#[async_trait]
impl NewsSearcher for SerpApiClient {
    fn name(&self) -> &'static str {
        "serpapi"
    }

    async fn search(&self, query: &str, limit: usize) -> VerifierResult<Vec<SearchResult>> {
        self.search_google(query, limit)
            .await
            .map_err(|e| e.into_search_error(self.name()))
    }
}

/// Keep organic results that carry an http(s) link, in ranking order
fn convert_organic_results(
    response: SerpApiResponse,
    limit: usize,
) -> Result<Vec<SearchResult>, NewsError> {
    if let Some(error) = response.error {
        // SerpAPI reports an empty result page as an error
        if error.contains("hasn't returned any results") {
            return Ok(Vec::new());
        }
        return Err(NewsError::ApiError {
            status: 200,
            message: error,
        });
    }

    let results = response
        .organic_results
        .into_iter()
        .filter_map(|organic| {
            let link = organic.link?;
            if !link.starts_with("http") {
                return None;
            }
            let title = organic.title.unwrap_or_else(|| link.clone());
            let result = SearchResult::new(link, title);
            Some(match organic.snippet {
                Some(snippet) => result.with_snippet(snippet),
                None => result,
            })
        })
        .take(limit)
        .collect();

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SerpApiResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_convert_skips_results_without_http_link() {
        let response = parse(
            r#"{
                "organic_results": [
                    {"position": 1, "title": "BBC", "link": "https://www.bbc.com/news/x", "snippet": "s1"},
                    {"position": 2, "title": "No link"},
                    {"position": 3, "title": "Relative", "link": "/local/path"},
                    {"position": 4, "link": "http://random.blog/y"}
                ]
            }"#,
        );

        let results = convert_organic_results(response, 10).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://www.bbc.com/news/x");
        assert_eq!(results[0].snippet.as_deref(), Some("s1"));
        assert_eq!(results[1].title, "http://random.blog/y");
    }

    #[test]
    fn test_convert_respects_limit() {
        let response = parse(
            r#"{"organic_results": [
                {"title": "a", "link": "https://a.com"},
                {"title": "b", "link": "https://b.com"},
                {"title": "c", "link": "https://c.com"}
            ]}"#,
        );

        let results = convert_organic_results(response, 2).unwrap();
        let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_convert_handles_error_payloads() {
        let empty = parse(r#"{"error": "Google hasn't returned any results for this query."}"#);
        assert!(convert_organic_results(empty, 5).unwrap().is_empty());

        let invalid = parse(r#"{"error": "Invalid API key."}"#);
        assert!(matches!(
            convert_organic_results(invalid, 5),
            Err(NewsError::ApiError { .. })
        ));
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        assert!(matches!(
            SerpApiClient::new("  ".to_string()),
            Err(NewsError::InvalidConfig(_))
        ));
    }
}
