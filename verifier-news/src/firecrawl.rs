//! Firecrawl API client for article scraping

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use verifier_core::{ArticleFetcher, VerifierResult};

use crate::error::NewsError;
use crate::types::{FirecrawlScrapeRequest, FirecrawlScrapeResponse};

/// Firecrawl API client
pub struct FirecrawlClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FirecrawlClient {
    /// Create a new Firecrawl client
    pub fn new(api_key: String) -> Result<Self, NewsError> {
        if api_key.trim().is_empty() {
            return Err(NewsError::InvalidConfig(
                "FIRECRAWL_API_KEY is empty".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.firecrawl.dev".to_string(),
        })
    }

    /// Scrape an article URL and return its main content as markdown
    #[instrument(skip(self))]
    pub async fn scrape_article(&self, url: &str) -> Result<String, NewsError> {
        let request = FirecrawlScrapeRequest {
            url: url.to_string(),
            formats: vec!["markdown".to_string()],
            only_main_content: true,
        };

        debug!("Scraping article: {}", url);

        let response = self
            .client
            .post(format!("{}/v1/scrape", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
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

        let firecrawl_response: FirecrawlScrapeResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        let markdown = markdown_from_response(firecrawl_response)?;
        debug!("Successfully scraped {} chars", markdown.len());

        Ok(markdown)
    }
}

#[async_trait]
impl ArticleFetcher for FirecrawlClient {
    fn name(&self) -> &'static str {
        "firecrawl"
    }

    async fn fetch_text(&self, url: &str) -> VerifierResult<String> {
        self.scrape_article(url)
            .await
            .map_err(|e| e.into_fetch_error(url))
    }
}

fn markdown_from_response(response: FirecrawlScrapeResponse) -> Result<String, NewsError> {
    if !response.success {
        return Err(NewsError::ScrapeFailed(
            response
                .error
                .unwrap_or_else(|| "Unknown scrape error".to_string()),
        ));
    }

    response
        .data
        .ok_or_else(|| NewsError::ScrapeFailed("No data in response".to_string()))?
        .markdown
        .ok_or_else(|| NewsError::ScrapeFailed("No markdown content".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> FirecrawlScrapeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_markdown_from_successful_scrape() {
        let response = parse(r##"{"success": true, "data": {"markdown": "# Title\nBody"}}"##);
        assert_eq!(markdown_from_response(response).unwrap(), "# Title\nBody");
    }

    #[test]
    fn test_failed_scrape_reports_error() {
        let response = parse(r#"{"success": false, "error": "blocked"}"#);
        match markdown_from_response(response) {
            Err(NewsError::ScrapeFailed(msg)) => assert_eq!(msg, "blocked"),
            other => panic!("unexpected: {:?}", other),
        }

        let response = parse(r#"{"success": true, "data": {}}"#);
        assert!(matches!(
            markdown_from_response(response),
            Err(NewsError::ScrapeFailed(_))
        ));
    }
}
