//! Plain HTTP article fetcher
//!
//! Downloads a page and keeps the text of its leading paragraphs, which for
//! most news sites is the lede of the article.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

use verifier_core::{ArticleFetcher, VerifierResult};

use crate::error::NewsError;

/// Number of `<p>` elements kept from a page
const MAX_PARAGRAPHS: usize = 5;

/// Upper bound on extracted text
const MAX_TEXT_CHARS: usize = 8000;

/// Fetches article pages directly and extracts paragraph text
#[derive(Debug, Clone)]
pub struct HtmlArticleFetcher {
    client: Client,
}

impl HtmlArticleFetcher {
    /// Create a new fetcher with a per-request timeout
    pub fn new(timeout: Duration) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .map_err(|e| NewsError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch a page and extract its paragraph text
    #[instrument(skip(self))]
    pub async fn fetch_page_text(&self, url: &str) -> Result<String, NewsError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NewsError::ApiError {
                status: response.status().as_u16(),
                message: format!("{} returned HTTP {}", url, response.status()),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        let text = extract_article_text(&html, MAX_PARAGRAPHS);
        debug!("Extracted {} chars from {}", text.len(), url);

        Ok(text)
    }
}

#[async_trait]
impl ArticleFetcher for HtmlArticleFetcher {
    fn name(&self) -> &'static str {
        "html"
    }

    async fn fetch_text(&self, url: &str) -> VerifierResult<String> {
        self.fetch_page_text(url)
            .await
            .map_err(|e| e.into_fetch_error(url))
    }
}

/// Join the text of the first `max_paragraphs` non-empty paragraphs.
///
/// Pages without paragraphs fall back to their main content area.
pub fn extract_article_text(html: &str, max_paragraphs: usize) -> String {
    let document = Html::parse_document(html);

    let mut text = String::new();
    if let Ok(selector) = Selector::parse("p") {
        let paragraphs: Vec<String> = document
            .select(&selector)
            .map(|p| collapse_whitespace(&p.text().collect::<String>()))
            .filter(|p| !p.is_empty())
            .take(max_paragraphs)
            .collect();
        text = paragraphs.join(" ");
    }

    if text.is_empty() {
        text = extract_main_content(&document);
    }

    truncate_chars(&text, MAX_TEXT_CHARS)
}

fn extract_main_content(document: &Html) -> String {
    let main_selectors = ["article", "main", "#content", ".content", "body"];

    for selector_str in main_selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        let content: Vec<String> = document
            .select(&selector)
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .filter(|t| !t.is_empty())
            .collect();
        if !content.is_empty() {
            return content.join(" ");
        }
    }

    String::new()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_leading_paragraphs() {
        let html = r#"
            <html><body>
                <nav>Menu</nav>
                <p>First   paragraph.</p>
                <p>   </p>
                <p>Second <b>bold</b> paragraph.</p>
                <p>Third.</p>
            </body></html>
        "#;

        assert_eq!(
            extract_article_text(html, 2),
            "First paragraph. Second bold paragraph."
        );
    }

    #[test]
    fn test_falls_back_to_article_content() {
        let html = "<html><body><div>nav</div><article>\n  Story   body\n</article></body></html>";
        assert_eq!(extract_article_text(html, 5), "Story body");
    }

    #[test]
    fn test_empty_page_yields_empty_text() {
        assert_eq!(extract_article_text("<html><body></body></html>", 5), "");
    }

    #[test]
    fn test_truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
