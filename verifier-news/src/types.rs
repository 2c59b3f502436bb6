//! API-specific types for SerpAPI, Exa.ai and Firecrawl

use serde::{Deserialize, Serialize};

// ============================================================================
// SerpAPI Types
// ============================================================================

/// SerpAPI search response (Google engine)
#[derive(Debug, Deserialize)]
pub struct SerpApiResponse {
    /// Organic (non-ad) results in ranking order
    #[serde(default)]
    pub organic_results: Vec<SerpOrganicResult>,
    /// Error message reported by SerpAPI
    pub error: Option<String>,
}

/// A single organic result
#[derive(Debug, Deserialize)]
pub struct SerpOrganicResult {
    /// Rank on the results page
    pub position: Option<u32>,
    /// Result title
    pub title: Option<String>,
    /// Result URL
    pub link: Option<String>,
    /// Result snippet
    pub snippet: Option<String>,
}

// ============================================================================
// Exa.ai Types
// ============================================================================

/// Exa.ai search request
#[derive(Debug, Serialize)]
pub struct ExaSearchRequest {
    /// Search query
    pub query: String,
    /// Number of results to return
    #[serde(rename = "numResults")]
    pub num_results: usize,
    /// Search type: "auto", "neural" or "keyword"
    #[serde(rename = "type")]
    pub search_type: String,
    /// Category filter (e.g., "news")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Start date filter (ISO 8601)
    #[serde(rename = "startPublishedDate", skip_serializing_if = "Option::is_none")]
    pub start_published_date: Option<String>,
    /// Content options
    pub contents: ExaContentsOptions,
}

/// Options for content extraction
#[derive(Debug, Serialize)]
pub struct ExaContentsOptions {
    /// Text extraction options
    pub text: ExaTextOptions,
    /// Highlight extraction options
    pub highlights: ExaHighlightsOptions,
}

/// Text extraction options
#[derive(Debug, Serialize)]
pub struct ExaTextOptions {
    /// Maximum characters to extract
    #[serde(rename = "maxCharacters")]
    pub max_characters: usize,
    /// Include HTML tags
    #[serde(rename = "includeHtmlTags")]
    pub include_html_tags: bool,
}

/// Highlight extraction options
#[derive(Debug, Serialize)]
pub struct ExaHighlightsOptions {
    #[serde(rename = "numSentences")]
    pub num_sentences: usize,
    #[serde(rename = "highlightsPerUrl")]
    pub highlights_per_url: usize,
}

/// Exa.ai search response
#[derive(Debug, Deserialize)]
pub struct ExaSearchResponse {
    pub results: Vec<ExaResult>,
    /// Request ID for debugging
    #[serde(rename = "requestId")]
    pub request_id: Option<String>,
}

/// A single Exa.ai search result
#[derive(Debug, Deserialize)]
pub struct ExaResult {
    pub url: String,
    pub title: Option<String>,
    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,
    pub text: Option<String>,
    pub highlights: Option<Vec<String>>,
}

// ============================================================================
// Firecrawl Types
// ============================================================================

/// Firecrawl scrape request
#[derive(Debug, Serialize)]
pub struct FirecrawlScrapeRequest {
    /// URL to scrape
    pub url: String,
    /// Output formats to return
    pub formats: Vec<String>,
    /// Only extract main content
    #[serde(rename = "onlyMainContent")]
    pub only_main_content: bool,
}

/// Firecrawl scrape response
#[derive(Debug, Deserialize)]
pub struct FirecrawlScrapeResponse {
    pub success: bool,
    pub data: Option<FirecrawlScrapeData>,
    /// Error message if failed
    pub error: Option<String>,
}

/// Scraped data from Firecrawl
#[derive(Debug, Deserialize)]
pub struct FirecrawlScrapeData {
    /// Markdown content
    pub markdown: Option<String>,
}
