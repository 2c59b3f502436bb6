//! Search and article clients for headline verification
//!
//! This crate provides implementations of the verifier collaborator traits:
//! - SerpAPI: Google organic web results (default search provider)
//! - Exa.ai: AI-powered news search (alternative search provider)
//! - HTML fetcher: direct page download with paragraph extraction
//! - Firecrawl: hosted scraping for full article content

pub mod article;
pub mod error;
pub mod exa;
pub mod firecrawl;
pub mod serpapi;
pub mod types;

pub use article::{extract_article_text, HtmlArticleFetcher};
pub use error::NewsError;
pub use exa::ExaClient;
pub use firecrawl::FirecrawlClient;
pub use serpapi::SerpApiClient;
