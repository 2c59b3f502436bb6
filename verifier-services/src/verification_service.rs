//! Verification Service
//!
//! Runs one headline through search, trust classification, article fetching
//! and summarization. Only classification is decided here; every external
//! call degrades to an empty value when it fails.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use verifier_core::{
    build_query, ArticleFetcher, NewsSearcher, SearchResult, Summarizer, TrustClassifier,
    VerifierError, VerifierResult,
};
use verifier_summarizer::prepare_summary_input;

use crate::rate_limiter::{RateLimiter, DEFAULT_FETCH_INTERVAL_MS};
use crate::report::{SummaryOutcome, TrustedSource, VerificationReport};

/// Configuration for VerificationService
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Search results requested per headline
    pub max_results: usize,
    /// Trusted matches whose article text is fetched for excerpts
    pub max_article_fetches: usize,
    pub search_timeout: Duration,
    pub fetch_timeout: Duration,
    pub summarize_timeout: Duration,
    /// Minimum spacing between article fetches
    pub fetch_interval: Duration,
    /// Characters kept in each trusted-source excerpt
    pub excerpt_chars: usize,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            max_article_fetches: 3,
            search_timeout: Duration::from_secs(15),
            fetch_timeout: Duration::from_secs(10),
            summarize_timeout: Duration::from_secs(30),
            fetch_interval: Duration::from_millis(DEFAULT_FETCH_INTERVAL_MS),
            excerpt_chars: 300,
        }
    }
}

/// Orchestrates the verification of headlines
pub struct VerificationService {
    classifier: TrustClassifier,
    searcher: Arc<dyn NewsSearcher>,
    fetcher: Arc<dyn ArticleFetcher>,
    summarizer: Option<Arc<dyn Summarizer>>,
    fetch_limiter: RateLimiter,
    config: VerificationConfig,
}

impl VerificationService {
    pub fn new(
        classifier: TrustClassifier,
        searcher: Arc<dyn NewsSearcher>,
        fetcher: Arc<dyn ArticleFetcher>,
        summarizer: Option<Arc<dyn Summarizer>>,
        config: VerificationConfig,
    ) -> Self {
        info!(
            "Initializing VerificationService (search: {}, fetch: {}, summarizer: {}, trusted domains: {})",
            searcher.name(),
            fetcher.name(),
            summarizer.as_ref().map(|s| s.name()).unwrap_or("disabled"),
            classifier.trusted_domains().len()
        );

        Self {
            classifier,
            searcher,
            fetcher,
            summarizer,
            fetch_limiter: RateLimiter::new(config.fetch_interval, "article-fetch"),
            config,
        }
    }

    pub fn classifier(&self) -> &TrustClassifier {
        &self.classifier
    }

    pub fn search_provider(&self) -> &'static str {
        self.searcher.name()
    }

    pub fn summarizer_enabled(&self) -> bool {
        self.summarizer.is_some()
    }

    /// Verify a headline end to end.
    ///
    /// Fails when the headline is blank or the search provider is
    /// misconfigured. Any other search failure yields a FAKE verdict over
    /// zero results with the error recorded in the report.
    #[instrument(skip(self))]
    pub async fn verify(&self, headline: &str) -> VerifierResult<VerificationReport> {
        let query = build_query(headline)?;

        let (results, search_error) = match self.search(&query).await {
            Ok(results) => (results, None),
            Err(e) if !e.is_degradable() => return Err(e),
            Err(e) => {
                warn!("Search failed, classifying zero results: {}", e);
                (Vec::new(), Some(e.to_string()))
            }
        };

        let verdict = self.classifier.classify(headline, &results);
        info!(
            "Verdict {} ({:.1}%): {}/{} results from trusted domains",
            verdict.label,
            verdict.confidence,
            verdict.match_count(),
            verdict.total_results
        );

        let texts = self.fetch_articles(&verdict.matched_results).await;

        let trusted_sources = verdict
            .matched_results
            .iter()
            .enumerate()
            .map(|(i, result)| {
                TrustedSource::from_match(
                    i + 1,
                    result,
                    texts.get(i).map(String::as_str),
                    self.config.excerpt_chars,
                )
            })
            .collect();

        let summary = match verdict.matched_results.first() {
            None => SummaryOutcome::NoTrustedSource,
            Some(_) if self.summarizer.is_none() => SummaryOutcome::Disabled,
            Some(first) => {
                let text = match texts.first() {
                    Some(text) => text.clone(),
                    None => self.fetch_text(&first.url).await,
                };
                self.summarize_text(first, text).await
            }
        };

        Ok(VerificationReport {
            headline: headline.to_string(),
            query,
            search_provider: self.searcher.name().to_string(),
            verdict,
            trusted_sources,
            summary,
            search_error,
            checked_at: Utc::now(),
        })
    }

    /// Summarize the first trusted match.
    ///
    /// Fetches its article text (the search snippet stands in when the fetch
    /// yields nothing) and forwards the cleaned text to the summarizer.
    #[instrument(skip(self, matched), fields(matched = matched.len()))]
    pub async fn summarize(&self, matched: &[SearchResult]) -> SummaryOutcome {
        let Some(first) = matched.first() else {
            return SummaryOutcome::NoTrustedSource;
        };
        if self.summarizer.is_none() {
            return SummaryOutcome::Disabled;
        }

        let text = self.fetch_text(&first.url).await;
        self.summarize_text(first, text).await
    }

    /// Query the search provider within the configured timeout
    async fn search(&self, query: &str) -> VerifierResult<Vec<SearchResult>> {
        let limit = self.config.max_results;
        let mut results = timeout(self.config.search_timeout, self.searcher.search(query, limit))
            .await
            .map_err(|_| VerifierError::timeout("search", self.config.search_timeout.as_secs()))??;

        results.truncate(limit);
        Ok(results)
    }

    /// Fetch article text for the leading trusted matches, one at a time
    async fn fetch_articles(&self, matched: &[SearchResult]) -> Vec<String> {
        let mut texts = Vec::new();
        for result in matched.iter().take(self.config.max_article_fetches) {
            texts.push(self.fetch_text(&result.url).await);
        }
        texts
    }

    /// Fetch article text; any failure yields an empty string
    async fn fetch_text(&self, url: &str) -> String {
        self.fetch_limiter.acquire().await;

        match timeout(self.config.fetch_timeout, self.fetcher.fetch_text(url)).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Article fetch failed for {}: {}", url, e);
                String::new()
            }
            Err(_) => {
                warn!(
                    "Article fetch for {} timed out after {:?}",
                    url, self.config.fetch_timeout
                );
                String::new()
            }
        }
    }

    async fn summarize_text(&self, source: &SearchResult, text: String) -> SummaryOutcome {
        let Some(summarizer) = &self.summarizer else {
            return SummaryOutcome::Disabled;
        };

        let text = if text.trim().is_empty() {
            source.snippet.clone().unwrap_or_default()
        } else {
            text
        };

        let Some(input) = prepare_summary_input(&text) else {
            return SummaryOutcome::InsufficientText {
                source_url: source.url.clone(),
            };
        };

        match timeout(self.config.summarize_timeout, summarizer.summarize(&input)).await {
            Ok(Ok(summary)) => SummaryOutcome::Summarized {
                source_url: source.url.clone(),
                text: summary,
            },
            Ok(Err(e)) => {
                warn!("Summarization failed: {}", e);
                SummaryOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
            Err(_) => {
                let err = VerifierError::timeout(
                    "summarization",
                    self.config.summarize_timeout.as_secs(),
                );
                warn!("{}", err);
                SummaryOutcome::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }
}
