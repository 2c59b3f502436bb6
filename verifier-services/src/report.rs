//! Output of one headline verification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use verifier_core::{ClassificationVerdict, SearchResult};

/// A matched result from a trusted outlet, as listed in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustedSource {
    /// 1-based position among the trusted matches
    pub rank: usize,
    pub url: String,
    pub title: String,
    /// Leading article text, or the search snippet when the page could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

impl TrustedSource {
    pub(crate) fn from_match(
        rank: usize,
        result: &SearchResult,
        fetched_text: Option<&str>,
        excerpt_chars: usize,
    ) -> Self {
        let source_text = fetched_text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .or_else(|| result.snippet.as_deref().map(str::trim))
            .filter(|t| !t.is_empty());

        Self {
            rank,
            url: result.url.clone(),
            title: result.title.clone(),
            excerpt: source_text.map(|t| excerpt(t, excerpt_chars)),
        }
    }
}

/// What happened when summarizing the first trusted match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// Model output, verbatim
    Summarized { source_url: String, text: String },
    /// Nothing matched a trusted domain
    NoTrustedSource,
    /// The article text was too short to summarize
    InsufficientText { source_url: String },
    /// No summarizer is configured
    Disabled,
    /// The summarizer failed or timed out
    Unavailable { reason: String },
}

impl SummaryOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            SummaryOutcome::Summarized { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Human-readable line for the report
    pub fn message(&self) -> String {
        match self {
            SummaryOutcome::Summarized { text, .. } => text.clone(),
            SummaryOutcome::NoTrustedSource => "No trusted article found to summarize.".to_string(),
            SummaryOutcome::InsufficientText { .. } => {
                "Not enough data to generate a reliable summary.".to_string()
            }
            SummaryOutcome::Disabled => "Summarization is not configured.".to_string(),
            SummaryOutcome::Unavailable { reason } => format!("Summary unavailable: {}", reason),
        }
    }
}

/// Full result of verifying one headline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub headline: String,
    /// Query sent to the search provider
    pub query: String,
    pub search_provider: String,
    pub verdict: ClassificationVerdict,
    pub trusted_sources: Vec<TrustedSource>,
    pub summary: SummaryOutcome,
    /// Set when the search failed and the verdict was computed from no results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_error: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl VerificationReport {
    /// Whether the search produced nothing to judge
    pub fn has_no_results(&self) -> bool {
        self.verdict.total_results == 0
    }
}

/// First `max_chars` characters of `text`, with "..." when cut
pub(crate) fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_marks_truncation() {
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("abc", 3), "abc");
    }

    #[test]
    fn test_trusted_source_prefers_fetched_text() {
        let result = SearchResult::new("https://bbc.com/a", "A").with_snippet("snippet");

        let fetched = TrustedSource::from_match(1, &result, Some("article body"), 300);
        assert_eq!(fetched.excerpt.as_deref(), Some("article body"));

        let fallback = TrustedSource::from_match(2, &result, Some("   "), 300);
        assert_eq!(fallback.excerpt.as_deref(), Some("snippet"));
        assert_eq!(fallback.rank, 2);

        let bare = TrustedSource::from_match(3, &SearchResult::new("https://bbc.com/b", "B"), None, 300);
        assert_eq!(bare.excerpt, None);
    }

    #[test]
    fn test_summary_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(SummaryOutcome::InsufficientText {
            source_url: "https://bbc.com/a".to_string(),
        })
        .unwrap();

        assert_eq!(json["status"], "insufficient_text");
        assert_eq!(json["source_url"], "https://bbc.com/a");
        assert_eq!(
            serde_json::to_value(SummaryOutcome::NoTrustedSource).unwrap()["status"],
            "no_trusted_source"
        );
    }
}
