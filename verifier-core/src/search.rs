//! Search result data structures shared by every search provider

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{VerifierError, VerifierResult};

/// A single result returned by a search provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result URL
    pub url: String,
    /// Page title
    pub title: String,
    /// Snippet/description from the search engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl SearchResult {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            snippet: None,
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Lowercased hostname of an http(s) URL, without a trailing dot.
    ///
    /// Returns `None` for malformed URLs, other schemes and host-less URLs.
    pub fn hostname(&self) -> Option<String> {
        let parsed = Url::parse(self.url.trim()).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        let host = parsed.host_str()?.trim_end_matches('.').to_lowercase();
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

/// Build the search query for a headline.
///
/// Collapses whitespace and strips wrapping quotes; an empty headline is rejected.
pub fn build_query(headline: &str) -> VerifierResult<String> {
    let collapsed = headline.split_whitespace().collect::<Vec<_>>().join(" ");

    let quotes: &[char] = &['"', '\'', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}'];
    let query = collapsed.trim_matches(quotes).trim().to_string();

    if query.is_empty() {
        return Err(VerifierError::invalid_input("headline must not be empty"));
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_lowercases_and_strips_trailing_dot() {
        let result = SearchResult::new("https://WWW.BBC.com./news/x", "x");
        assert_eq!(result.hostname().as_deref(), Some("www.bbc.com"));
    }

    #[test]
    fn test_hostname_rejects_malformed_and_non_http() {
        assert_eq!(SearchResult::new("not a url", "x").hostname(), None);
        assert_eq!(SearchResult::new("ftp://bbc.com/file", "x").hostname(), None);
        assert_eq!(SearchResult::new("mailto:desk@bbc.com", "x").hostname(), None);
        assert_eq!(SearchResult::new("", "x").hostname(), None);
    }

    #[test]
    fn test_build_query_normalizes_headline() {
        let query = build_query("  \"Moon   landing   confirmed\"  ").unwrap();
        assert_eq!(query, "Moon landing confirmed");
    }

    #[test]
    fn test_build_query_rejects_blank_headline() {
        assert!(matches!(
            build_query("   \"\"  "),
            Err(VerifierError::InvalidInput(_))
        ));
    }
}
