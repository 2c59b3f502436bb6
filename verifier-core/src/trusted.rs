//! Allow-list of trusted news domains

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{VerifierError, VerifierResult};
use crate::search::SearchResult;

/// Outlets trusted when no override is configured
pub const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    "bbc.com",
    "reuters.com",
    "ndtv.com",
    "cnn.com",
    "indiatoday.in",
    "thehindu.com",
    "timesofindia.indiatimes.com",
    "hindustantimes.com",
    "aljazeera.com",
    "apnews.com",
    "foxnews.com",
    "washingtonpost.com",
    "nytimes.com",
    "economictimes.indiatimes.com",
    "scroll.in",
    "bbc.co.uk",
    "cbc.ca",
    "theguardian.com",
    "cnbc.com",
    "dw.com",
    "npr.org",
    "bbcnews.com",
    "news18.com",
    "thewire.in",
    "indianexpress.com",
];

/// Immutable set of trusted hostnames.
///
/// A hostname is trusted when it equals an entry or is a subdomain of one,
/// so `www.bbc.com` matches `bbc.com` while `notbbc.com` does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedDomainSet {
    domains: BTreeSet<String>,
}

impl TrustedDomainSet {
    /// Build the set from raw entries. Fails when no usable entry remains.
    pub fn new<I, S>(entries: I) -> VerifierResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains: BTreeSet<String> = entries
            .into_iter()
            .filter_map(|entry| normalize_domain(entry.as_ref()))
            .collect();

        if domains.is_empty() {
            return Err(VerifierError::config(
                "trusted domain set must contain at least one domain",
            ));
        }

        Ok(Self { domains })
    }

    /// The built-in outlet list
    pub fn default_outlets() -> Self {
        Self {
            domains: DEFAULT_TRUSTED_DOMAINS
                .iter()
                .filter_map(|d| normalize_domain(d))
                .collect(),
        }
    }

    /// Parse a comma-separated list, e.g. from an environment variable
    pub fn from_csv(csv: &str) -> VerifierResult<Self> {
        Self::new(csv.split(','))
    }

    /// Exact-or-subdomain membership test for a hostname
    pub fn contains_host(&self, host: &str) -> bool {
        let host = host.trim().trim_end_matches('.').to_lowercase();
        if host.is_empty() {
            return false;
        }

        let mut candidate = host.as_str();
        loop {
            if self.domains.contains(candidate) {
                return true;
            }
            match candidate.split_once('.') {
                Some((_, parent)) if !parent.is_empty() => candidate = parent,
                _ => return false,
            }
        }
    }

    /// Whether a search result's URL points at a trusted host
    pub fn is_trusted(&self, result: &SearchResult) -> bool {
        result
            .hostname()
            .is_some_and(|host| self.contains_host(&host))
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }
}

/// Reduce an entry to a bare hostname. Entries pasted as URLs
/// (`https://www.bbc.com/news`, `bbc.com:443`) keep only their host.
fn normalize_domain(raw: &str) -> Option<String> {
    let lower = raw.trim().to_lowercase();
    let without_scheme = lower
        .split_once("://")
        .map_or(lower.as_str(), |(_, rest)| rest);
    let authority = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    let host = host.split_once(':').map_or(host, |(name, _)| name);

    let stripped = host
        .strip_prefix("*.")
        .or_else(|| host.strip_prefix("www."))
        .unwrap_or(host)
        .trim_end_matches('.');

    if stripped.is_empty() || stripped.contains(char::is_whitespace) {
        None
    } else {
        Some(stripped.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_subdomain_match() {
        let set = TrustedDomainSet::new(["bbc.com"]).unwrap();
        assert!(set.contains_host("bbc.com"));
        assert!(set.contains_host("www.bbc.com"));
        assert!(set.contains_host("news.live.bbc.com"));
        assert!(set.contains_host("BBC.COM."));
    }

    #[test]
    fn test_lookalike_hosts_do_not_match() {
        let set = TrustedDomainSet::new(["bbc.com"]).unwrap();
        assert!(!set.contains_host("notbbc.com"));
        assert!(!set.contains_host("bbc.com.evil.io"));
        assert!(!set.contains_host("com"));
        assert!(!set.contains_host(""));
    }

    #[test]
    fn test_entries_are_normalized() {
        let set = TrustedDomainSet::new([" WWW.Reuters.com ", "*.apnews.com", "npr.org.", "", "  "])
            .unwrap();
        let domains: Vec<&str> = set.iter().collect();
        assert_eq!(domains, vec!["apnews.com", "npr.org", "reuters.com"]);
    }

    #[test]
    fn test_url_shaped_entries_keep_their_host() {
        let set = TrustedDomainSet::from_csv(
            "https://www.bbc.com/news, bbc.co.uk/news?x=1, http://apnews.com:443/, reuters.com#top",
        )
        .unwrap();
        let domains: Vec<&str> = set.iter().collect();
        assert_eq!(domains, vec!["apnews.com", "bbc.co.uk", "bbc.com", "reuters.com"]);
        assert!(set.is_trusted(&SearchResult::new("https://www.bbc.com/news/x", "x")));
    }

    #[test]
    fn test_empty_set_is_config_error() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            TrustedDomainSet::new(empty),
            Err(VerifierError::Config(_))
        ));
        assert!(matches!(
            TrustedDomainSet::from_csv(" , ,"),
            Err(VerifierError::Config(_))
        ));
        assert!(matches!(
            TrustedDomainSet::from_csv("https://, /news"),
            Err(VerifierError::Config(_))
        ));
    }

    #[test]
    fn test_default_outlets() {
        let set = TrustedDomainSet::default_outlets();
        assert_eq!(set.len(), DEFAULT_TRUSTED_DOMAINS.len());
        assert!(set.contains_host("timesofindia.indiatimes.com"));
        assert!(!set.contains_host("indiatimes.com"));
    }

    #[test]
    fn test_is_trusted_uses_url_host() {
        let set = TrustedDomainSet::from_csv("reuters.com,bbc.co.uk").unwrap();
        assert!(set.is_trusted(&SearchResult::new("https://www.reuters.com/world/a", "a")));
        assert!(set.is_trusted(&SearchResult::new("http://bbc.co.uk/news", "b")));
        assert!(!set.is_trusted(&SearchResult::new("https://example.com/?ref=reuters.com", "c")));
        assert!(!set.is_trusted(&SearchResult::new("reuters.com/world", "d")));
    }
}
