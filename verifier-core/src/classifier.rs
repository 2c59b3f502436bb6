//! Trust classification of search results
//!
//! A headline is labelled REAL when at least one search result comes from a
//! trusted outlet. The confidence number is a fixed policy over the match
//! count; it is a heuristic, not a probability.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{VerifierError, VerifierResult};
use crate::search::SearchResult;
use crate::trusted::TrustedDomainSet;
use crate::verdict::{ClassificationVerdict, Label};

/// Maps a trusted-match count to a confidence percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidencePolicy {
    /// Confidence reported when nothing matched
    pub no_match_confidence: f64,
    /// Confidence for a single trusted match
    pub first_match_confidence: f64,
    /// Added for every trusted match after the first
    pub per_extra_match: f64,
    /// Upper bound for the confidence
    pub max_confidence: f64,
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            no_match_confidence: 0.0,
            first_match_confidence: 50.0,
            per_extra_match: 10.0,
            max_confidence: 100.0,
        }
    }
}

impl ConfidencePolicy {
    /// Build a policy, rejecting values that would break the [0, 100] range
    /// or let fewer matches outscore more.
    pub fn new(
        no_match_confidence: f64,
        first_match_confidence: f64,
        per_extra_match: f64,
        max_confidence: f64,
    ) -> VerifierResult<Self> {
        let policy = Self {
            no_match_confidence,
            first_match_confidence,
            per_extra_match,
            max_confidence,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Check that every value is finite and within [0, 100], the increment is
    /// not negative, and `no_match <= first_match <= max`.
    pub fn validate(&self) -> VerifierResult<()> {
        let values = [
            ("no_match_confidence", self.no_match_confidence),
            ("first_match_confidence", self.first_match_confidence),
            ("per_extra_match", self.per_extra_match),
            ("max_confidence", self.max_confidence),
        ];
        for (name, value) in values {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(VerifierError::config(format!(
                    "confidence policy {} must be within [0, 100], got {}",
                    name, value
                )));
            }
        }

        if self.no_match_confidence > self.first_match_confidence
            || self.first_match_confidence > self.max_confidence
        {
            return Err(VerifierError::config(
                "confidence policy must satisfy no_match <= first_match <= max",
            ));
        }

        Ok(())
    }

    /// Confidence for `matches` trusted results.
    ///
    /// Always within [0, 100] and non-decreasing in `matches`, even for a
    /// policy that never went through [`ConfidencePolicy::validate`].
    pub fn confidence(&self, matches: usize) -> f64 {
        let floor = finite_or_zero(self.no_match_confidence).clamp(0.0, 100.0);
        if matches == 0 {
            return floor;
        }

        let extra = (matches - 1) as f64 * finite_or_zero(self.per_extra_match).max(0.0);
        let raw = (finite_or_zero(self.first_match_confidence) + extra)
            .min(finite_or_zero(self.max_confidence));
        raw.clamp(0.0, 100.0).max(floor)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Labels headlines from the hosts of their search results
#[derive(Debug, Clone)]
pub struct TrustClassifier {
    trusted: TrustedDomainSet,
    policy: ConfidencePolicy,
}

impl TrustClassifier {
    pub fn new(trusted: TrustedDomainSet) -> Self {
        Self {
            trusted,
            policy: ConfidencePolicy::default(),
        }
    }

    /// Replace the default confidence policy. Fails for an invalid policy.
    pub fn with_policy(mut self, policy: ConfidencePolicy) -> VerifierResult<Self> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    pub fn trusted_domains(&self) -> &TrustedDomainSet {
        &self.trusted
    }

    /// Classify search results for a headline.
    ///
    /// The headline is only recorded in the span. Results with malformed or
    /// non-http URLs never match.
    #[instrument(skip(self, results), fields(results = results.len()))]
    pub fn classify(&self, headline: &str, results: &[SearchResult]) -> ClassificationVerdict {
        let matched_results: Vec<SearchResult> = results
            .iter()
            .filter(|result| {
                let trusted = self.trusted.is_trusted(result);
                debug!(url = %result.url, trusted, "Checked result host");
                trusted
            })
            .cloned()
            .collect();

        let label = if matched_results.is_empty() {
            Label::Fake
        } else {
            Label::Real
        };

        let total_results = results.len();
        let trusted_share = if total_results == 0 {
            0.0
        } else {
            let share = matched_results.len() as f64 / total_results as f64 * 100.0;
            (share * 100.0).round() / 100.0
        };

        ClassificationVerdict {
            label,
            confidence: self.policy.confidence(matched_results.len()),
            matched_results,
            total_results,
            trusted_share,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> TrustClassifier {
        TrustClassifier::new(TrustedDomainSet::new(["bbc.com"]).unwrap())
    }

    fn result(url: &str) -> SearchResult {
        SearchResult::new(url, url)
    }

    #[test]
    fn test_trusted_match_is_real() {
        let results = vec![
            result("https://www.bbc.com/news/x"),
            result("https://random.blog/y"),
        ];

        let verdict = classifier().classify("headline", &results);

        assert_eq!(verdict.label, Label::Real);
        assert_eq!(verdict.matched_results, vec![results[0].clone()]);
        assert_eq!(verdict.confidence, 50.0);
        assert_eq!(verdict.total_results, 2);
        assert_eq!(verdict.trusted_share, 50.0);
    }

    #[test]
    fn test_no_trusted_match_is_fake() {
        let verdict = classifier().classify("headline", &[result("https://random.blog/y")]);

        assert_eq!(verdict.label, Label::Fake);
        assert!(verdict.matched_results.is_empty());
        assert_eq!(verdict.confidence, 0.0);
    }

    #[test]
    fn test_empty_results_use_zero_match_baseline() {
        let policy = ConfidencePolicy::new(5.0, 50.0, 10.0, 100.0).unwrap();
        let verdict = classifier()
            .with_policy(policy)
            .unwrap()
            .classify("headline", &[]);

        assert_eq!(verdict.label, Label::Fake);
        assert_eq!(verdict.confidence, 5.0);
        assert_eq!(verdict.total_results, 0);
        assert_eq!(verdict.trusted_share, 0.0);
    }

    #[test]
    fn test_matches_keep_input_order() {
        let classifier =
            TrustClassifier::new(TrustedDomainSet::new(["bbc.com", "reuters.com"]).unwrap());
        let results = vec![
            result("https://reuters.com/a"),
            result("https://random.blog/b"),
            result("https://news.bbc.com/c"),
            result("::garbage::"),
            result("https://www.reuters.com/d"),
        ];

        let verdict = classifier.classify("headline", &results);

        let urls: Vec<&str> = verdict.matched_results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://reuters.com/a",
                "https://news.bbc.com/c",
                "https://www.reuters.com/d"
            ]
        );
        assert_eq!(verdict.confidence, 70.0);
        assert_eq!(verdict.trusted_share, 60.0);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let classifier = classifier();
        let results = vec![result("https://bbc.com/1"), result("https://x.org/2")];

        assert_eq!(
            classifier.classify("h", &results),
            classifier.classify("h", &results)
        );
    }

    #[test]
    fn test_confidence_policy_is_capped_and_monotonic() {
        let policy = ConfidencePolicy::default();
        let values: Vec<f64> = (0..10).map(|n| policy.confidence(n)).collect();

        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(policy.confidence(6), 100.0);
        assert_eq!(policy.confidence(50), 100.0);
    }

    #[test]
    fn test_confidence_policy_clamps_out_of_range_values() {
        let policy = ConfidencePolicy {
            no_match_confidence: -20.0,
            first_match_confidence: 150.0,
            per_extra_match: 0.0,
            max_confidence: 200.0,
        };
        assert_eq!(policy.confidence(0), 0.0);
        assert_eq!(policy.confidence(3), 100.0);
    }

    #[test]
    fn test_trusted_share_rounds_to_two_decimals() {
        let results = vec![
            result("https://bbc.com/1"),
            result("https://x.org/2"),
            result("https://y.org/3"),
        ];
        let verdict = classifier().classify("h", &results);
        assert_eq!(verdict.trusted_share, 33.33);
    }

    #[test]
    fn test_policy_rejects_inverted_or_non_finite_values() {
        assert!(matches!(
            ConfidencePolicy::new(60.0, 50.0, 10.0, 100.0),
            Err(VerifierError::Config(_))
        ));
        assert!(ConfidencePolicy::new(0.0, 80.0, 10.0, 70.0).is_err());
        assert!(ConfidencePolicy::new(f64::NAN, 50.0, 10.0, 100.0).is_err());
        assert!(ConfidencePolicy::new(0.0, 50.0, f64::INFINITY, 100.0).is_err());
        assert!(ConfidencePolicy::new(0.0, 50.0, -5.0, 100.0).is_err());

        let inverted = ConfidencePolicy {
            no_match_confidence: 60.0,
            ..ConfidencePolicy::default()
        };
        assert!(classifier().with_policy(inverted).is_err());
    }

    #[test]
    fn test_unvalidated_policy_stays_monotonic_and_in_range() {
        let inverted = ConfidencePolicy {
            no_match_confidence: 60.0,
            first_match_confidence: 50.0,
            per_extra_match: 0.0,
            max_confidence: 100.0,
        };
        assert_eq!(inverted.confidence(0), 60.0);
        assert_eq!(inverted.confidence(1), 60.0);

        let nan = ConfidencePolicy {
            no_match_confidence: f64::NAN,
            first_match_confidence: f64::NAN,
            per_extra_match: f64::NAN,
            max_confidence: f64::NAN,
        };
        for n in 0..5 {
            let value = nan.confidence(n);
            assert!(value.is_finite());
            assert!((0.0..=100.0).contains(&value));
        }

        let values: Vec<f64> = (0..10).map(|n| inverted.confidence(n)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}
