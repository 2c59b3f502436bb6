//! Classification verdict types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

/// Outcome label for a headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "REAL",
            Label::Fake => "FAKE",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one set of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationVerdict {
    pub label: Label,
    /// Heuristic confidence percentage in [0, 100]
    pub confidence: f64,
    /// Results whose host is trusted, in input order
    pub matched_results: Vec<SearchResult>,
    /// Number of results that were classified
    pub total_results: usize,
    /// Share of results from trusted hosts, as a percentage rounded to 2 decimals
    pub trusted_share: f64,
}

impl ClassificationVerdict {
    pub fn match_count(&self) -> usize {
        self.matched_results.len()
    }
}
