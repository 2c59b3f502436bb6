//! Core types for the Headline Verifier
//!
//! This crate defines the shared data structures and the trust classifier:
//! search results, the trusted-domain allow-list, verdicts, and the
//! capability traits implemented by the search, fetch and summarization
//! clients.

pub mod classifier;
pub mod error;
pub mod search;
pub mod traits;
pub mod trusted;
pub mod verdict;

pub use classifier::{ConfidencePolicy, TrustClassifier};
pub use error::{VerifierError, VerifierResult};
pub use search::{build_query, SearchResult};
pub use traits::{ArticleFetcher, NewsSearcher, Summarizer};
pub use trusted::{TrustedDomainSet, DEFAULT_TRUSTED_DOMAINS};
pub use verdict::{ClassificationVerdict, Label};
