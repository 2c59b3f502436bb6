//! Business logic services for the Headline Verifier
//!
//! This crate provides the verification pipeline that ties the search,
//! fetch and summarization clients to the trust classifier.

pub mod rate_limiter;
pub mod report;
pub mod verification_service;

pub use rate_limiter::RateLimiter;
pub use report::{SummaryOutcome, TrustedSource, VerificationReport};
pub use verification_service::{VerificationConfig, VerificationService};
