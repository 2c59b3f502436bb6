//! Application configuration loaded from environment variables

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use verifier_core::{
    ArticleFetcher, ConfidencePolicy, NewsSearcher, Summarizer, TrustClassifier, TrustedDomainSet,
    VerifierError, VerifierResult,
};
use verifier_news::{ExaClient, FirecrawlClient, HtmlArticleFetcher, SerpApiClient};
use verifier_services::{VerificationConfig, VerificationService};
use verifier_summarizer::{OpenAiSummarizer, SummarizeError};

const DEFAULT_OPENAI_MAX_TOKENS: u32 = 256;

/// Which search provider backs the verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchProviderKind {
    SerpApi,
    Exa,
}

impl FromStr for SearchProviderKind {
    type Err = VerifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "serpapi" | "google" => Ok(SearchProviderKind::SerpApi),
            "exa" => Ok(SearchProviderKind::Exa),
            other => Err(VerifierError::config(format!(
                "Unknown SEARCH_PROVIDER '{}'. Use 'serpapi' or 'exa'",
                other
            ))),
        }
    }
}

/// Which article fetcher reads matched pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetcherKind {
    Html,
    Firecrawl,
}

impl FromStr for FetcherKind {
    type Err = VerifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(FetcherKind::Html),
            "firecrawl" => Ok(FetcherKind::Firecrawl),
            other => Err(VerifierError::config(format!(
                "Unknown ARTICLE_FETCHER '{}'. Use 'html' or 'firecrawl'",
                other
            ))),
        }
    }
}

/// Everything needed to assemble the verification service
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_provider: SearchProviderKind,
    pub serpapi_key: Option<String>,
    pub exa_api_key: Option<String>,
    /// Restrict Exa to articles published within this many days
    pub exa_days_back: Option<u32>,
    pub fetcher: FetcherKind,
    pub firecrawl_api_key: Option<String>,
    pub openai_model: String,
    pub openai_max_tokens: u32,
    pub trusted_domains: TrustedDomainSet,
    pub confidence_policy: ConfidencePolicy,
    pub verification: VerificationConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> VerifierResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> VerifierResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let search_provider = match get("SEARCH_PROVIDER") {
            Some(value) => value.parse()?,
            None => SearchProviderKind::SerpApi,
        };
        let fetcher = match get("ARTICLE_FETCHER") {
            Some(value) => value.parse()?,
            None => FetcherKind::Html,
        };

        let trusted_domains = match get("TRUSTED_DOMAINS") {
            Some(csv) => TrustedDomainSet::from_csv(&csv)?,
            None => TrustedDomainSet::default_outlets(),
        };

        let policy_defaults = ConfidencePolicy::default();
        let confidence_policy = ConfidencePolicy::new(
            parse_var(&get, "NO_MATCH_CONFIDENCE", policy_defaults.no_match_confidence)?,
            parse_var(&get, "FIRST_MATCH_CONFIDENCE", policy_defaults.first_match_confidence)?,
            parse_var(&get, "PER_EXTRA_MATCH_CONFIDENCE", policy_defaults.per_extra_match)?,
            parse_var(&get, "MAX_CONFIDENCE", policy_defaults.max_confidence)?,
        )?;

        let openai_max_tokens = parse_var(&get, "OPENAI_MAX_TOKENS", DEFAULT_OPENAI_MAX_TOKENS)?;
        if openai_max_tokens == 0 {
            return Err(VerifierError::config("OPENAI_MAX_TOKENS must be at least 1"));
        }

        let exa_days_back = match get("EXA_DAYS_BACK") {
            Some(_) => Some(parse_var(&get, "EXA_DAYS_BACK", 0u32)?),
            None => None,
        };

        let defaults = VerificationConfig::default();
        let verification = VerificationConfig {
            max_results: parse_var(&get, "MAX_RESULTS", defaults.max_results)?,
            max_article_fetches: parse_var(
                &get,
                "MAX_ARTICLE_FETCHES",
                defaults.max_article_fetches,
            )?,
            search_timeout: Duration::from_secs(parse_var(
                &get,
                "SEARCH_TIMEOUT_SECS",
                defaults.search_timeout.as_secs(),
            )?),
            fetch_timeout: Duration::from_secs(parse_var(
                &get,
                "FETCH_TIMEOUT_SECS",
                defaults.fetch_timeout.as_secs(),
            )?),
            fetch_interval: Duration::from_millis(parse_var(
                &get,
                "FETCH_INTERVAL_MS",
                defaults.fetch_interval.as_millis() as u64,
            )?),
            ..defaults
        };

        if verification.max_results == 0 {
            return Err(VerifierError::config("MAX_RESULTS must be at least 1"));
        }

        Ok(Self {
            search_provider,
            serpapi_key: get("SERPAPI_KEY"),
            exa_api_key: get("EXA_API_KEY"),
            exa_days_back,
            fetcher,
            firecrawl_api_key: get("FIRECRAWL_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            openai_max_tokens,
            trusted_domains,
            confidence_policy,
            verification,
        })
    }

    /// Build the configured search client
    pub fn build_searcher(&self) -> VerifierResult<Arc<dyn NewsSearcher>> {
        let searcher: Arc<dyn NewsSearcher> = match self.search_provider {
            SearchProviderKind::SerpApi => {
                let key = self.serpapi_key.clone().ok_or_else(|| {
                    VerifierError::config("SERPAPI_KEY is required for SEARCH_PROVIDER=serpapi")
                })?;
                Arc::new(SerpApiClient::new(key).map_err(|e| e.into_search_error("serpapi"))?)
            }
            SearchProviderKind::Exa => {
                let key = self.exa_api_key.clone().ok_or_else(|| {
                    VerifierError::config("EXA_API_KEY is required for SEARCH_PROVIDER=exa")
                })?;
                let mut client = ExaClient::new(key).map_err(|e| e.into_search_error("exa"))?;
                if let Some(days) = self.exa_days_back {
                    client = client.with_days_back(i64::from(days));
                }
                Arc::new(client)
            }
        };
        Ok(searcher)
    }

    /// Build the configured article fetcher
    pub fn build_fetcher(&self) -> VerifierResult<Arc<dyn ArticleFetcher>> {
        let fetcher: Arc<dyn ArticleFetcher> = match self.fetcher {
            FetcherKind::Html => Arc::new(
                HtmlArticleFetcher::new(self.verification.fetch_timeout)
                    .map_err(|e| VerifierError::config(e.to_string()))?,
            ),
            FetcherKind::Firecrawl => {
                let key = self.firecrawl_api_key.clone().ok_or_else(|| {
                    VerifierError::config("FIRECRAWL_API_KEY is required for ARTICLE_FETCHER=firecrawl")
                })?;
                Arc::new(FirecrawlClient::new(key).map_err(|e| VerifierError::config(e.to_string()))?)
            }
        };
        Ok(fetcher)
    }

    /// Build the summarizer, or `None` when OPENAI_API_KEY is not set
    pub fn build_summarizer(&self) -> Option<Arc<dyn Summarizer>> {
        match OpenAiSummarizer::from_env() {
            Ok(summarizer) => Some(Arc::new(
                summarizer
                    .with_model(&self.openai_model)
                    .with_max_tokens(self.openai_max_tokens),
            )),
            Err(SummarizeError::MissingApiKey) => {
                info!("OPENAI_API_KEY not set - summaries disabled");
                None
            }
            Err(e) => {
                info!("Summarizer unavailable: {}", e);
                None
            }
        }
    }

    /// Assemble the verification service from this configuration
    pub fn build_service(&self) -> VerifierResult<VerificationService> {
        let classifier = TrustClassifier::new(self.trusted_domains.clone())
            .with_policy(self.confidence_policy)?;

        Ok(VerificationService::new(
            classifier,
            self.build_searcher()?,
            self.build_fetcher()?,
            self.build_summarizer(),
            self.verification.clone(),
        ))
    }
}

fn parse_var<T, F>(get: &F, key: &str, default: T) -> VerifierResult<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            VerifierError::config(format!("Invalid value for {}: '{}'", key, raw))
        }),
        None => Ok(default),
    }
}
