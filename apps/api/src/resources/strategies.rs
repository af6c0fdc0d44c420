//! Discovery strategies: independent ways of proposing resources for a skill.
//!
//! Each strategy returns `Ok(candidates)` or `Err(reason)`; the aggregator
//! runs them concurrently and folds the outcomes in preference order. A
//! strategy never needs to guard against its own slowness: the aggregator
//! bounds every call with `DiscoveryStrategy::timeout`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::prompts::NO_FABRICATED_LINKS_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::resource::{CandidateResource, ResourceSource};
use crate::resources::parser::parse_search_output;
use crate::resources::prompts::{RESOURCE_SEARCH_PROMPT_TEMPLATE, RESOURCE_SEARCH_SYSTEM};
use crate::resources::providers::{search_keywords, SearchSite, AGGREGATOR_SITES, PROVIDERS};

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("search provider failed: {0}")]
    Provider(String),

    #[error("search provider returned no usable entries")]
    Malformed,

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definitions
// ────────────────────────────────────────────────────────────────────────────

/// External free-text search capability backing the intelligent strategy.
/// Takes a prompt, returns whatever text the provider produced.
#[async_trait]
pub trait ResourceSearchProvider: Send + Sync {
    async fn search(&self, prompt: &str) -> Result<String, DiscoveryError>;
}

#[async_trait]
pub trait DiscoveryStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Upper bound the aggregator enforces on `discover`.
    fn timeout(&self) -> Duration;

    async fn discover(&self, skill: &str) -> Result<Vec<CandidateResource>, DiscoveryError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmClient as a search provider
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ResourceSearchProvider for LlmClient {
    async fn search(&self, prompt: &str) -> Result<String, DiscoveryError> {
        self.call_text(prompt, RESOURCE_SEARCH_SYSTEM)
            .await
            .map_err(|e| DiscoveryError::Provider(e.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// IntelligentSearchStrategy
// ────────────────────────────────────────────────────────────────────────────

/// Asks a free-text search provider for resources and parses its answer.
/// Single attempt: failures surface as `Err` and are not retried here.
pub struct IntelligentSearchStrategy {
    provider: Arc<dyn ResourceSearchProvider>,
    timeout: Duration,
}

impl IntelligentSearchStrategy {
    pub fn new(provider: Arc<dyn ResourceSearchProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }
}

pub fn build_search_prompt(skill: &str) -> String {
    RESOURCE_SEARCH_PROMPT_TEMPLATE
        .replace("{skill}", skill)
        .replace("{keywords}", &search_keywords(skill))
        .replace("{no_fabricated_links}", NO_FABRICATED_LINKS_INSTRUCTION)
}

#[async_trait]
impl DiscoveryStrategy for IntelligentSearchStrategy {
    fn name(&self) -> &'static str {
        "intelligent_search"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn discover(&self, skill: &str) -> Result<Vec<CandidateResource>, DiscoveryError> {
        let raw = self.provider.search(&build_search_prompt(skill)).await?;
        let candidates = parse_search_output(&raw);

        // Non-empty output with nothing usable in it is a malformed response.
        if candidates.is_empty() && !raw.trim().is_empty() {
            return Err(DiscoveryError::Malformed);
        }
        debug!("Intelligent search parsed {} candidates for '{skill}'", candidates.len());
        Ok(candidates)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Search-page strategies
// ────────────────────────────────────────────────────────────────────────────

/// One candidate per site: its search-results page for the skill's keywords.
fn search_page_candidates(
    sites: &[SearchSite],
    skill: &str,
    source: ResourceSource,
) -> Vec<CandidateResource> {
    let skill = skill.trim();
    let keywords = search_keywords(skill);

    sites
        .iter()
        .filter_map(|site| {
            let url = site.search_url(&keywords)?;
            Some(CandidateResource {
                title: format!("{skill} courses on {}", site.name),
                url,
                provider: site.name.to_string(),
                cost: site.cost,
                rating: site.typical_rating,
                description: format!("Browse {} results for \"{keywords}\".", site.name),
                verified: false,
                source,
            })
        })
        .collect()
}

/// Builds search-page links on well-known course platforms.
pub struct ProviderSearchStrategy {
    timeout: Duration,
}

impl ProviderSearchStrategy {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl DiscoveryStrategy for ProviderSearchStrategy {
    fn name(&self) -> &'static str {
        "provider_search"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn discover(&self, skill: &str) -> Result<Vec<CandidateResource>, DiscoveryError> {
        Ok(search_page_candidates(
            PROVIDERS,
            skill,
            ResourceSource::ProviderSearch,
        ))
    }
}

/// Builds search-page links on course aggregator sites.
pub struct AggregatorSiteStrategy {
    timeout: Duration,
}

impl AggregatorSiteStrategy {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl DiscoveryStrategy for AggregatorSiteStrategy {
    fn name(&self) -> &'static str {
        "aggregator_search"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn discover(&self, skill: &str) -> Result<Vec<CandidateResource>, DiscoveryError> {
        Ok(search_page_candidates(
            AGGREGATOR_SITES,
            skill,
            ResourceSource::AggregatorSearch,
        ))
    }
}
