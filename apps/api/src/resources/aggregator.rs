//! Resource aggregation: runs every discovery strategy, merges and dedups
//! their output, validates URLs, and tops up from the curated table.
//!
//! `discover` never fails. A failing or slow strategy contributes nothing,
//! and a skill with no live results still gets its curated resources.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::resource::CandidateResource;
use crate::resources::curated::curated_resources;
use crate::resources::normalize::normalize_url;
use crate::resources::strategies::{
    AggregatorSiteStrategy, DiscoveryError, DiscoveryStrategy, IntelligentSearchStrategy,
    ProviderSearchStrategy, ResourceSearchProvider,
};
use crate::resources::validation::{verify_url, UrlReachabilityChecker};

/// Below this many admitted candidates the curated table is consulted.
pub const MIN_VIABLE_RESOURCES: usize = 3;

pub struct ResourceAggregator {
    /// In preference order: earlier strategies win dedup ties.
    strategies: Vec<Arc<dyn DiscoveryStrategy>>,
    /// `None` is offline mode: nothing is validated.
    checker: Option<Arc<dyn UrlReachabilityChecker>>,
    validation_timeout: Duration,
}

impl ResourceAggregator {
    pub fn new(
        strategies: Vec<Arc<dyn DiscoveryStrategy>>,
        checker: Option<Arc<dyn UrlReachabilityChecker>>,
        validation_timeout: Duration,
    ) -> Self {
        Self {
            strategies,
            checker,
            validation_timeout,
        }
    }

    /// Standard strategy order: intelligent search (when a search provider is
    /// available), then provider search pages, then aggregator sites.
    pub fn with_default_strategies(
        config: &Config,
        search_provider: Option<Arc<dyn ResourceSearchProvider>>,
        checker: Option<Arc<dyn UrlReachabilityChecker>>,
    ) -> Self {
        let mut strategies: Vec<Arc<dyn DiscoveryStrategy>> = Vec::new();
        match search_provider {
            Some(provider) => strategies.push(Arc::new(IntelligentSearchStrategy::new(
                provider,
                config.search_timeout(),
            ))),
            None => info!("No search provider configured; intelligent search disabled"),
        }
        strategies.push(Arc::new(ProviderSearchStrategy::new(
            config.provider_strategy_timeout(),
        )));
        strategies.push(Arc::new(AggregatorSiteStrategy::new(
            config.provider_strategy_timeout(),
        )));

        Self::new(strategies, checker, config.url_validation_timeout())
    }

    pub fn is_offline(&self) -> bool {
        self.checker.is_none()
    }

    /// Candidate resources for a skill, deduplicated by normalized URL.
    /// Order is strategy preference order, then curated; ranking is the
    /// caller's job.
    pub async fn discover(&self, skill: &str) -> Vec<CandidateResource> {
        let outcomes = join_all(
            self.strategies
                .iter()
                .map(|strategy| run_strategy(strategy.as_ref(), skill)),
        )
        .await;

        let merged = self
            .strategies
            .iter()
            .zip(outcomes)
            .fold(Deduped::default(), |mut merged, (strategy, outcome)| {
                match outcome {
                    Ok(candidates) => {
                        debug!(
                            "Strategy {} returned {} candidates for '{skill}'",
                            strategy.name(),
                            candidates.len()
                        );
                        merged.extend(candidates);
                    }
                    Err(e) => warn!("Strategy {} failed for '{skill}': {e}", strategy.name()),
                }
                merged
            });

        let live = match &self.checker {
            Some(checker) => self.validate(checker.as_ref(), skill, merged.items).await,
            None => merged.items,
        };

        let mut admitted = Deduped::default();
        admitted.extend(live);

        if admitted.items.len() < MIN_VIABLE_RESOURCES {
            let curated = curated_resources(skill);
            debug!(
                "Only {} live candidates for '{skill}'; adding up to {} curated",
                admitted.items.len(),
                curated.len()
            );
            let curated = match &self.checker {
                Some(checker) => self.validate(checker.as_ref(), skill, curated).await,
                None => curated,
            };
            admitted.extend(curated);
        }

        admitted.items
    }

    /// Checks every candidate concurrently; drops failures, marks survivors verified.
    async fn validate(
        &self,
        checker: &dyn UrlReachabilityChecker,
        skill: &str,
        candidates: Vec<CandidateResource>,
    ) -> Vec<CandidateResource> {
        let timeout = self.validation_timeout;
        let results = join_all(
            candidates
                .iter()
                .map(|c| verify_url(checker, &c.url, timeout)),
        )
        .await;

        candidates
            .into_iter()
            .zip(results)
            .filter_map(|(candidate, result)| match result {
                Ok(()) => Some(CandidateResource {
                    verified: true,
                    ..candidate
                }),
                Err(e) => {
                    warn!("Dropping '{}' for '{skill}': {e}", candidate.title);
                    None
                }
            })
            .collect()
    }
}

async fn run_strategy(
    strategy: &dyn DiscoveryStrategy,
    skill: &str,
) -> Result<Vec<CandidateResource>, DiscoveryError> {
    let timeout = strategy.timeout();
    match tokio::time::timeout(timeout, strategy.discover(skill)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(DiscoveryError::Timeout(timeout)),
    }
}

/// First-seen-wins set of candidates keyed by normalized URL.
#[derive(Default)]
struct Deduped {
    seen: HashSet<String>,
    items: Vec<CandidateResource>,
}

impl Deduped {
    fn extend(&mut self, candidates: impl IntoIterator<Item = CandidateResource>) {
        for candidate in candidates {
            if self.seen.insert(normalize_url(&candidate.url)) {
                self.items.push(candidate);
            }
        }
    }
}
