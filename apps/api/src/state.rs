use std::sync::Arc;

use crate::config::Config;
use crate::graph::store::GraphStore;
use crate::pathway::assembler::PathwayAssembler;
use crate::resources::aggregator::ResourceAggregator;
use crate::skills::extractor::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// The graph is read-only after seeding.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub graph: Arc<GraphStore>,
    pub aggregator: Arc<ResourceAggregator>,
    pub assembler: Arc<PathwayAssembler>,
    /// Pluggable extractor. Default: KeywordSkillExtractor; LlmSkillExtractor when an API key is set.
    pub skill_extractor: Arc<dyn SkillExtractor>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use crate::graph::seed::seed_default_graph;
    use crate::skills::extractor::KeywordSkillExtractor;

    /// Default wiring with no API key and URL validation off: no network.
    pub(crate) fn offline_state() -> AppState {
        let config = Config::from_lookup(|key| match key {
            "VALIDATE_RESOURCE_URLS" => Some("false".to_string()),
            _ => None,
        })
        .unwrap();
        let graph = Arc::new(seed_default_graph().unwrap());
        let aggregator = Arc::new(ResourceAggregator::with_default_strategies(
            &config, None, None,
        ));
        let assembler = Arc::new(PathwayAssembler::new(graph.clone(), aggregator.clone()));

        AppState {
            config,
            skill_extractor: Arc::new(KeywordSkillExtractor::new(graph.clone())),
            graph,
            aggregator,
            assembler,
        }
    }
}
