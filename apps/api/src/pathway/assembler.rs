//! Pathway Assembler: path finding, then per-gap resource discovery and
//! ranking, milestones, duration, alternatives and encouragement.
//!
//! Gaps are enriched concurrently and independently; one gap's discovery
//! never sees another's state.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::graph::fallback::required_skills_for;
use crate::graph::path_finder::{PathError, PathFinder};
use crate::graph::store::{GraphStore, Node, NodeKind};
use crate::models::pathway::{AlternativeRole, Pathway, SkillGap};
use crate::pathway::milestones::build_milestones;
use crate::pathway::summary::{encouragement_for, format_duration};
use crate::resources::aggregator::ResourceAggregator;
use crate::resources::ranker::{top_resources, TOP_RESOURCES_PER_SKILL};
use crate::skills::extractor::canonicalize_skills;

const MAX_ALTERNATIVE_ROLES: usize = 3;

/// The only error a caller sees. The underlying cause is logged, not exposed.
#[derive(Debug, Error)]
#[error("Could not generate a learning pathway")]
pub struct PathwayGenerationError {
    #[source]
    cause: PathError,
}

impl PathwayGenerationError {
    pub fn cause(&self) -> &PathError {
        &self.cause
    }
}

pub struct PathwayAssembler {
    graph: Arc<GraphStore>,
    aggregator: Arc<ResourceAggregator>,
}

impl PathwayAssembler {
    pub fn new(graph: Arc<GraphStore>, aggregator: Arc<ResourceAggregator>) -> Self {
        Self { graph, aggregator }
    }

    pub async fn generate_pathway(
        &self,
        current_skills: &[String],
        target_role: &str,
    ) -> Result<Pathway, PathwayGenerationError> {
        let known = canonicalize_skills(&self.graph, current_skills);
        let target = self
            .graph
            .resolve_name(NodeKind::Role, target_role)
            .map(|n| n.name.clone())
            .unwrap_or_else(|| target_role.trim().to_string());

        let path = PathFinder::new(&self.graph)
            .find_shortest_path(&known, &target)
            .map_err(|cause| {
                warn!("Pathway generation for '{target}' failed: {cause}");
                PathwayGenerationError { cause }
            })?;

        let skill_gaps = join_all(
            path.skill_gaps
                .into_iter()
                .map(|gap| self.enrich_gap(gap)),
        )
        .await;

        let total_hours: u32 = skill_gaps.iter().map(|g| g.estimated_hours).sum();
        let pathway = Pathway {
            id: Uuid::new_v4(),
            target_role: target.clone(),
            current_skills: current_skills.to_vec(),
            total_estimated_duration: format_duration(total_hours),
            total_hours,
            confidence_score: path.confidence,
            alternative_roles: self.alternative_roles(&known, &target),
            encouragement: encouragement_for(skill_gaps.len()).to_string(),
            skill_gaps,
            generated_at: Utc::now(),
        };

        info!(
            "Pathway {} for '{}': {} gaps, {}h, confidence {:.2} ({:?}, {} path nodes)",
            pathway.id,
            pathway.target_role,
            pathway.skill_gaps.len(),
            pathway.total_hours,
            pathway.confidence_score,
            path.source,
            path.path.len()
        );
        Ok(pathway)
    }

    async fn enrich_gap(&self, mut gap: SkillGap) -> SkillGap {
        let candidates = self.aggregator.discover(&gap.name).await;
        gap.resources = top_resources(candidates, &gap.name, TOP_RESOURCES_PER_SKILL);
        gap.milestones = build_milestones(&gap.name, gap.estimated_hours);
        gap
    }

    /// Other graph roles that already use some of the caller's skills.
    fn alternative_roles(&self, known: &[String], target: &str) -> Vec<AlternativeRole> {
        let known: HashSet<String> = known.iter().map(|s| s.to_lowercase()).collect();
        if known.is_empty() {
            return Vec::new();
        }
        let target_category = self
            .graph
            .find_node(NodeKind::Role, target)
            .map(|n| n.attrs.category().to_string());

        let mut scored: Vec<(AlternativeRole, bool)> = self
            .graph
            .nodes_of_kind(NodeKind::Role)
            .filter(|role| !role.name.eq_ignore_ascii_case(target))
            .filter_map(|role| {
                let matched = self
                    .required_skill_names(role)
                    .iter()
                    .filter(|name| known.contains(*name))
                    .count() as u32;
                if matched == 0 {
                    return None;
                }
                let category = role.attrs.category().to_string();
                let same_category = target_category.as_deref() == Some(category.as_str());
                Some((
                    AlternativeRole {
                        name: role.name.clone(),
                        category,
                        matched_skills: matched,
                    },
                    same_category,
                ))
            })
            .collect();

        // Stable: ties keep graph insertion order.
        scored.sort_by(|(a, a_same), (b, b_same)| {
            b.matched_skills
                .cmp(&a.matched_skills)
                .then_with(|| b_same.cmp(a_same))
        });

        scored
            .into_iter()
            .take(MAX_ALTERNATIVE_ROLES)
            .map(|(role, _)| role)
            .collect()
    }

    /// Lowercased union of the role's graph requirements and its table entry.
    fn required_skill_names(&self, role: &Node) -> HashSet<String> {
        let from_graph = self
            .graph
            .required_skills(&role.id)
            .into_iter()
            .map(|n| n.name.to_lowercase());
        let from_table = required_skills_for(&role.name)
            .unwrap_or_default()
            .iter()
            .map(|s| s.name.to_lowercase());
        from_graph.chain(from_table).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::graph::path_finder::FALLBACK_CONFIDENCE;
    use crate::graph::seed::seed_default_graph;
    use crate::models::resource::{CandidateResource, ResourceSource};
    use crate::resources::strategies::{
        AggregatorSiteStrategy, DiscoveryError, DiscoveryStrategy, ProviderSearchStrategy,
    };

    struct FailingStrategy;

    #[async_trait]
    impl DiscoveryStrategy for FailingStrategy {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(1)
        }

        async fn discover(&self, _skill: &str) -> Result<Vec<CandidateResource>, DiscoveryError> {
            Err(DiscoveryError::Provider("unavailable".to_string()))
        }
    }

    fn graph() -> Arc<GraphStore> {
        Arc::new(seed_default_graph().unwrap())
    }

    fn offline_assembler() -> PathwayAssembler {
        let strategies: Vec<Arc<dyn DiscoveryStrategy>> = vec![
            Arc::new(ProviderSearchStrategy::new(Duration::from_secs(1))),
            Arc::new(AggregatorSiteStrategy::new(Duration::from_secs(1))),
        ];
        let aggregator = ResourceAggregator::new(strategies, None, Duration::from_secs(1));
        PathwayAssembler::new(graph(), Arc::new(aggregator))
    }

    fn failing_assembler() -> PathwayAssembler {
        let strategies: Vec<Arc<dyn DiscoveryStrategy>> = vec![
            Arc::new(FailingStrategy),
            Arc::new(FailingStrategy),
            Arc::new(FailingStrategy),
        ];
        let aggregator = ResourceAggregator::new(strategies, None, Duration::from_secs(1));
        PathwayAssembler::new(graph(), Arc::new(aggregator))
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_project_manager_to_ai_enhanced_pm() {
        let assembler = offline_assembler();
        let pathway = assembler
            .generate_pathway(&skills(&["Project Management"]), "AI-Enhanced Project Manager")
            .await
            .unwrap();

        let names: Vec<_> = pathway.skill_gaps.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "AI Tools Proficiency",
                "Data-Driven Decision Making",
                "AI Project Planning"
            ]
        );
        assert_eq!(pathway.skill_gaps[0].estimated_hours, 20);
        assert_eq!(pathway.total_hours, 70);
        assert_eq!(pathway.total_estimated_duration, "7 weeks");
        assert!((pathway.confidence_score - 0.875).abs() < 1e-9);
        assert_eq!(pathway.encouragement, encouragement_for(3));

        for gap in &pathway.skill_gaps {
            assert!(!gap.resources.is_empty() && gap.resources.len() <= 3);
            assert!((2..=4).contains(&gap.milestones.len()));
        }
    }

    #[tokio::test]
    async fn test_current_skills_are_returned_as_given() {
        let assembler = offline_assembler();
        let input = skills(&["  project management ", "PROJECT MANAGEMENT"]);
        let pathway = assembler
            .generate_pathway(&input, "ai-enhanced project manager")
            .await
            .unwrap();
        assert_eq!(pathway.current_skills, input);
        assert_eq!(pathway.target_role, "AI-Enhanced Project Manager");
        assert_eq!(pathway.skill_gaps.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_current_skills_use_fallback() {
        let assembler = offline_assembler();
        let pathway = assembler
            .generate_pathway(&[], "Data Analyst")
            .await
            .unwrap();
        assert_eq!(pathway.confidence_score, FALLBACK_CONFIDENCE);
        assert_eq!(pathway.skill_gaps.len(), 3);
        assert_eq!(pathway.skill_gaps[0].name, "SQL");
        assert!(pathway.alternative_roles.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_role_is_a_generic_error() {
        let assembler = offline_assembler();
        let err = assembler
            .generate_pathway(&skills(&["Python"]), "Astronaut")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Could not generate a learning pathway");
        assert_eq!(err.cause(), &PathError::UnknownRole("Astronaut".to_string()));
    }

    #[tokio::test]
    async fn test_all_strategies_failing_still_yields_curated_resources() {
        let assembler = failing_assembler();
        let pathway = assembler
            .generate_pathway(&skills(&["AI Tools Proficiency"]), "Prompt Engineer")
            .await
            .unwrap();

        let prompt = pathway
            .skill_gaps
            .iter()
            .find(|g| g.name == "Prompt Engineering")
            .expect("Prompt Engineering gap");
        assert_eq!(prompt.resources.len(), 3);
        assert!(prompt
            .resources
            .iter()
            .all(|r| r.source == ResourceSource::Curated && r.verified));
    }

    #[tokio::test]
    async fn test_alternative_roles_rank_by_matched_skills() {
        let assembler = offline_assembler();
        let pathway = assembler
            .generate_pathway(&skills(&["Python", "SQL"]), "Data Analyst")
            .await
            .unwrap();

        let alternatives: Vec<_> = pathway
            .alternative_roles
            .iter()
            .map(|r| (r.name.as_str(), r.matched_skills))
            .collect();
        assert_eq!(
            alternatives,
            vec![("Data Scientist", 1), ("Machine Learning Engineer", 1)]
        );
        assert!(pathway
            .alternative_roles
            .iter()
            .all(|r| r.name != "Data Analyst"));
    }

    #[tokio::test]
    async fn test_generation_is_repeatable() {
        let assembler = offline_assembler();
        let input = skills(&["Project Management"]);
        let first = assembler
            .generate_pathway(&input, "AI-Enhanced Project Manager")
            .await
            .unwrap();
        let second = assembler
            .generate_pathway(&input, "AI-Enhanced Project Manager")
            .await
            .unwrap();

        assert_eq!(first.skill_gaps, second.skill_gaps);
        assert_eq!(first.confidence_score, second.confidence_score);
        assert_eq!(first.alternative_roles, second.alternative_roles);
        assert_ne!(first.id, second.id);
    }
}
