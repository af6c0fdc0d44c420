//! Composite scoring and ordering of candidate resources.
//!
//! score = provider quality (0–10)
//!       + 2 × rating (0–5)
//!       + 5 if free
//!       + 10 if the title mentions the skill (case-insensitive)
//!       + 3 if the URL was verified

use serde::Serialize;

use crate::models::resource::{CandidateResource, Cost};
use crate::resources::providers::provider_quality_score;

/// Resources attached to each skill gap.
pub const TOP_RESOURCES_PER_SKILL: usize = 3;

const RATING_WEIGHT: f64 = 2.0;
const FREE_BONUS: f64 = 5.0;
const TITLE_MATCH_BONUS: f64 = 10.0;
const VERIFIED_BONUS: f64 = 3.0;

#[derive(Debug, Clone, Serialize)]
pub struct RankedResource {
    #[serde(flatten)]
    pub resource: CandidateResource,
    pub score: f64,
}

pub fn composite_score(resource: &CandidateResource, skill: &str) -> f64 {
    let skill = skill.trim().to_lowercase();
    let mut score = provider_quality_score(&resource.provider) + RATING_WEIGHT * resource.rating;

    if resource.cost == Cost::Free {
        score += FREE_BONUS;
    }
    if !skill.is_empty() && resource.title.to_lowercase().contains(&skill) {
        score += TITLE_MATCH_BONUS;
    }
    if resource.verified {
        score += VERIFIED_BONUS;
    }
    score
}

/// Highest score first. The sort is stable: equal scores keep their input order.
pub fn rank_with_scores(candidates: Vec<CandidateResource>, skill: &str) -> Vec<RankedResource> {
    let mut ranked: Vec<RankedResource> = candidates
        .into_iter()
        .map(|resource| RankedResource {
            score: composite_score(&resource, skill),
            resource,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// The best `limit` candidates, best first.
pub fn top_resources(
    candidates: Vec<CandidateResource>,
    skill: &str,
    limit: usize,
) -> Vec<CandidateResource> {
    rank_with_scores(candidates, skill)
        .into_iter()
        .take(limit)
        .map(|r| r.resource)
        .collect()
}
