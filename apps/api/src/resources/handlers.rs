use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resources::ranker::{rank_with_scores, RankedResource, TOP_RESOURCES_PER_SKILL};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SkillQuery {
    pub skill: String,
}

#[derive(Serialize)]
pub struct ResourceListResponse {
    pub skill: String,
    pub offline: bool,
    pub resources: Vec<RankedResource>,
}

/// GET /api/v1/resources?skill=...
pub async fn handle_discover_resources(
    State(state): State<AppState>,
    Query(params): Query<SkillQuery>,
) -> Result<Json<ResourceListResponse>, AppError> {
    let skill = params.skill.trim();
    if skill.is_empty() {
        return Err(AppError::Validation("skill must not be empty".to_string()));
    }

    let candidates = state.aggregator.discover(skill).await;
    let mut resources = rank_with_scores(candidates, skill);
    resources.truncate(TOP_RESOURCES_PER_SKILL);

    Ok(Json(ResourceListResponse {
        skill: skill.to_string(),
        offline: state.aggregator.is_offline(),
        resources,
    }))
}
