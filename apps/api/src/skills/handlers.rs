use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(req): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }
    let skills = state.skill_extractor.extract(&req.text).await?;
    Ok(Json(ExtractSkillsResponse { skills }))
}
