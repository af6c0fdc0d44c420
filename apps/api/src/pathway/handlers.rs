use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::pathway::Pathway;
use crate::skills::extractor::merge_skills;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PathwayRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    pub target_role: String,
    /// Optional free text (e.g. a pasted resume) to mine for extra skills.
    pub resume_text: Option<String>,
}

/// POST /api/v1/pathways
pub async fn handle_generate_pathway(
    State(state): State<AppState>,
    Json(req): Json<PathwayRequest>,
) -> Result<Json<Pathway>, AppError> {
    if req.target_role.trim().is_empty() {
        return Err(AppError::Validation("target_role must not be empty".to_string()));
    }

    let mut current_skills = req.current_skills;
    if let Some(text) = req.resume_text.as_deref().filter(|t| !t.trim().is_empty()) {
        let extracted = state.skill_extractor.extract(text).await?;
        debug!("Extracted {} skills from resume text", extracted.len());
        current_skills = merge_skills(&current_skills, &extracted);
    }

    let pathway = state
        .assembler
        .generate_pathway(&current_skills, &req.target_role)
        .await?;
    Ok(Json(pathway))
}
