use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::store::Difficulty;
use crate::models::resource::CandidateResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub step: u32,
    pub title: String,
    pub estimated_hours: u32,
}

/// A skill the caller still needs for the target role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub name: String,
    pub category: String,
    pub difficulty: Option<Difficulty>,
    pub estimated_hours: u32,
    /// At most 3, best first. Empty until the assembler fills it.
    pub resources: Vec<CandidateResource>,
    /// 2 – 4 once assembled.
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRole {
    pub name: String,
    pub category: String,
    /// How many of the caller's skills the role requires.
    pub matched_skills: u32,
}

/// Final recommendation returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pathway {
    pub id: Uuid,
    pub target_role: String,
    pub current_skills: Vec<String>,
    pub skill_gaps: Vec<SkillGap>,
    pub total_hours: u32,
    pub total_estimated_duration: String,
    pub confidence_score: f64,
    pub alternative_roles: Vec<AlternativeRole>,
    pub encouragement: String,
    pub generated_at: DateTime<Utc>,
}
