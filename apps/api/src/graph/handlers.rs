use axum::{extract::State, Json};
use serde::Serialize;

use crate::graph::fallback::fallback_role_names;
use crate::graph::store::{GraphStore, Node, NodeKind};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RoleSummary {
    #[serde(flatten)]
    pub node: Node,
    /// Graph `required-for` sources, core first.
    pub required_skills: Vec<String>,
}

#[derive(Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<RoleSummary>,
    /// Roles with no graph node, answered from the static requirements table.
    pub table_only_roles: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<Node>,
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    Json(RoleListResponse {
        roles: role_summaries(&state.graph),
        table_only_roles: fallback_role_names()
            .filter(|name| state.graph.find_node(NodeKind::Role, name).is_none())
            .collect(),
    })
}

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillListResponse> {
    Json(SkillListResponse {
        skills: state.graph.nodes_of_kind(NodeKind::Skill).cloned().collect(),
    })
}

fn role_summaries(graph: &GraphStore) -> Vec<RoleSummary> {
    graph
        .nodes_of_kind(NodeKind::Role)
        .map(|role| RoleSummary {
            node: role.clone(),
            required_skills: graph
                .required_skills(&role.id)
                .into_iter()
                .map(|n| n.name.clone())
                .collect(),
        })
        .collect()
}
