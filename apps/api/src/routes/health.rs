use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::graph::store::NodeKind;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and graph size.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "graph": {
            "skills": state.graph.nodes_of_kind(NodeKind::Skill).count(),
            "roles": state.graph.nodes_of_kind(NodeKind::Role).count(),
        },
        "url_validation": state.config.validate_resource_urls,
    }))
}
