pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::graph::handlers as graph_handlers;
use crate::pathway::handlers as pathway_handlers;
use crate::resources::handlers as resource_handlers;
use crate::skills::handlers as skill_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/roles", get(graph_handlers::handle_list_roles))
        .route("/api/v1/skills", get(graph_handlers::handle_list_skills))
        // Pathways
        .route(
            "/api/v1/pathways",
            post(pathway_handlers::handle_generate_pathway),
        )
        // Resources
        .route(
            "/api/v1/resources",
            get(resource_handlers::handle_discover_resources),
        )
        // Skill extraction
        .route(
            "/api/v1/skills/extract",
            post(skill_handlers::handle_extract_skills),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::state::tests::offline_state;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(offline_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["graph"]["roles"], 9);
    }

    #[tokio::test]
    async fn test_generate_pathway() {
        let (status, body) = send(post_json(
            "/api/v1/pathways",
            json!({
                "current_skills": ["Project Management"],
                "target_role": "AI-Enhanced Project Manager"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill_gaps"].as_array().unwrap().len(), 3);
        assert_eq!(body["skill_gaps"][0]["name"], "AI Tools Proficiency");
        assert_eq!(body["total_estimated_duration"], "7 weeks");
    }

    #[tokio::test]
    async fn test_generate_pathway_merges_resume_skills() {
        let (status, body) = send(post_json(
            "/api/v1/pathways",
            json!({
                "target_role": "AI-Enhanced Project Manager",
                "resume_text": "Ten years of project management in logistics."
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_skills"], json!(["Project Management"]));
        assert_eq!(body["skill_gaps"][0]["name"], "AI Tools Proficiency");
    }

    #[tokio::test]
    async fn test_empty_target_role_is_bad_request() {
        let (status, body) = send(post_json(
            "/api/v1/pathways",
            json!({"current_skills": ["Python"], "target_role": "  "}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_role_is_generic_generation_error() {
        let (status, body) = send(post_json(
            "/api/v1/pathways",
            json!({"current_skills": ["Python"], "target_role": "Astronaut"}),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "PATHWAY_GENERATION_ERROR");
        assert_eq!(body["error"]["message"], "Could not generate a learning pathway");
    }

    #[tokio::test]
    async fn test_list_roles_and_skills() {
        let (status, body) = send(get("/api/v1/roles")).await;
        assert_eq!(status, StatusCode::OK);
        let roles = body["roles"].as_array().unwrap();
        assert_eq!(roles.len(), 9);
        assert_eq!(roles[0]["name"], "AI-Enhanced Project Manager");
        assert_eq!(roles[0]["required_skills"][0], "AI Project Planning");
        assert_eq!(
            body["table_only_roles"],
            json!(["Cloud Engineer", "Cybersecurity Analyst", "Business Analyst"])
        );

        let (status, body) = send(get("/api/v1/skills")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"].as_array().unwrap().len(), 28);
    }

    #[tokio::test]
    async fn test_discover_resources() {
        let (status, body) = send(get("/api/v1/resources?skill=Prompt%20Engineering")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["offline"], true);
        assert_eq!(body["resources"].as_array().unwrap().len(), 3);

        let (status, _) = send(get("/api/v1/resources?skill=")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_extract_skills() {
        let (status, body) = send(post_json(
            "/api/v1/skills/extract",
            json!({"text": "Built dashboards with SQL and Python"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], json!(["Python", "SQL"]));
    }
}
