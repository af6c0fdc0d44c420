use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pathway::assembler::PathwayGenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    PathwayGeneration(#[from] PathwayGenerationError),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PathwayGeneration(e) => {
                tracing::warn!("Pathway generation error: {:?}", e.cause());
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PATHWAY_GENERATION_ERROR",
                    e.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let (status, code, message) = AppError::Validation("bad input".to_string()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
        assert_eq!(message, "bad input");
    }

    #[tokio::test]
    async fn test_pathway_generation_hides_cause() {
        let state = crate::state::tests::offline_state();
        let err = state
            .assembler
            .generate_pathway(&[], "Astronaut")
            .await
            .unwrap_err();

        let (status, code, message) = AppError::from(err).parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "PATHWAY_GENERATION_ERROR");
        assert!(!message.contains("Astronaut"));
    }
}
