use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::AssessmentRequest;
use super::AssessmentEngine;

/// Router builder exposing the text/URL detection endpoints.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/detect", post(detect_handler))
        .route("/api/detect/link", post(detect_link_handler))
        .with_state(engine)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DetectRequest {
    pub(crate) text: Option<String>,
    pub(crate) url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LinkRequest {
    pub(crate) url: Option<String>,
}

/// Empty strings submitted by forms count as absent input.
fn presence(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

pub(crate) async fn detect_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    axum::Json(request): axum::Json<DetectRequest>,
) -> Response {
    let request = AssessmentRequest::Content {
        text: presence(request.text),
        url: presence(request.url),
    };
    respond(engine.assess(request))
}

pub(crate) async fn detect_link_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    axum::Json(request): axum::Json<LinkRequest>,
) -> Response {
    let request = AssessmentRequest::Link {
        url: presence(request.url),
    };
    respond(engine.assess(request))
}

fn respond(result: Result<super::Verdict, super::ValidationError>) -> Response {
    match result {
        Ok(verdict) => (StatusCode::OK, axum::Json(verdict)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
