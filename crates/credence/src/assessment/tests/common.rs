use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::{assessment_router, AssessmentEngine, SignalCatalog};

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new(SignalCatalog::standard())
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn signal_labels(payload: &Value) -> Vec<String> {
    payload
        .get("signals")
        .and_then(Value::as_array)
        .expect("signals array")
        .iter()
        .map(|signal| {
            signal
                .get("label")
                .and_then(Value::as_str)
                .expect("signal label")
                .to_string()
        })
        .collect()
}
