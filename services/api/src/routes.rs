use crate::infra::{persist_upload, stored_upload_name, AppState, MediaState};
use axum::extract::multipart::Multipart;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use credence::assessment::domain::{AssessmentRequest, MediaUpload, RiskBand, Signal};
use credence::assessment::{assessment_router, AssessmentEngine};
use credence::error::AppError;
use credence::reports::{report_router, InMemoryReportStore, ReportLedger};
use credence::resources::ResourceCatalog;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Uploads may exceed the JSON body cap; this limit applies to the media
/// route only.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Response for media assessments. Mirrors a `Verdict` with the original
/// filename attached so callers can correlate the answer with their upload.
#[derive(Debug, Serialize)]
pub(crate) struct MediaVerdictResponse {
    pub(crate) filename: String,
    pub(crate) risk: RiskBand,
    pub(crate) score: f64,
    pub(crate) signals: Vec<Signal>,
    pub(crate) recommendations: Vec<String>,
}

pub(crate) fn with_service_routes(
    engine: Arc<AssessmentEngine>,
    ledger: Arc<ReportLedger<InMemoryReportStore>>,
    media: MediaState,
) -> axum::Router {
    assessment_router(engine)
        .merge(report_router(ledger))
        .merge(media_router(media))
        .route("/api/resources", axum::routing::get(resources_endpoint))
        .route("/api/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) fn media_router(state: MediaState) -> axum::Router {
    axum::Router::new()
        .route("/api/detect/media", axum::routing::post(media_endpoint))
        .layer(axum::extract::DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "app": "Credence" }))
}

pub(crate) async fn resources_endpoint(
    Extension(catalog): Extension<Arc<ResourceCatalog>>,
) -> Json<serde_json::Value> {
    Json(json!({ "resources": &*catalog }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn media_endpoint(
    State(state): State<MediaState>,
    multipart: Option<Multipart>,
) -> Response {
    let upload = match multipart {
        Some(multipart) => match receive_upload(multipart, &state).await {
            Ok(upload) => upload,
            Err(response) => return response,
        },
        None => None,
    };

    let verdict = match state.engine.assess(AssessmentRequest::Media {
        upload: upload.clone(),
    }) {
        Ok(verdict) => verdict,
        Err(error) => return AppError::from(error).into_response(),
    };

    let filename = upload.map(|upload| upload.filename).unwrap_or_default();
    let response = MediaVerdictResponse {
        filename,
        risk: verdict.risk,
        score: verdict.score,
        signals: verdict.signals,
        recommendations: verdict.recommendations,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Pull the `file` part out of the multipart stream and park it in the upload
/// directory. Parts without a filename are form fields, not uploads.
async fn receive_upload(
    mut multipart: Multipart,
    state: &MediaState,
) -> Result<Option<MediaUpload>, Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(error) => return Err(bad_multipart(error)),
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        let declared_type = field.content_type().map(str::to_string).or_else(|| {
            mime_guess::from_path(&filename)
                .first()
                .map(|mime| mime.to_string())
        });

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(error) => return Err(bad_multipart(error)),
        };

        let stored_name = stored_upload_name(&filename);
        if let Err(error) = persist_upload(&state.upload_dir, &stored_name, &bytes).await {
            return Err(AppError::from(error).into_response());
        }

        return Ok(Some(MediaUpload {
            filename,
            size_bytes: bytes.len() as u64,
            declared_type,
        }));
    }
}

fn bad_multipart(error: axum::extract::multipart::MultipartError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
