use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use super::domain::ReportSubmission;
use super::ledger::{ReportLedger, ReportStore};

/// Router builder exposing report intake and history endpoints.
pub fn report_router<S>(ledger: Arc<ReportLedger<S>>) -> Router
where
    S: ReportStore + 'static,
{
    Router::new()
        .route(
            "/api/report",
            post(submit_handler::<S>).get(history_handler::<S>),
        )
        .with_state(ledger)
}

pub(crate) async fn submit_handler<S>(
    State(ledger): State<Arc<ReportLedger<S>>>,
    axum::Json(submission): axum::Json<ReportSubmission>,
) -> Response
where
    S: ReportStore + 'static,
{
    let report = ledger.submit(submission);
    (StatusCode::CREATED, axum::Json(report)).into_response()
}

pub(crate) async fn history_handler<S>(State(ledger): State<Arc<ReportLedger<S>>>) -> Response
where
    S: ReportStore + 'static,
{
    let listing = ledger.list();
    (StatusCode::OK, axum::Json(listing)).into_response()
}
