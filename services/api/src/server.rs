use crate::cli::ServeArgs;
use crate::infra::{AppState, MediaState};
use crate::routes::with_service_routes;
use axum::extract::DefaultBodyLimit;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use credence::assessment::{AssessmentEngine, SignalCatalog};
use credence::config::AppConfig;
use credence::error::AppError;
use credence::reports::{InMemoryReportStore, ReportLedger};
use credence::resources::ResourceCatalog;
use credence::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// JSON request bodies are capped at 2 MiB; the media route raises its own
/// limit for file payloads.
const MAX_JSON_BODY_BYTES: usize = 2 * 1024 * 1024;

fn resolve_config(args: ServeArgs) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    Ok(config)
}

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let config = resolve_config(args)?;
    telemetry::init(&config.telemetry)?;

    let (metrics_layer, metrics_handle) = PrometheusMetricLayer::pair();
    let readiness = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: Arc::clone(&readiness),
        metrics: Arc::new(metrics_handle),
    };

    tokio::fs::create_dir_all(&config.storage.upload_dir).await?;
    let resources = Arc::new(ResourceCatalog::load_or_empty(
        &config.storage.resources_path,
    ));

    let engine = Arc::new(AssessmentEngine::new(SignalCatalog::standard()));
    let ledger = Arc::new(ReportLedger::new(Arc::new(InMemoryReportStore::default())));
    let media = MediaState {
        engine: Arc::clone(&engine),
        upload_dir: config.storage.upload_dir.clone(),
    };

    let app = with_service_routes(engine, ledger, media)
        .layer(Extension(app_state))
        .layer(Extension(resources))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(MAX_JSON_BODY_BYTES))
        .layer(metrics_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);

    info!(?config.environment, %addr, "credence assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
