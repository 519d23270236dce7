use credence::assessment::AssessmentEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// State shared by the media assessment route: the engine plus the directory
/// where received uploads are parked.
#[derive(Clone)]
pub(crate) struct MediaState {
    pub(crate) engine: Arc<AssessmentEngine>,
    pub(crate) upload_dir: PathBuf,
}

static UPLOAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Disk name for a received upload: a unique prefix plus the sanitized
/// client-supplied name, so concurrent uploads of `photo.jpg` never collide.
pub(crate) fn stored_upload_name(original: &str) -> String {
    let id = UPLOAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("upload-{id:06}-{}", sanitize_filename(original))
}

/// Keep alphanumerics, dots, dashes, and underscores; everything else
/// (path separators included) becomes an underscore.
fn sanitize_filename(original: &str) -> String {
    let cleaned: String = original
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "upload.bin".to_string()
    } else {
        cleaned
    }
}

pub(crate) async fn persist_upload(
    dir: &Path,
    stored_name: &str,
    bytes: &[u8],
) -> std::io::Result<()> {
    tokio::fs::write(dir.join(stored_name), bytes).await
}
