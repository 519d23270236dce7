use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::domain::{Report, ReportId, ReportListing, ReportStatus, ReportSubmission};

/// Storage abstraction so the ledger can be exercised against test doubles.
pub trait ReportStore: Send + Sync {
    fn append(&self, report: Report);
    fn snapshot(&self) -> Vec<Report>;
}

/// Process-lifetime store backing the ledger. Entries survive until restart.
#[derive(Debug, Default)]
pub struct InMemoryReportStore {
    entries: Mutex<Vec<Report>>,
}

impl ReportStore for InMemoryReportStore {
    fn append(&self, report: Report) {
        let mut guard = self.entries.lock().expect("report store mutex poisoned");
        guard.push(report);
    }

    fn snapshot(&self) -> Vec<Report> {
        let guard = self.entries.lock().expect("report store mutex poisoned");
        guard.clone()
    }
}

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_id() -> ReportId {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReportId(format!("R-{id:06}"))
}

/// Append-only ledger owning id generation and receipt timestamps.
///
/// Submissions are stored verbatim; nothing here validates or normalizes the
/// optional fields.
pub struct ReportLedger<S> {
    store: Arc<S>,
}

impl<S> ReportLedger<S>
where
    S: ReportStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Record a submission and return the stored entry.
    pub fn submit(&self, submission: ReportSubmission) -> Report {
        let report = Report {
            id: next_report_id(),
            text: submission.text,
            url: submission.url,
            notes: submission.notes,
            contact: submission.contact,
            created_at: chrono::Utc::now(),
            status: ReportStatus::Received,
        };

        self.store.append(report.clone());
        report
    }

    /// Full history in insertion order, oldest first.
    pub fn list(&self) -> ReportListing {
        let reports = self.store.snapshot();
        ReportListing {
            count: reports.len(),
            reports,
        }
    }
}
