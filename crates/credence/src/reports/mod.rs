//! Community report intake: an append-only, process-lifetime ledger of
//! reader-submitted tips with monotonic receipt ids.

pub mod domain;
pub mod ledger;
pub mod router;

pub use domain::{Report, ReportId, ReportListing, ReportStatus, ReportSubmission};
pub use ledger::{InMemoryReportStore, ReportLedger, ReportStore};
pub use router::report_router;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn ledger() -> ReportLedger<InMemoryReportStore> {
        ReportLedger::new(Arc::new(InMemoryReportStore::default()))
    }

    #[test]
    fn submissions_are_stored_verbatim() {
        let ledger = ledger();

        let report = ledger.submit(ReportSubmission {
            text: Some("Chain message about a miracle cure".to_string()),
            url: None,
            notes: Some("seen in three family groups".to_string()),
            contact: None,
        });

        assert_eq!(
            report.text.as_deref(),
            Some("Chain message about a miracle cure")
        );
        assert_eq!(report.url, None);
        assert_eq!(report.notes.as_deref(), Some("seen in three family groups"));
        assert_eq!(report.status, ReportStatus::Received);
        assert!(report.id.0.starts_with("R-"));
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let ledger = ledger();

        let first = ledger.submit(ReportSubmission {
            notes: Some("first".to_string()),
            ..ReportSubmission::default()
        });
        let second = ledger.submit(ReportSubmission {
            notes: Some("second".to_string()),
            ..ReportSubmission::default()
        });

        let listing = ledger.list();
        assert_eq!(listing.count, 2);
        assert_eq!(listing.reports[0].id, first.id);
        assert_eq!(listing.reports[1].id, second.id);
        assert!(listing.reports[0].created_at <= listing.reports[1].created_at);
    }

    #[test]
    fn receipt_ids_are_unique_and_monotonic() {
        let ledger = ledger();

        let earlier = ledger.submit(ReportSubmission::default());
        let later = ledger.submit(ReportSubmission::default());

        assert_ne!(earlier.id, later.id);
        assert!(earlier.id.0 < later.id.0, "{} < {}", earlier.id.0, later.id.0);
    }

    #[test]
    fn serialized_reports_use_the_wire_field_names() {
        let ledger = ledger();
        let report = ledger.submit(ReportSubmission {
            url: Some("https://example.com/story".to_string()),
            ..ReportSubmission::default()
        });

        let value = serde_json::to_value(&report).expect("serializes");
        assert!(value.get("createdAt").is_some());
        assert_eq!(value.get("status"), Some(&serde_json::json!("received")));
        assert!(value.get("text").is_none(), "absent fields are omitted");
    }
}
