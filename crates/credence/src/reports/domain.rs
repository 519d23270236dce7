use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub String);

/// Reader-submitted tip about suspect content. Every field is optional so the
/// public form stays low-friction; contact details are only kept for follow-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSubmission {
    pub text: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub contact: Option<String>,
}

/// Ledger entry for a received report. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
}

/// Lifecycle status of a stored report. Intake always records `Received`;
/// later states belong to a moderation workflow outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Received,
}

impl ReportStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ReportStatus::Received => "received",
        }
    }
}

/// Wire shape for listing the full report history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportListing {
    pub count: usize,
    pub reports: Vec<Report>,
}
