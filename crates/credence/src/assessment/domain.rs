use serde::{Deserialize, Serialize};

/// A single piece of weighted evidence contributed by a detector rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub label: String,
    pub weight: f64,
}

/// Discretization of the numeric score exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
        }
    }
}

/// Complete output of one assessment. Signals keep catalog declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub risk: RiskBand,
    pub score: f64,
    pub signals: Vec<Signal>,
    pub recommendations: Vec<String>,
}

/// Selects which URL weight column applies to an assessment.
///
/// A URL scored alongside text shares the evidential load, so its rules carry
/// lower weights than when the URL is the sole evidence source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMode {
    Combined,
    LinkOnly,
}

/// What the boundary captured about an accepted upload. The engine only cares
/// that a file arrived; the metadata is echoed back in the media response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpload {
    pub filename: String,
    pub size_bytes: u64,
    pub declared_type: Option<String>,
}

/// Input variants accepted by the assessment engine.
#[derive(Debug, Clone)]
pub enum AssessmentRequest {
    /// Free text and/or a URL, scored with the combined weight table.
    Content {
        text: Option<String>,
        url: Option<String>,
    },
    /// A URL as the sole evidence, scored with the link-only weight table.
    Link { url: Option<String> },
    /// An uploaded media file, scored by the placeholder media rule set.
    Media { upload: Option<MediaUpload> },
}
