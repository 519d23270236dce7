//! Risk assessment: turns submitted text, URLs, or upload metadata into a
//! deterministic, explainable verdict.

mod catalog;
mod recommendations;
mod scorer;

pub mod domain;
pub mod router;

#[cfg(test)]
mod tests;

pub use catalog::SignalCatalog;
pub use domain::{AssessmentRequest, DetectionMode, MediaUpload, RiskBand, Signal, Verdict};
pub use router::assessment_router;
pub use scorer::classify;

/// Raised when a request variant is missing its required input. The message
/// is the user-visible error body, surfaced verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please provide a URL in the request body as `url`")]
    MissingUrl,
    #[error("No file uploaded")]
    MissingUpload,
}

/// Stateless evaluator applying the signal catalog to incoming requests.
pub struct AssessmentEngine {
    catalog: SignalCatalog,
}

impl AssessmentEngine {
    pub fn new(catalog: SignalCatalog) -> Self {
        Self { catalog }
    }

    /// Assess one request. Pure: no logging, persistence, or shared state.
    pub fn assess(&self, request: AssessmentRequest) -> Result<Verdict, ValidationError> {
        match request {
            AssessmentRequest::Content { text, url } => {
                let mut signals = Vec::new();
                if let Some(text) = text.as_deref() {
                    signals.extend(self.catalog.text_signals(text));
                }
                if let Some(url) = url.as_deref() {
                    signals.extend(self.catalog.url_signals(url, DetectionMode::Combined));
                }
                Ok(verdict(signals, recommendations::content_advisory()))
            }
            AssessmentRequest::Link { url } => {
                let url = url.ok_or(ValidationError::MissingUrl)?;
                let signals = self.catalog.url_signals(&url, DetectionMode::LinkOnly);
                Ok(verdict(signals, recommendations::content_advisory()))
            }
            AssessmentRequest::Media { upload } => {
                upload.ok_or(ValidationError::MissingUpload)?;
                Ok(verdict(
                    self.catalog.media_signals(),
                    recommendations::media_advisory(),
                ))
            }
        }
    }
}

fn verdict(signals: Vec<Signal>, recommendations: Vec<String>) -> Verdict {
    let score = scorer::total(&signals);
    Verdict {
        risk: scorer::classify(score),
        score,
        signals,
        recommendations,
    }
}
