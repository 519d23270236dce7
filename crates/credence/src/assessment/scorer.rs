use super::domain::{RiskBand, Signal};

/// Round to two decimal places, halves away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum of signal weights, rounded. No clamping: enough signals may push the
/// total past 1.0 and that is reported as-is.
pub(crate) fn total(signals: &[Signal]) -> f64 {
    round2(signals.iter().map(|signal| signal.weight).sum())
}

/// Band boundaries belong to the higher band.
pub fn classify(score: f64) -> RiskBand {
    if score >= 0.6 {
        RiskBand::High
    } else if score >= 0.3 {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}
