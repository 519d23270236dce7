use url::Url;

use super::domain::{DetectionMode, Signal};

const CLICKBAIT_PHRASES: [&str; 4] = ["shocking", "secret", "exposed", "you won't believe"];
const VIRALITY_PHRASES: [&str; 2] = ["forward this", "share now"];
const UNVERIFIED_HOST_MARKERS: [&str; 3] = [".blogspot", ".wordpress", "medium.com"];
const AUTHORITY_SUFFIXES: [&str; 4] = [".gov", ".edu", ".org", ".in"];

/// Case-normalized view of submitted text shared by the text predicates.
pub(crate) struct TextSample {
    char_count: usize,
    lowered: String,
}

impl TextSample {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            char_count: text.chars().count(),
            lowered: text.to_lowercase(),
        }
    }

    fn exclamation_count(&self) -> usize {
        self.lowered.matches('!').count()
    }

    fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|phrase| self.lowered.contains(phrase))
    }

    /// True when some word of >= 3 letters is immediately followed by another.
    fn has_substantive_word_pair(&self) -> bool {
        let mut previous = false;
        for word in self.lowered.split_whitespace() {
            let substantive = word.chars().filter(|c| c.is_alphabetic()).count() >= 3;
            if previous && substantive {
                return true;
            }
            previous = substantive;
        }
        false
    }
}

/// What could be learned from parsing a submitted URL.
pub(crate) enum UrlInspection {
    Unparseable,
    /// Lowercased host; empty when the URL parses but carries no host.
    Host(String),
}

impl UrlInspection {
    pub(crate) fn of(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(parsed) => Self::Host(
                parsed
                    .host_str()
                    .map(|host| host.to_ascii_lowercase())
                    .unwrap_or_default(),
            ),
            Err(_) => Self::Unparseable,
        }
    }
}

fn short_claim(sample: &TextSample) -> bool {
    sample.char_count < 30
}

fn sensational_punctuation(sample: &TextSample) -> bool {
    sample.exclamation_count() >= 3
}

fn clickbait_phrasing(sample: &TextSample) -> bool {
    sample.contains_any(&CLICKBAIT_PHRASES)
}

fn low_linguistic_richness(sample: &TextSample) -> bool {
    !sample.has_substantive_word_pair()
}

fn virality_nudge(sample: &TextSample) -> bool {
    sample.contains_any(&VIRALITY_PHRASES)
}

fn malformed_url(inspection: &UrlInspection) -> bool {
    matches!(inspection, UrlInspection::Unparseable)
}

fn unverified_host(inspection: &UrlInspection) -> bool {
    match inspection {
        UrlInspection::Host(host) => UNVERIFIED_HOST_MARKERS
            .iter()
            .any(|marker| host.contains(marker)),
        UrlInspection::Unparseable => false,
    }
}

fn outside_authority_domains(inspection: &UrlInspection) -> bool {
    match inspection {
        UrlInspection::Host(host) => !AUTHORITY_SUFFIXES
            .iter()
            .any(|suffix| host.ends_with(suffix)),
        UrlInspection::Unparseable => false,
    }
}

/// A text detector: fires at most one signal with a single fixed weight.
pub(crate) struct TextRule {
    pub(crate) label: &'static str,
    pub(crate) weight: f64,
    trigger: fn(&TextSample) -> bool,
}

/// Weight pair for a URL rule, selected by detection mode.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModeWeights {
    pub(crate) combined: f64,
    pub(crate) link_only: f64,
}

impl ModeWeights {
    pub(crate) const fn for_mode(self, mode: DetectionMode) -> f64 {
        match mode {
            DetectionMode::Combined => self.combined,
            DetectionMode::LinkOnly => self.link_only,
        }
    }
}

/// A URL detector: one predicate, two mode-dependent weights.
pub(crate) struct UrlRule {
    pub(crate) label: &'static str,
    pub(crate) weights: ModeWeights,
    trigger: fn(&UrlInspection) -> bool,
}

/// Placeholder media detector: fires unconditionally on any accepted upload.
pub(crate) struct MediaRule {
    pub(crate) label: &'static str,
    pub(crate) weight: f64,
}

/// The fixed, ordered detector rules behind every assessment.
///
/// Rules are declared as data so each predicate can be tested on its own and
/// new rules slot in without touching the scorer. Declaration order is the
/// order signals appear in a verdict.
pub struct SignalCatalog {
    text_rules: Vec<TextRule>,
    url_rules: Vec<UrlRule>,
    media_rules: Vec<MediaRule>,
}

impl SignalCatalog {
    /// The detector set shipped with the service.
    pub fn standard() -> Self {
        Self {
            text_rules: vec![
                TextRule {
                    label: "Very short claim",
                    weight: 0.15,
                    trigger: short_claim,
                },
                TextRule {
                    label: "Sensational punctuation",
                    weight: 0.20,
                    trigger: sensational_punctuation,
                },
                TextRule {
                    label: "Clickbait phrasing",
                    weight: 0.25,
                    trigger: clickbait_phrasing,
                },
                TextRule {
                    label: "Low linguistic richness",
                    weight: 0.10,
                    trigger: low_linguistic_richness,
                },
                TextRule {
                    label: "Virality nudge",
                    weight: 0.20,
                    trigger: virality_nudge,
                },
            ],
            url_rules: vec![
                UrlRule {
                    label: "Malformed URL",
                    weights: ModeWeights {
                        combined: 0.20,
                        link_only: 0.30,
                    },
                    trigger: malformed_url,
                },
                UrlRule {
                    label: "Unverified host",
                    weights: ModeWeights {
                        combined: 0.10,
                        link_only: 0.15,
                    },
                    trigger: unverified_host,
                },
                UrlRule {
                    label: "Not an authority domain",
                    weights: ModeWeights {
                        combined: 0.10,
                        link_only: 0.15,
                    },
                    trigger: outside_authority_domains,
                },
            ],
            media_rules: vec![
                MediaRule {
                    label: "Unknown provenance",
                    weight: 0.20,
                },
                MediaRule {
                    label: "No embedded metadata check",
                    weight: 0.25,
                },
            ],
        }
    }

    pub(crate) fn text_signals(&self, text: &str) -> Vec<Signal> {
        let sample = TextSample::new(text);
        self.text_rules
            .iter()
            .filter(|rule| (rule.trigger)(&sample))
            .map(|rule| Signal {
                label: rule.label.to_string(),
                weight: rule.weight,
            })
            .collect()
    }

    pub(crate) fn url_signals(&self, url: &str, mode: DetectionMode) -> Vec<Signal> {
        let inspection = UrlInspection::of(url);
        self.url_rules
            .iter()
            .filter(|rule| (rule.trigger)(&inspection))
            .map(|rule| Signal {
                label: rule.label.to_string(),
                weight: rule.weights.for_mode(mode),
            })
            .collect()
    }

    pub(crate) fn media_signals(&self) -> Vec<Signal> {
        self.media_rules
            .iter()
            .map(|rule| Signal {
                label: rule.label.to_string(),
                weight: rule.weight,
            })
            .collect()
    }
}
