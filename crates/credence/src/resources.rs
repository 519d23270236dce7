//! Media-literacy resource catalog served to readers alongside assessments.
//!
//! The catalog is read once at startup from a JSON file and never written by
//! the service. A missing or malformed file downgrades to an empty catalog so
//! the assessment endpoints stay available.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Curated guides and verification tools, as authored in the catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCatalog {
    pub guides: Vec<GuideResource>,
    pub tools: Vec<ToolResource>,
}

/// Long-form explainer with a short summary shown on the resource cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideResource {
    pub title: String,
    pub summary: String,
    pub link: String,
}

/// Verification tool linked directly by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResource {
    pub name: String,
    pub link: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to read resource catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid resource catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ResourceCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ResourceError> {
        let catalog = serde_json::from_reader(reader)?;
        Ok(catalog)
    }

    /// Load the catalog, trading a load failure for an empty catalog plus a
    /// warning. Startup must not hinge on the optional resource file.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(path = %path.display(), %error, "could not load resource catalog, serving an empty one");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty() && self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn parses_guides_and_tools() {
        let raw = r#"{
            "guides": [
                {
                    "title": "Spotting manipulated quotes",
                    "summary": "Trace a quote to its first publication before trusting it.",
                    "link": "https://example.org/quote-checking"
                }
            ],
            "tools": [
                { "name": "Reverse image search", "link": "https://example.org/reverse-image" }
            ]
        }"#;

        let catalog = ResourceCatalog::from_reader(Cursor::new(raw)).expect("parses");
        assert_eq!(catalog.guides.len(), 1);
        assert_eq!(catalog.guides[0].title, "Spotting manipulated quotes");
        assert_eq!(catalog.tools.len(), 1);
        assert_eq!(catalog.tools[0].name, "Reverse image search");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = ResourceCatalog::from_reader(Cursor::new("{}")).expect("parses");
        assert!(catalog.is_empty());
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = ResourceCatalog::from_path("./does-not-exist.json")
            .expect_err("missing file should error");
        assert!(matches!(error, ResourceError::Io(_)));
    }

    #[test]
    fn load_or_empty_swallows_bad_files() {
        let catalog = ResourceCatalog::load_or_empty("./does-not-exist.json");
        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = ResourceCatalog::from_reader(Cursor::new("{ guides: ["))
            .expect_err("bad json should error");
        assert!(matches!(error, ResourceError::Parse(_)));
    }
}
