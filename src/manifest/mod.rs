//! Route manifest data model.
//!
//! The upstream route-collection step scans the app's routes directory once
//! per build and produces a [`ManifestData`]. It reaches this crate either
//! in-process or serialized as JSON across the driver boundary.
//!
//! Patterns are opaque pre-compiled matchable text (the source of a regex
//! literal); this crate compares them by string equality and never
//! interprets them. Validation of the manifest itself (parameter counts
//! against capture groups, component existence on disk) belongs to the
//! upstream collaborators.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker prefix for variadic ("rest") route parameters.
pub const REST_MARKER: &str = "...";

/// Errors raised while loading a serialized route manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Manifest parsing error")]
    Parse(#[from] serde_json::Error),
}

/// Static description of an app's routes, produced once per build.
///
/// Immutable for the duration of manifest compilation; every derived
/// artifact is recomputed from scratch on each invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestData {
    /// Flat, ordered component references. First-seen order here fixes
    /// the component table indices.
    pub components: Vec<String>,

    /// Ordered page routes.
    pub pages: Vec<Page>,

    /// Ordered server endpoints.
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,

    /// Root layout component, conceptually table index 0.
    pub layout: String,

    /// Component rendered when an error state is active.
    pub error: String,
}

/// A page route: its pattern, declared parameters and component chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Opaque matchable text; its string form is the dedup key against
    /// endpoint patterns.
    pub pattern: String,

    /// Parameter names in capture-group order. A `...` prefix marks a
    /// variadic segment.
    #[serde(default)]
    pub params: Vec<String>,

    /// Component chain, outermost (layout) first, leaf last. `None` or
    /// `""` marks a depth with no component for this page.
    pub parts: Vec<Option<String>>,
}

/// A server endpoint route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    pub pattern: String,
}

impl Page {
    /// Non-empty parts in order, skipping empty slots.
    pub fn truthy_parts(&self) -> impl Iterator<Item = &str> {
        self.parts
            .iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
    }

    /// The leaf component (innermost non-empty part), if any.
    pub fn leaf(&self) -> Option<&str> {
        self.truthy_parts().last()
    }
}

impl ManifestData {
    /// Parse a manifest serialized by the route-collection step.
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn from_json_file(path: &Path) -> Result<Self, ManifestError> {
        let raw =
            fs::read_to_string(path).map_err(|e| ManifestError::Io(path.to_path_buf(), e))?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_json() -> &'static str {
        r#"{
            "components": ["src/routes/$layout.svelte", "src/routes/index.svelte"],
            "pages": [
                {
                    "pattern": "/^\\/$/",
                    "parts": ["src/routes/$layout.svelte", "src/routes/index.svelte"]
                }
            ],
            "endpoints": [{ "pattern": "/^\\/api\\/data$/" }],
            "layout": "src/routes/$layout.svelte",
            "error": "src/routes/$error.svelte"
        }"#
    }

    #[test]
    fn test_manifest_from_json() {
        let data = ManifestData::from_json_str(sample_json()).unwrap();

        assert_eq!(data.components.len(), 2);
        assert_eq!(data.pages.len(), 1);
        assert_eq!(data.endpoints.len(), 1);
        assert_eq!(data.layout, "src/routes/$layout.svelte");
        // params defaults to empty when omitted
        assert!(data.pages[0].params.is_empty());
    }

    #[test]
    fn test_manifest_roundtrip() {
        let data = ManifestData::from_json_str(sample_json()).unwrap();
        let json = serde_json::to_string(&data).unwrap();
        let again = ManifestData::from_json_str(&json).unwrap();

        assert_eq!(again.components, data.components);
        assert_eq!(again.pages[0].pattern, data.pages[0].pattern);
    }

    #[test]
    fn test_manifest_parse_error() {
        let err = ManifestData::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn test_manifest_io_error_names_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("manifest.json");

        let err = ManifestData::from_json_file(&missing).unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("manifest.json"));
    }

    #[test]
    fn test_truthy_parts_skip_empty_slots() {
        let page = Page {
            pattern: "/^\\/deep$/".to_string(),
            params: vec![],
            parts: vec![
                Some("layout.svelte".to_string()),
                None,
                Some(String::new()),
                Some("leaf.svelte".to_string()),
            ],
        };

        let truthy: Vec<_> = page.truthy_parts().collect();
        assert_eq!(truthy, vec!["layout.svelte", "leaf.svelte"]);
        assert_eq!(page.leaf(), Some("leaf.svelte"));
    }

    #[test]
    fn test_leaf_of_empty_parts() {
        let page = Page {
            pattern: String::new(),
            params: vec![],
            parts: vec![None],
        };
        assert_eq!(page.leaf(), None);
    }
}
