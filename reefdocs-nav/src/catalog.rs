//! Embedded documentation section catalog.
//!
//! The catalog drives both the sidebar table of contents and the rendered
//! content sections, so every sidebar entry's `data-target` matches a
//! section id by construction.

use serde::{Deserialize, Serialize};

const DEFAULT_SECTIONS_DATA: &str =
    include_str!("../../reefdocs-web/static/assets/data/sections.json");

/// One documentation section: a sidebar entry plus a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SectionMeta {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
}

/// Ordered catalog of the documentation page's sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SectionCatalog {
    #[serde(default)]
    pub sections: Vec<SectionMeta>,
}

impl SectionCatalog {
    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_SECTIONS_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn last_id(&self) -> Option<&str> {
        self.sections.last().map(|section| section.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_body_defaults_to_empty() {
        let catalog = SectionCatalog::from_json(
            r#"{"sections":[{"id":"intro","title":"Introduction"}]}"#,
        )
        .expect("minimal catalog should parse");
        assert_eq!(catalog.sections[0].body.len(), 0);
        assert_eq!(catalog.last_id(), Some("intro"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SectionCatalog::from_json("{]").is_err());
    }
}
