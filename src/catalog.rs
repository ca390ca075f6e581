//! The fixed category catalog: the named sections a prompt can be built from.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// One catalog entry. Ids are unique within a catalog and stable for the
/// lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

impl Category {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Immutable catalog of prompt categories, fixed at startup.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    entries: Vec<Category>,
}

impl CategoryCatalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(entries: Vec<Category>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.id == entry.id) {
                bail!("duplicate category id in catalog: {}", entry.id);
            }
        }
        Ok(Self { entries })
    }

    /// The standard prompt sections shipped with the application.
    pub fn default_catalog() -> Self {
        Self {
            entries: vec![
                Category::new("role", "Role"),
                Category::new("context", "Context"),
                Category::new("objective", "Objective"),
                Category::new("instructions", "Instructions"),
                Category::new("examples", "Examples"),
                Category::new("constraints", "Constraints"),
                Category::new("output_format", "Output Format"),
                Category::new("tone", "Tone"),
            ],
        }
    }

    pub fn entries(&self) -> &[Category] {
        &self.entries
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Looks up the display label for a category id.
    pub fn label_for(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.label.as_str())
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_unique_ids() {
        let catalog = CategoryCatalog::default_catalog();
        let entries = catalog.entries();
        for (i, entry) in entries.iter().enumerate() {
            assert!(!entries[..i].iter().any(|e| e.id == entry.id));
        }
    }

    #[test]
    fn test_label_lookup() {
        let catalog = CategoryCatalog::default_catalog();
        assert_eq!(catalog.label_for("role"), Some("Role"));
        assert_eq!(catalog.label_for("output_format"), Some("Output Format"));
        assert_eq!(catalog.label_for("nonexistent"), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = CategoryCatalog::new(vec![
            Category::new("role", "Role"),
            Category::new("role", "Also Role"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = CategoryCatalog::new(vec![
            Category::new("persona", "Persona"),
            Category::new("task", "Task"),
        ])
        .unwrap();
        assert!(catalog.contains("persona"));
        assert!(!catalog.contains("role"));
    }
}
