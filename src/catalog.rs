//! Gallery catalog
//!
//! The static, ordered set of works available for filtering. Loaded once at
//! startup from the embedded defaults or a user catalog file, then never
//! mutated.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

// Embedded default catalog, used when no user catalog exists
const DEFAULT_CATALOG: &str = include_str!("../defaults/catalog.toml");

/// The synthetic category that selects the whole catalog.
pub const ALL_CATEGORY: &str = "All";

/// One curated work. Immutable after load; `id` is treated as unique.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    pub category: String,
    pub title: String,
    /// Opaque resource locator; the rendering layer substitutes a fixed
    /// placeholder when it does not resolve.
    pub image: String,
}

/// Ordered collection of gallery items.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<GalleryItem>,
}

impl Catalog {
    /// Parse a catalog from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse catalog TOML")
    }

    /// The compiled-in default catalog.
    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_CATALOG).context("Embedded default catalog is invalid")
    }

    /// Load a catalog file, or fall back to the embedded default.
    ///
    /// An explicit `path` must parse; failures there are surfaced. With no
    /// explicit path, an unreadable or invalid user catalog degrades to the
    /// embedded default with a logged warning.
    pub fn load(explicit: Option<&Path>, user_path: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file {:?}", path))?;
            return Self::parse(&text)
                .with_context(|| format!("Failed to parse catalog file {:?}", path));
        }

        if user_path.exists() {
            match fs::read_to_string(user_path)
                .map_err(anyhow::Error::from)
                .and_then(|text| Self::parse(&text))
            {
                Ok(catalog) => return Ok(catalog),
                Err(e) => {
                    tracing::warn!(
                        path = ?user_path,
                        error = %e,
                        "User catalog unusable, falling back to embedded default"
                    );
                }
            }
        }

        Self::embedded()
    }

    /// Look up an item by id.
    pub fn get(&self, id: u32) -> Option<&GalleryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Derived category set: "All" first, then distinct categories in
    /// first-seen catalog order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Structural problems for the `validate-catalog` subcommand.
    ///
    /// Returns human-readable findings; an empty list means the catalog is
    /// clean.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen_ids = Vec::new();

        for item in &self.items {
            if seen_ids.contains(&item.id) {
                problems.push(format!("Duplicate item id {}", item.id));
            } else {
                seen_ids.push(item.id);
            }
            if item.category.trim().is_empty() {
                problems.push(format!("Item {} has an empty category", item.id));
            }
            if item.category == ALL_CATEGORY {
                problems.push(format!(
                    "Item {} uses the reserved category name \"{}\"",
                    item.id, ALL_CATEGORY
                ));
            }
            if item.title.trim().is_empty() {
                problems.push(format!("Item {} has an empty title", item.id));
            }
        }

        if self.items.is_empty() {
            problems.push("Catalog has no items".to_string());
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog {
            items: vec![
                GalleryItem {
                    id: 1,
                    category: "Logo".to_string(),
                    title: "Tech Start-Up".to_string(),
                    image: "ref-1".to_string(),
                },
                GalleryItem {
                    id: 2,
                    category: "Poster".to_string(),
                    title: "Music Festival".to_string(),
                    image: "ref-2".to_string(),
                },
                GalleryItem {
                    id: 3,
                    category: "Logo".to_string(),
                    title: "Coffee Brand".to_string(),
                    image: "ref-3".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.items.is_empty());
        assert!(catalog.validate().is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let categories = sample().categories();
        assert_eq!(categories, vec!["All", "Logo", "Poster"]);
    }

    #[test]
    fn test_embedded_categories_start_with_all() {
        let catalog = Catalog::embedded().unwrap();
        let categories = catalog.categories();
        assert_eq!(categories[0], ALL_CATEGORY);
        // Distinct: no category listed twice
        for (i, cat) in categories.iter().enumerate() {
            assert!(!categories[i + 1..].contains(cat));
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample();
        assert_eq!(catalog.get(2).unwrap().title, "Music Festival");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_validate_reports_duplicates_and_blanks() {
        let mut catalog = sample();
        catalog.items.push(GalleryItem {
            id: 1,
            category: String::new(),
            title: " ".to_string(),
            image: String::new(),
        });
        let problems = catalog.validate();
        assert!(problems.iter().any(|p| p.contains("Duplicate item id 1")));
        assert!(problems.iter().any(|p| p.contains("empty category")));
        assert!(problems.iter().any(|p| p.contains("empty title")));
    }

    #[test]
    fn test_validate_rejects_reserved_category() {
        let mut catalog = sample();
        catalog.items.push(GalleryItem {
            id: 4,
            category: ALL_CATEGORY.to_string(),
            title: "Meta".to_string(),
            image: String::new(),
        });
        assert!(catalog
            .validate()
            .iter()
            .any(|p| p.contains("reserved category")));
    }
}
