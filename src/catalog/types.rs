//! Catalog types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single catalog row: what is known about one material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The subject the material belongs to (e.g. "Math").
    pub subject: String,
    /// The size of one lap of the material (page or item count).
    pub capacity: u32,
    /// Display label for positions within the material (e.g. "p.", "No.").
    pub unit_label: String,
}

/// The material catalog, keyed by material name.
///
/// # Example
///
/// ```
/// use studyplan_engine::catalog::{BookCatalog, CatalogEntry};
///
/// let mut catalog = BookCatalog::default();
/// catalog.insert(
///     "Blue Chart Algebra".to_string(),
///     CatalogEntry {
///         subject: "Math".to_string(),
///         capacity: 320,
///         unit_label: "p.".to_string(),
///     },
/// );
///
/// let entry = catalog.get("Blue Chart Algebra").unwrap();
/// assert_eq!(entry.capacity, 320);
/// assert!(catalog.get("unknown").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl BookCatalog {
    /// Adds or replaces a catalog entry.
    pub fn insert(&mut self, name: String, entry: CatalogEntry) {
        self.entries.insert(name, entry);
    }

    /// Looks up a material by name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Returns the number of known materials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the known material names, sorted for stable display.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(subject: &str, capacity: u32, unit: &str) -> CatalogEntry {
        CatalogEntry {
            subject: subject.to_string(),
            capacity,
            unit_label: unit.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalog = BookCatalog::default();
        catalog.insert("Target 1900 Vocabulary".to_string(), entry("English", 1900, "No."));

        let found = catalog.get("Target 1900 Vocabulary").unwrap();
        assert_eq!(found.subject, "English");
        assert_eq!(found.capacity, 1900);
        assert_eq!(found.unit_label, "No.");
    }

    #[test]
    fn test_get_unknown_returns_none() {
        let catalog = BookCatalog::default();
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_names_are_sorted() {
        let mut catalog = BookCatalog::default();
        catalog.insert("Zeta Drills".to_string(), entry("Math", 80, "p."));
        catalog.insert("Alpha Primer".to_string(), entry("Math", 120, "p."));

        assert_eq!(catalog.names(), vec!["Alpha Primer", "Zeta Drills"]);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut catalog = BookCatalog::default();
        assert!(catalog.is_empty());
        catalog.insert("Alpha Primer".to_string(), entry("Math", 120, "p."));
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }
}
