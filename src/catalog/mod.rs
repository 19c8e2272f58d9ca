//! Pattern catalog.
//!
//! An immutable, ordered collection of [`PatternEntry`] records with an id
//! index. The store is built once and never mutated.

mod data;

use crate::domain::{CatalogError, Category, PatternEntry};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct CatalogStore {
    entries: &'static [PatternEntry],
    /// Index: pattern id -> position in `entries`
    id_to_index: HashMap<&'static str, usize>,
}

static BUILTIN: OnceLock<CatalogStore> = OnceLock::new();

impl CatalogStore {
    /// The built-in GoF catalog.
    pub fn builtin() -> &'static CatalogStore {
        // The static dataset is checked by `test_builtin_catalog_is_valid`.
        BUILTIN.get_or_init(|| {
            Self::from_entries(data::PATTERNS).expect("built-in pattern catalog is valid")
        })
    }

    /// Builds a store over `entries`, rejecting an empty list or duplicate ids.
    pub fn from_entries(entries: &'static [PatternEntry]) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut id_to_index = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if id_to_index.insert(entry.id, idx).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.to_string()));
            }
        }

        Ok(Self {
            entries,
            id_to_index,
        })
    }

    /// All entries in catalog order.
    pub fn get_all(&self) -> &'static [PatternEntry] {
        self.entries
    }

    /// Looks up `id`, falling back to the first entry when it is unknown.
    pub fn get_by_id(&self, id: &str) -> &'static PatternEntry {
        self.find(id).unwrap_or_else(|| {
            log::debug!("Unknown pattern id {id:?}, falling back to first entry");
            self.first()
        })
    }

    pub fn find(&self, id: &str) -> Option<&'static PatternEntry> {
        self.id_to_index.get(id).map(|&idx| &self.entries[idx])
    }

    pub fn first(&self) -> &'static PatternEntry {
        // `from_entries` guarantees at least one entry.
        &self.entries[0]
    }

    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &'static PatternEntry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoleDefinition;

    static DUPLICATED: &[PatternEntry] = &[
        PatternEntry {
            id: "a",
            title: "A",
            category: Category::Creational,
            description: "",
            diagram_source: "classDiagram\nclass A",
            roles: &[],
        },
        PatternEntry {
            id: "a",
            title: "A again",
            category: Category::Structural,
            description: "",
            diagram_source: "classDiagram\nclass B",
            roles: &[RoleDefinition::new("B", "B", "")],
        },
    ];

    #[test]
    fn test_builtin_catalog_is_valid() {
        let store = CatalogStore::from_entries(data::PATTERNS).expect("valid catalog");
        assert_eq!(store.len(), 23);
        assert!(
            store
                .get_all()
                .iter()
                .all(|p| p.diagram_source.starts_with("classDiagram") && !p.roles.is_empty())
        );
    }

    #[test]
    fn test_catalog_category_counts() {
        let store = CatalogStore::builtin();
        assert_eq!(store.by_category(Category::Creational).count(), 5);
        assert_eq!(store.by_category(Category::Structural).count(), 7);
        assert_eq!(store.by_category(Category::Behavioral).count(), 11);
    }

    #[test]
    fn test_get_by_id_returns_matching_entry() {
        let store = CatalogStore::builtin();
        let entry = store.get_by_id("observer");
        assert_eq!(entry.id, "observer");
        assert_eq!(entry.category, Category::Behavioral);
    }

    #[test]
    fn test_get_by_id_falls_back_to_first_entry() {
        let store = CatalogStore::builtin();
        for id in ["", "Singleton", "no-such-pattern", "observer "] {
            assert_eq!(store.get_by_id(id).id, "singleton", "id {id:?}");
        }
        assert!(store.find("no-such-pattern").is_none());
    }

    #[test]
    fn test_get_all_is_restartable_and_ordered() {
        let store = CatalogStore::builtin();
        let first: Vec<_> = store.get_all().iter().map(|p| p.id).collect();
        let second: Vec<_> = store.get_all().iter().map(|p| p.id).collect();
        assert_eq!(first, second);
        assert_eq!(first.first(), Some(&"singleton"));
        assert_eq!(first.last(), Some(&"visitor"));
    }

    #[test]
    fn test_role_order_is_preserved() {
        let entry = CatalogStore::builtin().get_by_id("factory-method");
        let mapped: Vec<_> = entry.roles.iter().map(|r| r.mapped_entity).collect();
        assert_eq!(
            mapped,
            ["Product", "ConcreteProduct", "Creator", "ConcreteCreator"]
        );
    }

    #[test]
    fn test_from_entries_rejects_duplicates_and_empty() {
        assert!(matches!(
            CatalogStore::from_entries(DUPLICATED),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
        assert!(matches!(
            CatalogStore::from_entries(&[]),
            Err(CatalogError::Empty)
        ));
    }
}
