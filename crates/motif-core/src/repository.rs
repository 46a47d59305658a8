//! Storage boundary for discovered motifs and properties.
//!
//! The search core only needs three lookups, so persistence is a narrow trait.
//! [`InMemoryMotifRepository`] backs tests and short-lived sessions; durable
//! engines implement the same trait.

use crate::triple::{canonicalize, FrontierEntry, Triple};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A triple observed while expanding an example, with its origin term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Motif {
    pub origin_term: String,
    pub triple: Triple,
}

impl Motif {
    pub fn from_entry(entry: FrontierEntry) -> Self {
        Self {
            origin_term: entry.origin_term,
            triple: entry.triple,
        }
    }

    fn touches(&self, canonical_term: &str) -> bool {
        self.triple.canonical_subject() == canonical_term
            || self.triple.canonical_object() == canonical_term
    }
}

impl From<FrontierEntry> for Motif {
    fn from(entry: FrontierEntry) -> Self {
        Self::from_entry(entry)
    }
}

/// A predicate known by a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub label: String,
    pub uri: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("property label must not be empty")]
    EmptyLabel,
}

pub trait MotifRepository: Send + Sync {
    /// Motifs whose subject or object canonically equals `term`.
    fn find_motifs_by_subject_or_object(&self, term: &str) -> Result<Vec<Motif>, RepositoryError>;

    fn find_property_by_label(&self, label: &str) -> Result<Option<Property>, RepositoryError>;

    /// Store a motif; returns `false` if an equal motif was already stored.
    fn save_motif(&self, motif: Motif) -> Result<bool, RepositoryError>;

    fn save_property(&self, property: Property) -> Result<(), RepositoryError>;
}

#[derive(Debug, Default)]
struct Tables {
    motifs: Vec<Motif>,
    properties: HashMap<String, Property>,
}

#[derive(Debug, Default)]
pub struct InMemoryMotifRepository {
    tables: RwLock<Tables>,
}

impl InMemoryMotifRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motif_count(&self) -> usize {
        self.tables.read().motifs.len()
    }
}

impl MotifRepository for InMemoryMotifRepository {
    fn find_motifs_by_subject_or_object(&self, term: &str) -> Result<Vec<Motif>, RepositoryError> {
        let term = canonicalize(term);
        let tables = self.tables.read();
        Ok(tables
            .motifs
            .iter()
            .filter(|m| m.touches(&term))
            .cloned()
            .collect())
    }

    fn find_property_by_label(&self, label: &str) -> Result<Option<Property>, RepositoryError> {
        Ok(self.tables.read().properties.get(label.trim()).cloned())
    }

    fn save_motif(&self, motif: Motif) -> Result<bool, RepositoryError> {
        let mut tables = self.tables.write();
        if tables.motifs.contains(&motif) {
            return Ok(false);
        }
        tables.motifs.push(motif);
        Ok(true)
    }

    fn save_property(&self, property: Property) -> Result<(), RepositoryError> {
        let label = property.label.trim().to_string();
        if label.is_empty() {
            return Err(RepositoryError::EmptyLabel);
        }
        self.tables.write().properties.insert(label, property);
        Ok(())
    }
}
