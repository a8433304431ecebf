//! Canonical header groups and the synonym lookup built from them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::headers::ReferenceHeaders;

/// One canonical header and the alternate names that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderGroup {
    pub canonical: String,
    pub synonyms: Vec<String>,
}

impl HeaderGroup {
    pub fn new(canonical: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            canonical: canonical.into(),
            synonyms,
        }
    }
}

/// A synonym listed under more than one canonical header.
///
/// Resolution picks `winner`, the first owner in mapping order; the
/// `shadowed` headers never receive columns by this name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynonymConflict {
    pub synonym: String,
    pub winner: String,
    pub shadowed: Vec<String>,
}

/// Canonical header -> ordered synonym list, in reference order.
///
/// Immutable once built by the mapping builder. Inserting a canonical header
/// that already exists replaces its synonyms but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HeaderGroup>", into = "Vec<HeaderGroup>")]
pub struct HeaderMapping {
    groups: Vec<HeaderGroup>,
    positions: HashMap<String, usize>,
    /// Synonym -> index of the first group listing it.
    synonym_owners: HashMap<String, usize>,
}

impl HeaderMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a canonical header with its synonyms.
    ///
    /// Returns the replaced synonym list when `canonical` was already present.
    pub fn insert(&mut self, canonical: String, synonyms: Vec<String>) -> Option<Vec<String>> {
        if let Some(&idx) = self.positions.get(&canonical) {
            let previous = std::mem::replace(&mut self.groups[idx].synonyms, synonyms);
            self.rebuild_synonym_index();
            return Some(previous);
        }

        let idx = self.groups.len();
        for synonym in &synonyms {
            self.synonym_owners.entry(synonym.clone()).or_insert(idx);
        }
        self.positions.insert(canonical.clone(), idx);
        self.groups.push(HeaderGroup::new(canonical, synonyms));
        None
    }

    /// Returns the stored canonical header equal to `name`, if any.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&idx| self.groups[idx].canonical.as_str())
    }

    /// Returns the first canonical header (in mapping order) listing `name`
    /// as a synonym.
    pub fn synonym_owner(&self, name: &str) -> Option<&str> {
        self.synonym_owners
            .get(name)
            .map(|&idx| self.groups[idx].canonical.as_str())
    }

    pub fn synonyms(&self, canonical: &str) -> Option<&[String]> {
        self.positions
            .get(canonical)
            .map(|&idx| self.groups[idx].synonyms.as_slice())
    }

    pub fn groups(&self) -> &[HeaderGroup] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Canonical headers in mapping order.
    pub fn reference_headers(&self) -> ReferenceHeaders {
        ReferenceHeaders::new(self.groups.iter().map(|g| g.canonical.clone()).collect())
    }

    /// Total number of synonym entries across all groups.
    pub fn synonym_count(&self) -> usize {
        self.groups.iter().map(|g| g.synonyms.len()).sum()
    }

    /// Synonyms claimed by more than one canonical header, in first-seen order.
    pub fn synonym_conflicts(&self) -> Vec<SynonymConflict> {
        let mut order: Vec<&str> = Vec::new();
        let mut owners: HashMap<&str, Vec<&str>> = HashMap::new();
        for group in &self.groups {
            for synonym in &group.synonyms {
                let entry = owners.entry(synonym.as_str()).or_insert_with(|| {
                    order.push(synonym.as_str());
                    Vec::new()
                });
                if !entry.contains(&group.canonical.as_str()) {
                    entry.push(group.canonical.as_str());
                }
            }
        }

        order
            .into_iter()
            .filter_map(|synonym| {
                let claimed = owners.get(synonym)?;
                let (winner, shadowed) = claimed.split_first()?;
                if shadowed.is_empty() {
                    return None;
                }
                Some(SynonymConflict {
                    synonym: synonym.to_string(),
                    winner: (*winner).to_string(),
                    shadowed: shadowed.iter().map(|s| (*s).to_string()).collect(),
                })
            })
            .collect()
    }

    fn rebuild_synonym_index(&mut self) {
        self.synonym_owners.clear();
        for (idx, group) in self.groups.iter().enumerate() {
            for synonym in &group.synonyms {
                self.synonym_owners.entry(synonym.clone()).or_insert(idx);
            }
        }
    }
}

impl From<Vec<HeaderGroup>> for HeaderMapping {
    fn from(groups: Vec<HeaderGroup>) -> Self {
        let mut mapping = Self::new();
        for group in groups {
            mapping.insert(group.canonical, group.synonyms);
        }
        mapping
    }
}

impl From<HeaderMapping> for Vec<HeaderGroup> {
    fn from(mapping: HeaderMapping) -> Self {
        mapping.groups
    }
}

impl<'a> IntoIterator for &'a HeaderMapping {
    type Item = &'a HeaderGroup;
    type IntoIter = std::slice::Iter<'a, HeaderGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
