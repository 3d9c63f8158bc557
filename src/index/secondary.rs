use std::collections::BTreeMap;
use crate::core::types::MovieId;

/// Name -> movie ids posting lists for one facet (actors, directors or genres).
///
/// Names are kept exactly as displayed; each posting list is in the order the
/// movies were discovered and never holds the same id twice.
#[derive(Debug, Default)]
pub struct SecondaryIndex {
    postings: BTreeMap<String, Vec<MovieId>>,
}

impl SecondaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, id: &MovieId) {
        let ids = self.postings.entry(name.to_string()).or_default();
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    }

    /// Drops `id` from the posting list of `name`, and the name itself once no
    /// movie references it anymore.
    pub fn remove(&mut self, name: &str, id: &MovieId) {
        if let Some(ids) = self.postings.get_mut(name) {
            ids.retain(|existing| existing != id);
            if ids.is_empty() {
                self.postings.remove(name);
            }
        }
    }

    /// Swaps `old` for `new` in place, keeping its discovery position.
    pub fn rename(&mut self, name: &str, old: &MovieId, new: &MovieId) {
        if let Some(ids) = self.postings.get_mut(name) {
            for existing in ids.iter_mut() {
                if existing == old {
                    *existing = new.clone();
                }
            }
        }
    }

    pub fn get(&self, name: &str) -> &[MovieId] {
        self.postings.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.postings.contains_key(name)
    }

    /// Distinct names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
