//! Resume tracking via a derived id index
//!
//! There is no checkpoint file: the set of already-written interview ids is
//! rebuilt from the CSV at startup and kept in memory for the run. Ids are
//! marked only after a successful append, so the cache never claims a row the
//! store does not durably hold.

use crate::store::CsvStore;
use std::collections::HashSet;

/// In-memory set of interview ids already present in the store.
#[derive(Debug, Default)]
pub struct SeenIds {
    ids: HashSet<String>,
}

impl SeenIds {
    /// Rebuilds the index by scanning the store. A missing or malformed file
    /// yields an empty set (resume degrades to a full re-crawl).
    pub fn load(store: &CsvStore) -> Self {
        Self {
            ids: store.known_ids(),
        }
    }

    /// Empty index, used when resume is disabled.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Records an id after its row has been appended.
    pub fn mark(&mut self, id: String) {
        self.ids.insert(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
