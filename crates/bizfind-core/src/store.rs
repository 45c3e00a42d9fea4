//! Holder for the most recent result set.

use crate::business::Business;

/// The current result set, replaced wholesale on every completed search.
///
/// Writers go through [`ResultStore::replace`] and [`ResultStore::clear`];
/// the results view and the exporter only borrow [`ResultStore::results`],
/// so they never observe a half-written set.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: Vec<Business>,
}

impl ResultStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored set. Previous results are dropped, never merged.
    pub fn replace(&mut self, results: Vec<Business>) {
        self.results = results;
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    #[must_use]
    pub fn results(&self) -> &[Business] {
        &self.results
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Export is only offered when there is at least one result.
    #[must_use]
    pub fn is_exportable(&self) -> bool {
        !self.results.is_empty()
    }
}
