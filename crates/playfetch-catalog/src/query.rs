//! Search, filter and sort over the catalog.

use crate::types::{CatalogEntry, KindFilter, SortKey};
use serde::Serialize;

/// The user's current search inputs.
///
/// # Examples
///
/// ```
/// use playfetch_catalog::query::CatalogQuery;
/// use playfetch_catalog::seed::CATALOG;
///
/// let query = CatalogQuery::search("candy");
/// let results = query.apply(CATALOG);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].name, "Candy Crush Saga");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogQuery {
    pub search: String,
    pub filter: KindFilter,
    pub sort: SortKey,
}

impl CatalogQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    /// Case-insensitive substring match on name, description, or package id.
    /// An empty search term matches everything.
    pub fn matches_search(&self, entry: &CatalogEntry) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [entry.name, entry.description, entry.package_id]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.matches_search(entry) && self.filter.accepts(entry)
    }

    /// Returns matching entries in the requested order.
    ///
    /// The catalog itself is never reordered.
    pub fn apply<'a>(&self, catalog: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        let mut results: Vec<&CatalogEntry> = catalog.iter().filter(|e| self.matches(e)).collect();
        sort_entries(&mut results, self.sort);
        results
    }
}

/// Stable sort; entries with equal keys keep their relative order.
pub fn sort_entries(entries: &mut [&CatalogEntry], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::Popularity => entries.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
        SortKey::Rating => entries.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}
