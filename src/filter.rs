//! Search-box filtering over a fetched catalog page.

use crate::models::CatalogEntry;

/// True when `query` is a case-insensitive substring of the entry's name
/// or a substring of its decimal id. The empty query matches everything.
pub fn matches(entry: &CatalogEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    entry.name.to_lowercase().contains(&query.to_lowercase())
        || entry.id.to_string().contains(query)
}

pub fn filter_catalog(entries: &[CatalogEntry], query: &str) -> Vec<CatalogEntry> {
    entries
        .iter()
        .filter(|e| matches(e, query))
        .cloned()
        .collect()
}

/// Positions of the matching entries in `entries`, in order.
pub fn filter_indices(entries: &[CatalogEntry], query: &str) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, e)| matches(e, query).then_some(i))
        .collect()
}
