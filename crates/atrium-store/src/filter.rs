//! The pure filter/search engine
//!
//! `apply_filters` is a synchronous pure function from (records, query) to
//! the visible subset, recomputed on every render. Laws:
//!
//! - an empty query is the identity;
//! - a record whose haystack contains the search text (case-insensitively)
//!   is included, provided its filter fields match.

use indexmap::IndexMap;

/// Filterable dimensions across console pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    /// Staff or member role
    Role,
    /// Lifecycle status
    Status,
    /// Site (branch)
    Site,
    /// Society
    Society,
    /// Marketplace or incident category
    Category,
    /// Building block
    Block,
}

/// Records the filter engine can interrogate
pub trait Searchable {
    /// Text fields the free-text search runs over
    fn search_haystacks(&self) -> Vec<&str>;

    /// Value of a filterable dimension, if this record has one
    fn filter_field(&self, key: FilterKey) -> Option<String>;
}

/// One page's search text and filter selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// Free-text search; `None` and `""` both mean unconstrained
    pub search: Option<String>,
    /// Selected filter values; an absent key means unconstrained
    pub selections: IndexMap<FilterKey, String>,
}

impl FilterQuery {
    /// Unconstrained query
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    #[inline]
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Select a filter value
    #[inline]
    #[must_use]
    pub fn with_selection(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.selections.insert(key, value.into());
        self
    }

    /// Whether this query constrains anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, str::is_empty) && self.selections.is_empty()
    }
}

/// Derive the visible subset of `records` under `query`
///
/// Pure and synchronous; order is preserved.
#[must_use]
pub fn apply_filters<T: Searchable + Clone>(records: &[T], query: &FilterQuery) -> Vec<T> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    records
        .iter()
        .filter(|record| matches_search(*record, needle.as_deref()))
        .filter(|record| matches_selections(*record, query))
        .cloned()
        .collect()
}

fn matches_search<T: Searchable>(record: &T, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    record
        .search_haystacks()
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(needle))
}

fn matches_selections<T: Searchable>(record: &T, query: &FilterQuery) -> bool {
    query
        .selections
        .iter()
        .all(|(key, wanted)| record.filter_field(*key).as_deref() == Some(wanted.as_str()))
}
