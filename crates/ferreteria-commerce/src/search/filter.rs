//! Catalog filter state and the visibility predicate.

use crate::catalog::{CategoryFilter, Item};
use serde::{Deserialize, Serialize};

/// The active category selection and search term.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected category, or all.
    pub category: CategoryFilter,
    /// Free-text search term, possibly empty.
    pub search_term: String,
}

impl FilterState {
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Whether `item` is visible under this filter.
    pub fn matches(&self, item: &Item) -> bool {
        matches(item, self.category, &self.search_term)
    }

    /// Whether the filter shows the whole catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.search_term.is_empty()
    }
}

/// Category match AND case-insensitive substring match on the item name.
///
/// An empty search term matches every name.
pub fn matches(item: &Item, category: CategoryFilter, search_term: &str) -> bool {
    category.accepts(item.category) && contains_ignore_case(&item.name, search_term)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
