//! Free-text search over item fields
//!
//! A query is normalized once (trimmed, lower-cased) and matched by
//! substring containment against each configured field. Any field
//! containing the query is enough.

use std::fmt;
use std::sync::Arc;

use crate::extract::{SharedExtractor, normalize_text};
use crate::query::ItemFilter;
use crate::types::Item;

/// A normalized free-text query
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        SearchQuery(normalize_text(text))
    }

    /// The empty query, which matches everything
    pub fn empty() -> Self {
        SearchQuery(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether any of `fields` contains the query
    pub fn matches(&self, item: &Item, fields: &[SharedExtractor]) -> bool {
        if self.is_empty() {
            return true;
        }
        fields
            .iter()
            .any(|field| field.text(item).to_lowercase().contains(&self.0))
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Filter items by a search query across a set of text fields
pub struct SearchFilter {
    query: SearchQuery,
    fields: Arc<[SharedExtractor]>,
}

impl SearchFilter {
    pub fn new(query: SearchQuery, fields: Arc<[SharedExtractor]>) -> Self {
        Self { query, fields }
    }
}

impl ItemFilter for SearchFilter {
    fn matches(&self, item: &Item) -> bool {
        self.query.matches(item, &self.fields)
    }
}
