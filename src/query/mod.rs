//! Query builder pattern for filtering items.
//!
//! Facets and the free-text search are independent [`ItemFilter`]s. A
//! [`ListQuery`] ANDs them together and partitions an item slice into a
//! [`VisibilityResult`] without reordering it.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::ListViewError;
use crate::extract::{SharedExtractor, field, normalize_text};
use crate::types::{FACET_ALL, Field, Item};
use crate::visibility::{VisibilityResult, partition};

pub mod search;
pub mod sort;

pub use search::{SearchFilter, SearchQuery};
pub use sort::{SortKey, compare_items, sort_indices, sort_items};

/// Trait for item filters
pub trait ItemFilter: Send + Sync {
    fn matches(&self, item: &Item) -> bool;
}

/// How a facet compares its selected value against an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacetKind {
    /// Whole-field equality after normalization (year, category)
    #[default]
    Exact,
    /// Equality with one element of a list field (authors, tags)
    Multi,
}

enum_display_fromstr!(
    FacetKind,
    ListViewError::invalid_facet_kind,
    {
        Exact => "exact",
        Multi => "multi" | "list",
    }
);

/// Declaration of one filterable dimension
#[derive(Clone)]
pub struct FacetDef {
    name: String,
    kind: FacetKind,
    extractor: SharedExtractor,
    /// Normalized allowed values; empty means any value may be selected
    allowed: BTreeSet<String>,
}

impl std::fmt::Debug for FacetDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetDef")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("extractor", &self.extractor.name())
            .field("allowed", &self.allowed)
            .finish()
    }
}

impl FacetDef {
    pub fn new(name: impl Into<String>, kind: FacetKind, extractor: SharedExtractor) -> Self {
        Self {
            name: normalize_text(&name.into()),
            kind,
            extractor,
            allowed: BTreeSet::new(),
        }
    }

    /// Facet comparing the whole field
    pub fn exact(name: impl Into<String>, on: Field) -> Self {
        Self::new(name, FacetKind::Exact, field(on))
    }

    /// Facet comparing against one element of a list field
    pub fn multi(name: impl Into<String>, on: Field) -> Self {
        Self::new(name, FacetKind::Multi, field(on))
    }

    /// Restrict the selectable values
    pub fn with_allowed<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed.extend(
            values
                .into_iter()
                .map(|v| normalize_text(v.as_ref()))
                .filter(|v| !v.is_empty() && v != FACET_ALL),
        );
        self
    }

    /// Derive the allowed values from what the items actually carry
    pub fn with_allowed_from(self, items: &[Item]) -> Self {
        let values: Vec<String> = items
            .iter()
            .flat_map(|item| self.item_values(item))
            .collect();
        self.with_allowed(values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FacetKind {
        self.kind
    }

    pub fn extractor(&self) -> &SharedExtractor {
        &self.extractor
    }

    pub fn allowed_values(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    /// Whether `value` (already normalized) is a declared choice
    pub fn allows(&self, value: &str) -> bool {
        value == FACET_ALL || self.allowed.is_empty() || self.allowed.contains(value)
    }

    /// Normalized values this facet sees on an item
    fn item_values(&self, item: &Item) -> Vec<String> {
        match self.kind {
            FacetKind::Exact => {
                let text = normalize_text(&self.extractor.text(item));
                if text.is_empty() { vec![] } else { vec![text] }
            }
            FacetKind::Multi => self
                .extractor
                .values(item)
                .iter()
                .map(|v| normalize_text(v))
                .collect(),
        }
    }

    /// Evaluate the facet for a normalized selected value.
    ///
    /// `"all"` always matches; a value outside the allowed set never does.
    pub fn matches(&self, item: &Item, selected: &str) -> bool {
        if selected == FACET_ALL {
            return true;
        }
        if !self.allows(selected) {
            return false;
        }
        match self.kind {
            FacetKind::Exact => normalize_text(&self.extractor.text(item)) == selected,
            FacetKind::Multi => self
                .extractor
                .values(item)
                .iter()
                .any(|v| normalize_text(v) == selected),
        }
    }
}

/// A facet bound to its currently selected value
pub struct FacetFilter {
    def: Arc<FacetDef>,
    selected: String,
}

impl FacetFilter {
    pub fn new(def: Arc<FacetDef>, selected: &str) -> Self {
        Self {
            def,
            selected: normalize_text(selected),
        }
    }

    pub fn is_active(&self) -> bool {
        self.selected != FACET_ALL
    }
}

impl ItemFilter for FacetFilter {
    fn matches(&self, item: &Item) -> bool {
        self.def.matches(item, &self.selected)
    }
}

/// An executed query configuration that can be applied to item data.
/// This separates query configuration from execution.
pub struct ListQuery {
    filters: Vec<Box<dyn ItemFilter>>,
}

impl ListQuery {
    /// Whether any constraint is in effect
    pub fn is_active(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Check a single item against every filter (AND composition)
    pub fn matches(&self, item: &Item) -> bool {
        self.filters.iter().all(|f| f.matches(item))
    }

    /// Partition `items` into visible and hidden, preserving order
    pub fn apply(&self, items: &[Item]) -> VisibilityResult {
        partition(items, self.is_active(), |item| self.matches(item))
    }
}

/// Query builder for filtering items
#[derive(Default)]
pub struct ListQueryBuilder {
    filters: Vec<Box<dyn ItemFilter>>,
}

impl ListQueryBuilder {
    /// Create a new query builder with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter to the query (AND composition)
    pub fn with_filter(mut self, filter: Box<dyn ItemFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a facet constraint; `"all"` adds nothing
    pub fn with_facet(self, def: Arc<FacetDef>, selected: &str) -> Self {
        let filter = FacetFilter::new(def, selected);
        if filter.is_active() {
            self.with_filter(Box::new(filter))
        } else {
            self
        }
    }

    /// Add the free-text search; an empty query adds nothing
    pub fn with_search(self, query: &SearchQuery, fields: Arc<[SharedExtractor]>) -> Self {
        if query.is_empty() {
            self
        } else {
            self.with_filter(Box::new(SearchFilter::new(query.clone(), fields)))
        }
    }

    /// Build the query configuration from this builder.
    pub fn build(self) -> ListQuery {
        ListQuery {
            filters: self.filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("p0", "Seismic Imaging")
                .with_authors("Patel, Rao")
                .with_year("2022")
                .with_category("Geophysics"),
            Item::new("p1", "Soil Mapping")
                .with_authors("Rao")
                .with_year("2021")
                .with_category("Remote Sensing"),
            Item::new("p2", "Raoult's Law Revisited")
                .with_authors("Raoult")
                .with_year("2021")
                .with_category("Chemistry"),
        ]
    }

    fn ids(result: &VisibilityResult) -> Vec<&str> {
        result.visible.iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_exact_facet_matches_whole_value() {
        let def = FacetDef::exact("year", Field::Year);
        let items = items();
        assert!(def.matches(&items[1], "2021"));
        assert!(!def.matches(&items[0], "2021"));
        assert!(!def.matches(&items[0], "202"));
    }

    #[test]
    fn test_exact_facet_ignores_case_and_padding() {
        let def = FacetDef::exact("category", Field::Category);
        let items = items();
        let filter = FacetFilter::new(Arc::new(def), "  remote SENSING ");
        assert!(filter.matches(&items[1]));
    }

    #[test]
    fn test_multi_facet_matches_whole_elements_only() {
        let def = FacetDef::multi("author", Field::Authors);
        let items = items();
        assert!(def.matches(&items[0], "rao"));
        assert!(def.matches(&items[1], "rao"));
        // "Raoult" contains "rao" but is a different author
        assert!(!def.matches(&items[2], "rao"));
    }

    #[test]
    fn test_all_is_wildcard() {
        let def = FacetDef::exact("year", Field::Year).with_allowed(["2021"]);
        for item in &items() {
            assert!(def.matches(item, FACET_ALL));
        }
    }

    #[test]
    fn test_value_outside_allowed_set_matches_nothing() {
        let items = items();
        let def = FacetDef::exact("year", Field::Year).with_allowed_from(&items);
        assert!(def.allows("2022"));
        assert!(!def.allows("1999"));
        for item in &items {
            assert!(!def.matches(item, "1999"));
        }
    }

    #[test]
    fn test_allowed_from_items_collects_distinct_values() {
        let items = items();
        let def = FacetDef::multi("author", Field::Authors).with_allowed_from(&items);
        let values: Vec<&str> = def.allowed_values().collect();
        assert_eq!(values, vec!["patel", "rao", "raoult"]);
    }

    #[test]
    fn test_query_ands_facets_and_search() {
        let items = items();
        let fields: Arc<[SharedExtractor]> = vec![field(Field::Title)].into();
        let query = ListQueryBuilder::new()
            .with_facet(Arc::new(FacetDef::exact("year", Field::Year)), "2021")
            .with_search(&SearchQuery::new("soil"), fields)
            .build();

        let result = query.apply(&items);
        assert_eq!(ids(&result), vec!["p1"]);
        assert!(result.filtering_active);
    }

    #[test]
    fn test_inactive_constraints_are_skipped() {
        let items = items();
        let query = ListQueryBuilder::new()
            .with_facet(Arc::new(FacetDef::exact("year", Field::Year)), "ALL")
            .with_search(&SearchQuery::empty(), Vec::new().into())
            .build();

        assert!(!query.is_active());
        let result = query.apply(&items);
        assert_eq!(result.visible_count(), 3);
        assert!(!result.filtering_active);
    }

    #[test]
    fn test_facet_kind_from_str() {
        assert_eq!(FacetKind::from_str("exact").unwrap(), FacetKind::Exact);
        assert_eq!(FacetKind::from_str("LIST").unwrap(), FacetKind::Multi);
        assert!(FacetKind::from_str("range").is_err());
        assert_eq!(FacetKind::Multi.to_string(), "multi");
    }
}
