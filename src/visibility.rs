//! Visibility projection
//!
//! A [`VisibilityResult`] is recomputed from scratch on every filter change;
//! nothing from a previous result carries over.

use serde::Serialize;

use crate::types::{Item, ItemId};

/// Partition of an item set into visible and hidden items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityResult {
    /// Visible item ids, in original item order
    pub visible: Vec<ItemId>,
    /// Hidden item ids, in original item order
    pub hidden: Vec<ItemId>,
    /// Positions of the visible items in the source slice
    #[serde(skip)]
    pub visible_indices: Vec<usize>,
    /// One flag per source item: should it be shown?
    pub flags: Vec<bool>,
    /// Whether any facet or query constraint was in effect
    pub filtering_active: bool,
}

impl VisibilityResult {
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total(&self) -> usize {
        self.flags.len()
    }

    /// The "no results" indicator: nothing visible while a filter is active
    pub fn no_results(&self) -> bool {
        self.filtering_active && self.visible.is_empty()
    }

    pub fn is_visible(&self, id: &ItemId) -> bool {
        self.visible.contains(id)
    }
}

/// Evaluate `predicate` for each item and split the set, keeping item order
pub fn partition<F>(items: &[Item], filtering_active: bool, predicate: F) -> VisibilityResult
where
    F: Fn(&Item) -> bool,
{
    let mut result = VisibilityResult {
        filtering_active,
        flags: Vec::with_capacity(items.len()),
        ..Default::default()
    };

    for (index, item) in items.iter().enumerate() {
        let shown = predicate(item);
        result.flags.push(shown);
        if shown {
            result.visible.push(item.id.clone());
            result.visible_indices.push(index);
        } else {
            result.hidden.push(item.id.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        (0..5)
            .map(|i| Item::new(format!("i{i}"), format!("Item {i}")))
            .collect()
    }

    #[test]
    fn test_partition_preserves_order() {
        let items = items();
        let result = partition(&items, true, |item| item.id.as_str() != "i2");

        let visible: Vec<&str> = result.visible.iter().map(|id| id.as_str()).collect();
        assert_eq!(visible, vec!["i0", "i1", "i3", "i4"]);
        assert_eq!(result.hidden, vec![ItemId::new("i2")]);
        assert_eq!(result.visible_indices, vec![0, 1, 3, 4]);
        assert_eq!(result.flags, vec![true, true, false, true, true]);
    }

    #[test]
    fn test_partition_is_deterministic() {
        let items = items();
        let first = partition(&items, true, |item| item.title.ends_with('1'));
        let second = partition(&items, true, |item| item.title.ends_with('1'));
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_results_requires_active_filter() {
        let empty = partition(&[], false, |_| true);
        assert_eq!(empty.visible_count(), 0);
        assert!(!empty.no_results());

        let items = items();
        let none = partition(&items, true, |_| false);
        assert_eq!(none.total(), 5);
        assert!(none.no_results());
    }

    #[test]
    fn test_is_visible() {
        let items = items();
        let result = partition(&items, true, |item| item.id.as_str() == "i4");
        assert!(result.is_visible(&ItemId::new("i4")));
        assert!(!result.is_visible(&ItemId::new("i0")));
    }
}
