//! Sort projection for visible items.
//!
//! Sorting never changes which items are visible; it only orders them.
//! All sorts are stable so ties keep their original relative order.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu::collator::options::{CollatorOptions, Strength};
use icu::collator::{Collator, CollatorBorrowed};
use serde::{Deserialize, Serialize};
use unicase::UniCase;

use crate::error::ListViewError;
use crate::types::Item;

/// Sort key for list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    YearAsc,
    YearDesc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    /// All valid string representations of this enum.
    pub const ALL_STRINGS: &[&str] = &["year-asc", "year-desc", "title-asc", "title-desc"];
}

enum_display_fromstr!(
    SortKey,
    ListViewError::invalid_sort_key,
    {
        YearAsc => "year-asc" | "oldest",
        YearDesc => "year-desc" | "newest",
        TitleAsc => "title-asc" | "title",
        TitleDesc => "title-desc",
    }
);

fn parse_year(item: &Item) -> Option<i64> {
    item.year.trim().parse().ok()
}

/// Items without a parseable year sort after every dated item, in both directions
fn compare_years(a: &Item, b: &Item, descending: bool) -> Ordering {
    match (parse_year(a), parse_year(b)) {
        (Some(ya), Some(yb)) if descending => yb.cmp(&ya),
        (Some(ya), Some(yb)) => ya.cmp(&yb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Root-locale collation at secondary strength: accents count, case does not
static TITLE_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!("Title collation unavailable, using case folding: {e}");
            None
        }
    }
});

fn compare_titles(a: &Item, b: &Item) -> Ordering {
    let (a, b) = (a.title.trim(), b.title.trim());
    match TITLE_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => UniCase::new(a).cmp(&UniCase::new(b)),
    }
}

/// Compare two items by the given key
pub fn compare_items(a: &Item, b: &Item, key: SortKey) -> Ordering {
    match key {
        SortKey::YearAsc => compare_years(a, b, false),
        SortKey::YearDesc => compare_years(a, b, true),
        SortKey::TitleAsc => compare_titles(a, b),
        SortKey::TitleDesc => compare_titles(b, a),
    }
}

/// Sort items in place by the given key
pub fn sort_items(items: &mut [Item], key: SortKey) {
    items.sort_by(|a, b| compare_items(a, b, key));
}

/// Sort positions into `items` by the given key
pub fn sort_indices(items: &[Item], indices: &mut [usize], key: SortKey) {
    indices.sort_by(|&a, &b| compare_items(&items[a], &items[b], key));
}
