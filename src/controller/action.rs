use crate::query::SortKey;
use crate::types::ViewMode;

/// A user interaction with a list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    SetFacet { name: String, value: String },
    /// Keystroke in the search input (debounced)
    SetQuery(String),
    /// Timer tick: apply a pending query whose quiet window has passed
    Tick,
    /// Apply a pending query immediately
    Flush,
    ClearAll,
    SetSort(Option<SortKey>),
    SetPage(usize),
    SetViewMode(ViewMode),
}
