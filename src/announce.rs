//! Status announcements for assistive technology
//!
//! The announcement channel is a single text sink. Messages are short and
//! human-readable; nothing parses them.

use parking_lot::Mutex;
use serde::Serialize;

use crate::query::SearchQuery;
use crate::visibility::VisibilityResult;

/// Text sink consumed by assistive technology (a live region)
pub trait AnnouncementSink: Send + Sync {
    fn announce(&self, message: &str);

    /// Remove the current message, if the sink keeps one
    fn clear(&self) {}
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AnnouncementSink for NullSink {
    fn announce(&self, _message: &str) {}
}

/// In-memory live region keeping the current message and its history
#[derive(Debug, Default)]
pub struct LiveRegion {
    current: Mutex<Option<String>>,
    history: Mutex<Vec<String>>,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.current.lock().clone()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }
}

impl AnnouncementSink for LiveRegion {
    fn announce(&self, message: &str) {
        *self.current.lock() = Some(message.to_string());
        self.history.lock().push(message.to_string());
    }

    fn clear(&self) {
        *self.current.lock() = None;
    }
}

/// Singular and plural names for the items of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNoun {
    pub singular: String,
    pub plural: String,
}

impl ItemNoun {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    pub fn for_count(&self, count: usize) -> &str {
        if count == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

impl Default for ItemNoun {
    fn default() -> Self {
        Self::new("item", "items")
    }
}

/// A status message together with the count it reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub count: usize,
    pub message: String,
}

/// Build the status message for a recompute.
///
/// Returns `None` when no filter is active: showing everything is not news.
pub fn announcement_for(
    result: &VisibilityResult,
    query: &SearchQuery,
    noun: &ItemNoun,
) -> Option<Announcement> {
    if !result.filtering_active {
        return None;
    }

    let count = result.visible_count();
    let noun = noun.for_count(count);
    let message = if query.is_empty() {
        format!("{count} {noun} found")
    } else {
        format!("{count} {noun} found for '{query}'")
    };

    Some(Announcement { count, message })
}
