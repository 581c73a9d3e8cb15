//! Filterable list controller
//!
//! Owns the filter state for one list page (facet selections, the applied
//! search query, sort and page) and recomputes visibility from scratch on
//! every change. Rendering code observes the controller through
//! [`ControllerEvent`]s and never shares mutable state with it.
//!
//! Search input is debounced through an injected [`Clock`]: `set_query` only
//! schedules a query, and `poll` applies it once the quiet window has passed.

mod action;
mod builder;

use std::sync::Arc;

use serde::Serialize;

pub use action::ListAction;
pub use builder::ListViewControllerBuilder;

use crate::announce::{Announcement, AnnouncementSink, ItemNoun, announcement_for};
use crate::config::ListConfig;
use crate::error::{ListViewError, Result};
use crate::events::{ControllerEvent, Observer, SubscriptionId, Subscribers};
use crate::extract::{SharedExtractor, normalize_text};
use crate::pagination::{PageView, paginate};
use crate::query::{FacetDef, ListQueryBuilder, SearchQuery, SortKey, sort_indices};
use crate::storage::{PersistenceAdapter, save_view_mode};
use crate::timing::{Clock, Debouncer};
use crate::types::{FACET_ALL, Item, ItemId, ViewMode};
use crate::visibility::VisibilityResult;

/// Everything a renderer needs after a recompute
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VisibilitySnapshot {
    pub result: VisibilityResult,
    /// Visible ids in display order (sorted when a sort key is set)
    pub ordered: Vec<ItemId>,
    pub page: PageView,
    pub query: String,
    /// Active facet selections, in declaration order
    pub facets: Vec<(String, String)>,
    pub sort: Option<SortKey>,
    pub announcement: Option<Announcement>,
    pub view_mode: ViewMode,
}

impl VisibilitySnapshot {
    pub fn no_results(&self) -> bool {
        self.result.no_results()
    }

    pub fn visible_count(&self) -> usize {
        self.result.visible_count()
    }
}

struct FacetSlot {
    def: Arc<FacetDef>,
    selected: String,
}

pub struct ListViewController {
    items: Arc<[Item]>,
    facets: Vec<FacetSlot>,
    search_fields: Arc<[SharedExtractor]>,
    query: SearchQuery,
    debouncer: Debouncer<SearchQuery>,
    sort: Option<SortKey>,
    page: usize,
    view_mode: ViewMode,
    noun: ItemNoun,
    config: ListConfig,
    store: Arc<dyn PersistenceAdapter>,
    announcer: Arc<dyn AnnouncementSink>,
    clock: Arc<dyn Clock>,
    subscribers: Subscribers,
    snapshot: VisibilitySnapshot,
    recompute_count: u64,
}

impl ListViewController {
    pub fn builder(items: Vec<Item>) -> ListViewControllerBuilder {
        ListViewControllerBuilder::new(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn facet_names(&self) -> impl Iterator<Item = &str> {
        self.facets.iter().map(|slot| slot.def.name())
    }

    pub fn facet_def(&self, name: &str) -> Option<&Arc<FacetDef>> {
        let name = normalize_text(name);
        self.facets
            .iter()
            .find(|slot| slot.def.name() == name)
            .map(|slot| &slot.def)
    }

    /// The selected value of a facet, `"all"` when unconstrained
    pub fn facet_value(&self, name: &str) -> Option<&str> {
        let name = normalize_text(name);
        self.facets
            .iter()
            .find(|slot| slot.def.name() == name)
            .map(|slot| slot.selected.as_str())
    }

    /// The query the current snapshot was computed with
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// A query waiting for its quiet window, if any
    pub fn pending_query(&self) -> Option<&SearchQuery> {
        self.debouncer.peek()
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.snapshot.page.page
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn snapshot(&self) -> &VisibilitySnapshot {
        &self.snapshot
    }

    /// Number of recomputes since construction
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> SubscriptionId {
        self.subscribers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Select a facet value and recompute immediately.
    ///
    /// A value outside the facet's allowed set is kept, but matches nothing.
    pub fn set_facet(&mut self, name: &str, value: &str) -> Result<&VisibilitySnapshot> {
        let name = normalize_text(name);
        let value = normalize_text(value);
        let slot = self
            .facets
            .iter_mut()
            .find(|slot| slot.def.name() == name)
            .ok_or_else(|| ListViewError::UnknownFacet(name.clone()))?;

        if value != FACET_ALL && !slot.def.allows(&value) {
            tracing::warn!(facet = %name, value = %value, "Facet value is not in the allowed set");
        }
        slot.selected = if value.is_empty() {
            FACET_ALL.to_string()
        } else {
            value
        };

        Ok(self.recompute())
    }

    /// Schedule a search query. It is applied by `poll` after the quiet window.
    pub fn set_query(&mut self, text: &str) {
        let query = SearchQuery::new(text);
        self.debouncer.schedule(query, self.clock.now());
    }

    /// Apply the pending query if its quiet window has passed
    pub fn poll(&mut self) -> Option<&VisibilitySnapshot> {
        let query = self.debouncer.poll(self.clock.now())?;
        self.query = query;
        Some(self.recompute())
    }

    /// Apply the pending query now, ignoring the quiet window
    pub fn flush(&mut self) -> Option<&VisibilitySnapshot> {
        let query = self.debouncer.flush()?;
        self.query = query;
        Some(self.recompute())
    }

    /// Reset every facet to `"all"`, clear the query, and recompute once
    pub fn clear_all(&mut self) -> &VisibilitySnapshot {
        if self.debouncer.cancel() {
            tracing::debug!("Dropped pending search query");
        }
        for slot in &mut self.facets {
            slot.selected = FACET_ALL.to_string();
        }
        self.query = SearchQuery::empty();
        self.recompute()
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) -> &VisibilitySnapshot {
        self.sort = sort;
        self.recompute()
    }

    /// Move to another page of the current result without refiltering
    pub fn set_page(&mut self, page: usize) -> &VisibilitySnapshot {
        self.page = page;
        self.snapshot.page = paginate(&self.snapshot.ordered, self.config.per_page, page);
        self.subscribers.emit(&ControllerEvent::VisibilityChanged(self.snapshot.clone()));
        &self.snapshot
    }

    /// Switch layout, persist it, and notify observers
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.snapshot.view_mode = mode;
        save_view_mode(self.store.as_ref(), &self.config.view_mode_key, mode);
        self.subscribers.emit(&ControllerEvent::ViewModeChanged(mode));
    }

    /// Evaluate the current filter state against the items.
    ///
    /// Pure: depends only on the items, the facet selections and the applied
    /// query, never on a previous result.
    pub fn evaluate(&self) -> VisibilityResult {
        let mut builder = ListQueryBuilder::new();
        for slot in &self.facets {
            builder = builder.with_facet(Arc::clone(&slot.def), &slot.selected);
        }
        builder
            .with_search(&self.query, Arc::clone(&self.search_fields))
            .build()
            .apply(&self.items)
    }

    /// Recompute visibility, announce the result and notify observers.
    ///
    /// Pagination always returns to the first page.
    pub fn recompute(&mut self) -> &VisibilitySnapshot {
        let result = self.evaluate();
        self.recompute_count += 1;
        self.page = 1;

        tracing::debug!(
            visible = result.visible_count(),
            total = result.total(),
            query = %self.query,
            "Recomputed list visibility"
        );

        self.snapshot = self.project(result);

        match &self.snapshot.announcement {
            Some(announcement) => self.announcer.announce(&announcement.message),
            None => self.announcer.clear(),
        }
        self.subscribers.emit(&ControllerEvent::VisibilityChanged(self.snapshot.clone()));

        &self.snapshot
    }

    /// Apply a [`ListAction`], returning the snapshot if visibility changed
    pub fn dispatch(&mut self, action: ListAction) -> Result<Option<&VisibilitySnapshot>> {
        let snapshot = match action {
            ListAction::SetFacet { name, value } => Some(self.set_facet(&name, &value)?),
            ListAction::SetQuery(text) => {
                self.set_query(&text);
                None
            }
            ListAction::Tick => self.poll(),
            ListAction::Flush => self.flush(),
            ListAction::ClearAll => Some(self.clear_all()),
            ListAction::SetSort(sort) => Some(self.set_sort(sort)),
            ListAction::SetPage(page) => Some(self.set_page(page)),
            ListAction::SetViewMode(mode) => {
                self.set_view_mode(mode);
                None
            }
        };
        Ok(snapshot)
    }

    fn project(&self, result: VisibilityResult) -> VisibilitySnapshot {
        let mut indices = result.visible_indices.clone();
        if let Some(key) = self.sort {
            sort_indices(&self.items, &mut indices, key);
        }
        let ordered: Vec<ItemId> = indices
            .iter()
            .map(|&index| self.items[index].id.clone())
            .collect();

        let page = paginate(&ordered, self.config.per_page, self.page);
        let announcement = announcement_for(&result, &self.query, &self.noun);
        let facets = self
            .facets
            .iter()
            .filter(|slot| slot.selected != FACET_ALL)
            .map(|slot| (slot.def.name().to_string(), slot.selected.clone()))
            .collect();

        VisibilitySnapshot {
            result,
            ordered,
            page,
            query: self.query.to_string(),
            facets,
            sort: self.sort,
            announcement,
            view_mode: self.view_mode,
        }
    }
}
