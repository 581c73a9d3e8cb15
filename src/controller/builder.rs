//! Builder for [`ListViewController`]

use std::collections::HashSet;
use std::sync::Arc;

use crate::announce::{AnnouncementSink, ItemNoun, NullSink};
use crate::config::ListConfig;
use crate::controller::{FacetSlot, ListViewController};
use crate::error::{ListViewError, Result};
use crate::events::Subscribers;
use crate::extract::{SharedExtractor, field};
use crate::query::{FacetDef, SearchQuery, SortKey};
use crate::storage::{MemoryStore, PersistenceAdapter, load_view_mode};
use crate::timing::{Clock, Debouncer, SystemClock};
use crate::types::{FACET_ALL, Field, Item};

/// Fields searched when the page does not configure any
const DEFAULT_SEARCH_FIELDS: [Field; 6] = [
    Field::Title,
    Field::Authors,
    Field::Year,
    Field::Category,
    Field::Tags,
    Field::Summary,
];

pub struct ListViewControllerBuilder {
    items: Vec<Item>,
    facets: Vec<FacetDef>,
    search_fields: Vec<SharedExtractor>,
    noun: ItemNoun,
    sort: Option<SortKey>,
    config: ListConfig,
    store: Option<Arc<dyn PersistenceAdapter>>,
    announcer: Option<Arc<dyn AnnouncementSink>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ListViewControllerBuilder {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            facets: Vec::new(),
            search_fields: Vec::new(),
            noun: ItemNoun::default(),
            sort: None,
            config: ListConfig::default(),
            store: None,
            announcer: None,
            clock: None,
        }
    }

    /// Declare a facet; facets are evaluated in declaration order
    pub fn facet(mut self, def: FacetDef) -> Self {
        self.facets.push(def);
        self
    }

    pub fn facets(mut self, defs: impl IntoIterator<Item = FacetDef>) -> Self {
        self.facets.extend(defs);
        self
    }

    /// Add a field to the free-text search
    pub fn search_field(mut self, on: Field) -> Self {
        self.search_fields.push(field(on));
        self
    }

    /// Add a custom extractor to the free-text search
    pub fn search_extractor(mut self, extractor: SharedExtractor) -> Self {
        self.search_fields.push(extractor);
        self
    }

    pub fn noun(mut self, noun: ItemNoun) -> Self {
        self.noun = noun;
        self
    }

    pub fn sort(mut self, sort: Option<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    pub fn config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    pub fn store(mut self, store: Arc<dyn PersistenceAdapter>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn announcer(mut self, announcer: Arc<dyn AnnouncementSink>) -> Self {
        self.announcer = Some(announcer);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the controller, or `None` when there is nothing to control
    pub fn build_if_populated(self) -> Result<Option<ListViewController>> {
        if self.items.is_empty() {
            tracing::debug!("No items on page, skipping list controller");
            return Ok(None);
        }
        self.build().map(Some)
    }

    pub fn build(self) -> Result<ListViewController> {
        let mut seen_ids = HashSet::new();
        for item in &self.items {
            if !seen_ids.insert(item.id.clone()) {
                return Err(ListViewError::DuplicateItemId(item.id.to_string()));
            }
        }

        let mut seen_facets = HashSet::new();
        let mut facets = Vec::with_capacity(self.facets.len());
        for def in self.facets {
            if !seen_facets.insert(def.name().to_string()) {
                return Err(ListViewError::DuplicateFacet(def.name().to_string()));
            }
            facets.push(FacetSlot {
                def: Arc::new(def),
                selected: FACET_ALL.to_string(),
            });
        }

        let search_fields: Arc<[SharedExtractor]> = if self.search_fields.is_empty() {
            DEFAULT_SEARCH_FIELDS.into_iter().map(field).collect()
        } else {
            self.search_fields.into()
        };

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()) as Arc<dyn PersistenceAdapter>);
        let view_mode = load_view_mode(store.as_ref(), &self.config.view_mode_key);

        let mut controller = ListViewController {
            items: self.items.into(),
            facets,
            search_fields,
            query: SearchQuery::empty(),
            debouncer: Debouncer::new(self.config.search_debounce()),
            sort: self.sort,
            page: 1,
            view_mode,
            noun: self.noun,
            config: self.config,
            store,
            announcer: self
                .announcer
                .unwrap_or_else(|| Arc::new(NullSink) as Arc<dyn AnnouncementSink>),
            clock: self
                .clock
                .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>),
            subscribers: Subscribers::new(),
            snapshot: Default::default(),
            recompute_count: 0,
        };
        controller.snapshot = controller.project(controller.evaluate());

        Ok(controller)
    }
}
