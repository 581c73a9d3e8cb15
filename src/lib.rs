#[macro_use]
mod macros;

pub mod announce;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod extract;
pub mod pages;
pub mod pagination;
pub mod query;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod storage_error;
pub mod timing;
pub mod types;
pub mod validation;
pub mod visibility;

pub use announce::{AnnouncementSink, ItemNoun, LiveRegion};
pub use catalog::{CatalogFormat, load_catalog, parse_catalog};
pub use config::Config;
pub use controller::{ListAction, ListViewController, ListViewControllerBuilder, VisibilitySnapshot};
pub use error::{ListViewError, Result};
pub use events::{ControllerEvent, Observer, SubscriptionId};
pub use pages::PageKind;
pub use query::{FacetDef, FacetKind, SearchQuery, SortKey};
pub use storage::{DisabledStore, FileStore, MemoryStore, PersistenceAdapter};
pub use timing::{Clock, ManualClock, SystemClock};
pub use types::{Field, Item, ItemId, Theme, ViewMode};
pub use validation::{ContactForm, FieldError};
pub use visibility::VisibilityResult;
