use crate::storage_error::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListViewError {
    #[error("unknown facet '{0}'")]
    UnknownFacet(String),

    #[error("facet '{0}' is declared more than once")]
    DuplicateFacet(String),

    #[error("duplicate item id '{0}'")]
    DuplicateItemId(String),

    #[error("invalid view mode '{0}'")]
    InvalidViewMode(String),

    #[error("invalid theme '{0}'")]
    InvalidTheme(String),

    #[error("invalid sort key '{0}'")]
    InvalidSortKey(String),

    #[error("invalid page kind '{0}'")]
    InvalidPageKind(String),

    #[error("invalid facet kind '{0}'")]
    InvalidFacetKind(String),

    #[error("invalid facet assignment '{0}': expected NAME=VALUE")]
    InvalidFacetAssignment(String),

    #[error("contact form has {0} invalid field(s)")]
    InvalidContactForm(usize),

    #[error("invalid catalog format: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    // Persistence adapter errors
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Other(String),
}

impl ListViewError {
    pub fn invalid_view_mode(s: String) -> Self {
        ListViewError::InvalidViewMode(s)
    }

    pub fn invalid_theme(s: String) -> Self {
        ListViewError::InvalidTheme(s)
    }

    pub fn invalid_sort_key(s: String) -> Self {
        ListViewError::InvalidSortKey(s)
    }

    pub fn invalid_page_kind(s: String) -> Self {
        ListViewError::InvalidPageKind(s)
    }

    pub fn invalid_facet_kind(s: String) -> Self {
        ListViewError::InvalidFacetKind(s)
    }
}

pub type Result<T> = std::result::Result<T, ListViewError>;
