//! Item catalogs: the content of a list page as a YAML or JSON document.
//!
//! A catalog is either a bare sequence of records or a mapping with an
//! `items` sequence. Scalar fields may be written as strings, numbers or
//! booleans (`year: 2022` is fine). `authors` and `tags` accept either a
//! comma-separated string or a sequence. Unknown keys with scalar or list
//! values are kept as extra fields so pages can facet on them; nulls and
//! nested mappings are skipped.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::error::{ListViewError, Result};
use crate::extract::split_list;
use crate::types::{Item, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(CatalogFormat::Yaml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(ListViewError::InvalidCatalog(format!(
                "unsupported catalog extension for {} (expected .yaml, .yml or .json)",
                path.display()
            ))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    One(Scalar),
    Many(Vec<Scalar>),
}

impl TextOrList {
    fn into_list(self) -> Vec<String> {
        match self {
            TextOrList::One(one) => split_list(&one.into_string())
                .into_iter()
                .map(str::to_string)
                .collect(),
            TextOrList::Many(many) => many
                .into_iter()
                .map(|s| s.into_string().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    fn into_text(self) -> String {
        match self {
            TextOrList::One(one) => one.into_string(),
            many @ TextOrList::Many(_) => many.into_list().join(", "),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExtraValue {
    Kept(TextOrList),
    Skipped(IgnoredAny),
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    id: Option<Scalar>,
    #[serde(default, alias = "name")]
    title: Option<Scalar>,
    #[serde(default, alias = "author")]
    authors: Option<TextOrList>,
    #[serde(default)]
    year: Option<Scalar>,
    #[serde(default, alias = "role")]
    category: Option<Scalar>,
    #[serde(default, alias = "tag")]
    tags: Option<TextOrList>,
    #[serde(default, alias = "abstract", alias = "description", alias = "bio")]
    summary: Option<Scalar>,
    #[serde(flatten)]
    extra: BTreeMap<String, ExtraValue>,
}

#[derive(Deserialize)]
struct WrappedCatalog {
    items: Vec<RawItem>,
}

/// Top-level shape only, so the real parse reports errors against one layout
#[derive(Deserialize)]
#[serde(untagged)]
enum DocShape {
    Sequence(Vec<IgnoredAny>),
    Other(IgnoredAny),
}

fn decode<T: DeserializeOwned>(content: &str, format: CatalogFormat) -> Result<T> {
    match format {
        CatalogFormat::Yaml => serde_yaml_ng::from_str(content)
            .map_err(|e| ListViewError::InvalidCatalog(e.to_string())),
        CatalogFormat::Json => serde_json::from_str(content)
            .map_err(|e| ListViewError::InvalidCatalog(e.to_string())),
    }
}

fn text(value: Option<Scalar>) -> String {
    value
        .map(Scalar::into_string)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn convert(index: usize, raw: RawItem) -> Item {
    let id = match raw.id.map(Scalar::into_string) {
        Some(id) if !id.trim().is_empty() => ItemId::new(id.trim()),
        _ => ItemId::positional(index),
    };

    Item {
        id,
        title: text(raw.title),
        authors: raw.authors.map(TextOrList::into_text).unwrap_or_default(),
        year: text(raw.year),
        category: text(raw.category),
        tags: raw.tags.map(TextOrList::into_list).unwrap_or_default(),
        summary: text(raw.summary),
        extra: raw
            .extra
            .into_iter()
            .filter_map(|(key, value)| match value {
                ExtraValue::Kept(value) => Some((key.to_lowercase(), value.into_text())),
                ExtraValue::Skipped(_) => None,
            })
            .collect(),
    }
}

/// Parse catalog text. Item ids must be unique.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Vec<Item>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let raw_items = match decode::<DocShape>(content, format)? {
        DocShape::Sequence(_) => decode::<Vec<RawItem>>(content, format)?,
        DocShape::Other(_) => decode::<WrappedCatalog>(content, format)?.items,
    };

    let items: Vec<Item> = raw_items
        .into_iter()
        .enumerate()
        .map(|(index, raw)| convert(index, raw))
        .collect();

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(&item.id) {
            return Err(ListViewError::DuplicateItemId(item.id.to_string()));
        }
    }

    Ok(items)
}

/// Read and parse a catalog file, choosing the format by extension
pub fn load_catalog(path: &Path) -> Result<Vec<Item>> {
    let format = CatalogFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        ListViewError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read catalog at {}: {}", path.display(), e),
        ))
    })?;
    let items = parse_catalog(&content, format)?;
    tracing::debug!(path = %path.display(), count = items.len(), "Loaded catalog");
    Ok(items)
}
