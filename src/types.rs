use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::ListViewError;

/// Wildcard facet value that matches every item
pub const FACET_ALL: &str = "all";

/// Storage key holding the persisted view mode
pub const VIEW_MODE_KEY: &str = "view-mode";

/// Storage key holding the persisted colour theme
pub const THEME_KEY: &str = "theme";

/// Stable identity of an item within a collection
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    /// Identity assigned to records that do not carry one, by catalog position
    pub fn positional(index: usize) -> Self {
        ItemId(format!("item-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ItemId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

/// A read-only content record (publication, team member, research project)
///
/// Fields are plain display strings; predicate evaluation normalizes them
/// on the fly so the record keeps the text exactly as the page shows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    /// Comma-separated author (or member) names
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub authors: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub year: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Abstract, description or biography text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = authors.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

/// Named field of an [`Item`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Authors,
    Year,
    Category,
    Tags,
    Summary,
    Extra(String),
}

impl Field {
    /// Parse a field name, falling back to an extra field for unknown names
    pub fn parse(name: &str) -> Self {
        let lowered = name.trim().to_lowercase();
        match lowered.as_str() {
            "title" | "name" => Field::Title,
            "authors" | "author" => Field::Authors,
            "year" => Field::Year,
            "category" => Field::Category,
            "tags" | "tag" => Field::Tags,
            "summary" | "abstract" | "description" | "bio" => Field::Summary,
            _ => Field::Extra(lowered),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => f.write_str("title"),
            Field::Authors => f.write_str("authors"),
            Field::Year => f.write_str("year"),
            Field::Category => f.write_str("category"),
            Field::Tags => f.write_str("tags"),
            Field::Summary => f.write_str("summary"),
            Field::Extra(name) => f.write_str(name),
        }
    }
}

/// Display layout choice, persisted across visits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// The literal written to durable storage
    pub fn storage_value(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid-view",
            ViewMode::List => "list-view",
        }
    }

    /// Decode a stored literal. Anything but the two known literals is rejected.
    pub fn from_storage_value(value: &str) -> Option<Self> {
        match value {
            "grid-view" => Some(ViewMode::Grid),
            "list-view" => Some(ViewMode::List),
            _ => None,
        }
    }
}

enum_display_fromstr!(
    ViewMode,
    ListViewError::invalid_view_mode,
    {
        Grid => "grid" | "grid-view",
        List => "list" | "list-view",
    }
);

/// Colour theme, persisted across visits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn storage_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_storage_value(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

enum_display_fromstr!(
    Theme,
    ListViewError::invalid_theme,
    {
        Light => "light",
        Dark => "dark",
    }
);

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_view_mode_storage_literals() {
        assert_eq!(ViewMode::Grid.storage_value(), "grid-view");
        assert_eq!(ViewMode::List.storage_value(), "list-view");
        assert_eq!(
            ViewMode::from_storage_value("list-view"),
            Some(ViewMode::List)
        );
        assert_eq!(ViewMode::from_storage_value("list"), None);
        assert_eq!(ViewMode::from_storage_value("LIST-VIEW"), None);
        assert_eq!(ViewMode::from_storage_value(""), None);
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!(ViewMode::from_str("grid").unwrap(), ViewMode::Grid);
        assert_eq!(ViewMode::from_str("List").unwrap(), ViewMode::List);
        assert_eq!(ViewMode::from_str("list-view").unwrap(), ViewMode::List);
        assert!(ViewMode::from_str("table").is_err());
    }

    #[test]
    fn test_view_mode_default_is_grid() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
    }

    #[test]
    fn test_theme_toggle_and_literals() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::from_storage_value("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_storage_value("sepia"), None);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_field_parse_aliases() {
        assert_eq!(Field::parse("Title"), Field::Title);
        assert_eq!(Field::parse("author"), Field::Authors);
        assert_eq!(Field::parse("abstract"), Field::Summary);
        assert_eq!(Field::parse("tag"), Field::Tags);
        assert_eq!(Field::parse("Email"), Field::Extra("email".to_string()));
    }

    #[test]
    fn test_positional_id() {
        assert_eq!(ItemId::positional(3).as_str(), "item-3");
    }
}
