//! Field-extraction adapters
//!
//! Predicates never read [`Item`] fields directly; they go through a
//! [`FieldExtractor`] so each page can decide which text a facet or the
//! search box looks at.

use std::borrow::Cow;
use std::sync::Arc;

use crate::types::{Field, Item};

/// Normalize text for comparison: trimmed and lower-cased
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Reads a piece of an item for predicate evaluation
pub trait FieldExtractor: Send + Sync {
    /// Name used in logs and CLI output
    fn name(&self) -> Cow<'_, str>;

    /// The whole field as a single string
    fn text<'a>(&self, item: &'a Item) -> Cow<'a, str>;

    /// The field split into its elements (comma-separated lists, tag lists)
    fn values<'a>(&self, item: &'a Item) -> Vec<Cow<'a, str>> {
        match self.text(item) {
            Cow::Borrowed(text) => split_list(text).into_iter().map(Cow::Borrowed).collect(),
            Cow::Owned(text) => split_list(&text)
                .into_iter()
                .map(|s| Cow::Owned(s.to_string()))
                .collect(),
        }
    }
}

/// Split a comma-separated list into trimmed, non-empty elements
pub fn split_list(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

impl FieldExtractor for Field {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn text<'a>(&self, item: &'a Item) -> Cow<'a, str> {
        match self {
            Field::Title => Cow::Borrowed(&item.title),
            Field::Authors => Cow::Borrowed(&item.authors),
            Field::Year => Cow::Borrowed(&item.year),
            Field::Category => Cow::Borrowed(&item.category),
            Field::Tags => Cow::Owned(item.tags.join(", ")),
            Field::Summary => Cow::Borrowed(&item.summary),
            Field::Extra(name) => item
                .extra
                .get(name)
                .map(|v| Cow::Borrowed(v.as_str()))
                .unwrap_or(Cow::Borrowed("")),
        }
    }

    fn values<'a>(&self, item: &'a Item) -> Vec<Cow<'a, str>> {
        match self {
            // Tags are already a list; a tag may itself contain a comma
            Field::Tags => item
                .tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(Cow::Borrowed)
                .collect(),
            _ => match self.text(item) {
                Cow::Borrowed(text) => split_list(text).into_iter().map(Cow::Borrowed).collect(),
                Cow::Owned(text) => split_list(&text)
                    .into_iter()
                    .map(|s| Cow::Owned(s.to_string()))
                    .collect(),
            },
        }
    }
}

/// Extractor backed by a closure, for page-specific derived text
pub struct FnExtractor<F> {
    name: String,
    extract: F,
}

impl<F> FnExtractor<F>
where
    F: Fn(&Item) -> String + Send + Sync,
{
    pub fn new(name: impl Into<String>, extract: F) -> Self {
        Self {
            name: name.into(),
            extract,
        }
    }
}

impl<F> FieldExtractor for FnExtractor<F>
where
    F: Fn(&Item) -> String + Send + Sync,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn text<'a>(&self, item: &'a Item) -> Cow<'a, str> {
        Cow::Owned((self.extract)(item))
    }
}

/// Shared handle to an extractor
pub type SharedExtractor = Arc<dyn FieldExtractor>;

/// Wrap a plain field as a shared extractor
pub fn field(field: Field) -> SharedExtractor {
    Arc::new(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item::new("p-1", "Seismic Imaging")
            .with_authors("Patel, A. Rao ,  ")
            .with_year("2022")
            .with_tag("seismology")
            .with_tag("imaging, inversion")
            .with_extra("doi", "10.1000/xyz")
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Soil MAPPING \n"), "soil mapping");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_split_list_drops_empty_elements() {
        assert_eq!(split_list("Patel, A. Rao ,  "), vec!["Patel", "A. Rao"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_field_text() {
        let item = sample();
        assert_eq!(Field::Title.text(&item), "Seismic Imaging");
        assert_eq!(Field::Year.text(&item), "2022");
        assert_eq!(Field::Tags.text(&item), "seismology, imaging, inversion");
        assert_eq!(
            Field::Extra("doi".to_string()).text(&item),
            "10.1000/xyz"
        );
        assert_eq!(Field::Extra("missing".to_string()).text(&item), "");
    }

    #[test]
    fn test_field_values() {
        let item = sample();
        assert_eq!(Field::Authors.values(&item), vec!["Patel", "A. Rao"]);
        // Tag elements are kept whole
        assert_eq!(
            Field::Tags.values(&item),
            vec!["seismology", "imaging, inversion"]
        );
    }

    #[test]
    fn test_fn_extractor() {
        let item = sample();
        let extractor = FnExtractor::new("decade", |item: &Item| {
            format!("{}0s", &item.year[..3])
        });
        assert_eq!(extractor.name(), "decade");
        assert_eq!(extractor.text(&item), "2020s");
        assert_eq!(extractor.values(&item), vec!["2020s"]);
    }
}
