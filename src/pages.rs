//! Presets for the three list pages of the site
//!
//! Each page supplies its own searchable fields, facets and item noun but
//! shares the controller contract.

use serde::{Deserialize, Serialize};

use crate::announce::ItemNoun;
use crate::controller::ListViewControllerBuilder;
use crate::error::ListViewError;
use crate::query::FacetDef;
use crate::types::{Field, Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Publications,
    Research,
    Team,
}

impl PageKind {
    /// All valid string representations of this enum.
    pub const ALL_STRINGS: &[&str] = &["publications", "research", "team"];

    pub fn search_fields(&self) -> &'static [Field] {
        match self {
            PageKind::Publications => &[Field::Title, Field::Authors, Field::Year, Field::Summary],
            PageKind::Research => &[Field::Title, Field::Summary],
            PageKind::Team => &[Field::Title, Field::Category, Field::Summary],
        }
    }

    /// Facet definitions with allowed values taken from `items`
    pub fn facets(&self, items: &[Item]) -> Vec<FacetDef> {
        let defs = match self {
            PageKind::Publications => vec![
                FacetDef::exact("year", Field::Year),
                FacetDef::exact("category", Field::Category),
                FacetDef::multi("author", Field::Authors),
            ],
            PageKind::Research => vec![
                FacetDef::exact("category", Field::Category),
                FacetDef::multi("tag", Field::Tags),
            ],
            PageKind::Team => vec![FacetDef::exact("role", Field::Category)],
        };
        defs.into_iter()
            .map(|def| def.with_allowed_from(items))
            .collect()
    }

    pub fn noun(&self) -> ItemNoun {
        match self {
            PageKind::Publications => ItemNoun::new("publication", "publications"),
            PageKind::Research => ItemNoun::new("project", "projects"),
            PageKind::Team => ItemNoun::new("team member", "team members"),
        }
    }

    /// A controller builder preloaded with this page's facets and fields
    pub fn builder(&self, items: Vec<Item>) -> ListViewControllerBuilder {
        let facets = self.facets(&items);
        let builder = ListViewControllerBuilder::new(items)
            .facets(facets)
            .noun(self.noun());
        self.search_fields()
            .iter()
            .cloned()
            .fold(builder, |builder, on| builder.search_field(on))
    }
}

enum_display_fromstr!(
    PageKind,
    ListViewError::invalid_page_kind,
    {
        Publications => "publications" | "publication" | "pubs",
        Research => "research" | "projects",
        Team => "team" | "people",
    }
);

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::types::ItemId;

    fn research_items() -> Vec<Item> {
        vec![
            Item::new("r0", "Coastal Erosion")
                .with_category("field")
                .with_tag("coast")
                .with_tag("sediment")
                .with_summary("Monitoring shoreline change"),
            Item::new("r1", "Sediment Transport")
                .with_category("modelling")
                .with_tag("sediment")
                .with_summary("Numerical flow models"),
        ]
    }

    #[test]
    fn test_parse_page_kind() {
        assert_eq!(PageKind::from_str("Team").unwrap(), PageKind::Team);
        assert_eq!(PageKind::from_str("pubs").unwrap(), PageKind::Publications);
        assert!(matches!(
            PageKind::from_str("blog"),
            Err(ListViewError::InvalidPageKind(_))
        ));
    }

    #[test]
    fn test_research_tag_facet() {
        let mut controller = PageKind::Research.builder(research_items()).build().unwrap();
        let snapshot = controller.set_facet("tag", "sediment").unwrap();
        assert_eq!(snapshot.visible_count(), 2);
        assert_eq!(
            snapshot.announcement.as_ref().map(|a| a.message.as_str()),
            Some("2 projects found")
        );
    }

    #[test]
    fn test_research_search_ignores_tags() {
        let mut controller = PageKind::Research.builder(research_items()).build().unwrap();
        controller.set_query("coast");
        let snapshot = controller.flush().unwrap();
        // "coast" only appears as a tag on r0 and in "Coastal" in its title
        assert_eq!(snapshot.result.visible, vec![ItemId::from("r0")]);
    }

    #[test]
    fn test_team_role_facet() {
        let items = vec![
            Item::new("t0", "Ada").with_category("PhD Student"),
            Item::new("t1", "Grace").with_category("Postdoc"),
        ];
        let mut controller = PageKind::Team.builder(items).build().unwrap();
        let snapshot = controller.set_facet("role", "phd student").unwrap();
        assert_eq!(snapshot.result.visible, vec![ItemId::from("t0")]);
        assert_eq!(
            snapshot.announcement.as_ref().map(|a| a.message.as_str()),
            Some("1 team member found")
        );
    }

    #[test]
    fn test_allowed_values_come_from_items() {
        let facets = PageKind::Research.facets(&research_items());
        let tags: Vec<&str> = facets[1].allowed_values().collect();
        assert_eq!(tags, vec!["coast", "sediment"]);
    }
}
