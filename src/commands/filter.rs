use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{AppContext, CommandOutput};
use crate::announce::LiveRegion;
use crate::catalog::load_catalog;
use crate::error::{ListViewError, Result};
use crate::pages::PageKind;
use crate::query::SortKey;
use crate::types::{Item, ItemId};

pub struct FilterOptions {
    pub catalog: PathBuf,
    pub kind: PageKind,
    pub facets: Vec<(String, String)>,
    pub query: Option<String>,
    pub sort: Option<SortKey>,
    pub page: usize,
    pub per_page: Option<usize>,
    pub output_json: bool,
}

/// A row in the filtered items table
#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl ItemRow {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.clone(),
            year: item.year.clone(),
            category: item.category.clone(),
        }
    }
}

/// Run a catalog through a page controller and print the visible page
pub fn cmd_filter(ctx: &AppContext, opts: FilterOptions) -> Result<()> {
    let items = load_catalog(&opts.catalog)?;

    let mut config = ctx.config.list.clone();
    if let Some(per_page) = opts.per_page {
        config.per_page = per_page;
    }

    let region = Arc::new(LiveRegion::new());
    let Some(mut controller) = opts
        .kind
        .builder(items)
        .config(config)
        .store(ctx.store())
        .announcer(region.clone())
        .sort(opts.sort)
        .build_if_populated()?
    else {
        return CommandOutput::new(json!({
            "kind": opts.kind.to_string(),
            "total": 0,
            "visible": [],
        }))
        .with_text(format!("No {} in catalog", opts.kind.noun().plural))
        .print(opts.output_json);
    };

    let available = controller.facet_names().collect::<Vec<_>>().join(", ");
    for (name, value) in &opts.facets {
        controller.set_facet(name, value).map_err(|e| match e {
            ListViewError::UnknownFacet(name) => {
                ListViewError::UnknownFacet(format!("{name} (available: {available})"))
            }
            other => other,
        })?;
    }
    if let Some(query) = &opts.query {
        controller.set_query(query);
        controller.flush();
    }
    // Every recompute resets paging, so the requested page goes last
    let snapshot = controller.set_page(opts.page).clone();

    let by_id: HashMap<&ItemId, &Item> = controller.items().iter().map(|i| (&i.id, i)).collect();
    let page_items: Vec<&Item> = snapshot
        .page
        .items
        .iter()
        .filter_map(|id| by_id.get(id).copied())
        .collect();

    let facets: Vec<_> = snapshot
        .facets
        .iter()
        .map(|(name, value)| json!({"name": name, "value": value}))
        .collect();

    let json_output = json!({
        "kind": opts.kind.to_string(),
        "total": snapshot.result.total(),
        "visible_count": snapshot.visible_count(),
        "no_results": snapshot.no_results(),
        "announcement": snapshot.announcement.as_ref().map(|a| a.message.clone()),
        "query": snapshot.query,
        "facets": facets,
        "sort": snapshot.sort.map(|s| s.to_string()),
        "view_mode": snapshot.view_mode.to_string(),
        "page": snapshot.page.page,
        "total_pages": snapshot.page.total_pages,
        "items": page_items,
    });

    let mut text = String::new();
    if snapshot.no_results() {
        text.push_str(&format!(
            "{}\n",
            format!("No {} match the current filters", opts.kind.noun().plural).yellow()
        ));
    } else {
        let rows: Vec<ItemRow> = page_items.iter().map(|item| ItemRow::from_item(item)).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        text.push_str(&format!("{table}\n"));
    }
    if let Some(announcement) = region.current() {
        text.push_str(&format!("{}\n", announcement.cyan()));
    }
    text.push_str(&format!(
        "{}",
        format!(
            "Page {}/{} · {} of {} shown",
            snapshot.page.page,
            snapshot.page.total_pages,
            snapshot.visible_count(),
            snapshot.result.total()
        )
        .dimmed()
    ));

    if snapshot.page.page != opts.page.max(1) {
        tracing::warn!(
            requested = opts.page,
            shown = snapshot.page.page,
            "Requested page is out of range"
        );
    }

    CommandOutput::new(json_output)
        .with_text(text)
        .print(opts.output_json)
}
