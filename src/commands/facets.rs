use std::path::Path;

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::CommandOutput;
use crate::catalog::load_catalog;
use crate::error::Result;
use crate::pages::PageKind;

#[derive(Tabled)]
struct FacetRow {
    #[tabled(rename = "Facet")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Values")]
    values: String,
}

/// Show the facets a page offers for a catalog
pub fn cmd_facets(catalog: &Path, kind: PageKind, output_json: bool) -> Result<()> {
    let items = load_catalog(catalog)?;
    let facets = kind.facets(&items);

    let json_facets: Vec<_> = facets
        .iter()
        .map(|def| {
            json!({
                "name": def.name(),
                "kind": def.kind().to_string(),
                "field": def.extractor().name(),
                "values": def.allowed_values().collect::<Vec<_>>(),
            })
        })
        .collect();

    let rows: Vec<FacetRow> = facets
        .iter()
        .map(|def| FacetRow {
            name: def.name().to_string(),
            kind: def.kind().to_string(),
            field: def.extractor().name().into_owned(),
            values: def.allowed_values().collect::<Vec<_>>().join(", "),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    CommandOutput::new(json!({
        "kind": kind.to_string(),
        "items": items.len(),
        "facets": json_facets,
    }))
    .with_text(table.to_string())
    .print(output_json)
}
