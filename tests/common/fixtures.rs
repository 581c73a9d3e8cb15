use listview::Item;

/// The two-item collection used by the search and combined scenarios
pub fn scenario_items() -> Vec<Item> {
    vec![
        Item::new("item0", "Seismic Imaging")
            .with_authors("Patel")
            .with_year("2022")
            .with_category("geophysics"),
        Item::new("item1", "Soil Mapping")
            .with_authors("Rao")
            .with_year("2021")
            .with_category("soil science"),
    ]
}

/// Same scenario, but without any geophysics entry
pub fn items_without_geophysics() -> Vec<Item> {
    vec![
        Item::new("item0", "Seismic Imaging")
            .with_authors("Patel")
            .with_year("2022")
            .with_category("imaging"),
        Item::new("item1", "Soil Mapping")
            .with_authors("Rao")
            .with_year("2021")
            .with_category("soil science"),
    ]
}

pub const PUBLICATIONS_YAML: &str = r#"items:
  - id: seismic
    title: Seismic Imaging
    authors: [Patel, Okafor]
    year: 2022
    category: journal
    abstract: Full-waveform imaging of the crust
  - id: soil
    title: Soil Mapping
    authors: Rao
    year: 2021
    category: journal
    abstract: Digital soil maps from remote sensing
  - id: rivers
    title: River Sediment Budgets
    authors: Okafor, Rao
    year: 2021
    category: conference
    abstract: Sediment flux in braided rivers
"#;

pub const TEAM_JSON: &str = r#"[
  {"id": "ada", "name": "Ada Lovelace", "role": "PhD Student", "bio": "Numerical methods"},
  {"id": "grace", "name": "Grace Hopper", "role": "Postdoc", "bio": "Compilers for soil models"}
]"#;
