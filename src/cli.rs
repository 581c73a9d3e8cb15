use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::pages::PageKind;
use crate::query::SortKey;
use crate::types::{Theme, ViewMode};

#[derive(Parser)]
#[command(name = "listview")]
#[command(about = "Filter, search and sort list page content")]
#[command(version)]
pub struct Cli {
    /// Directory holding config.yaml and stored preferences
    #[arg(long, global = true, env = "LISTVIEW_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Configuration file (default: <state-dir>/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter a catalog the way a list page would and print the visible items
    #[command(visible_alias = "f")]
    Filter {
        /// Catalog file (.yaml, .yml or .json)
        catalog: PathBuf,

        /// Page preset: publications, research, team
        #[arg(short, long, default_value = "publications", value_parser = parse_page_kind)]
        kind: PageKind,

        /// Facet selection as NAME=VALUE (repeatable)
        #[arg(short, long = "facet", value_parser = parse_facet_assignment)]
        facets: Vec<(String, String)>,

        /// Free-text search query
        #[arg(short, long)]
        query: Option<String>,

        /// Sort: year-asc, year-desc, title-asc, title-desc
        #[arg(short, long, value_parser = parse_sort_key)]
        sort: Option<SortKey>,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Items per page, 0 shows everything (default: from config)
        #[arg(long)]
        per_page: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the facets of a page preset and their selectable values
    Facets {
        /// Catalog file (.yaml, .yml or .json)
        catalog: PathBuf,

        /// Page preset: publications, research, team
        #[arg(short, long, default_value = "publications", value_parser = parse_page_kind)]
        kind: PageKind,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or set the stored view mode
    ViewMode {
        /// New view mode: grid or list
        #[arg(value_parser = parse_view_mode)]
        mode: Option<ViewMode>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show, set or toggle the stored colour theme
    Theme {
        /// New theme: light or dark
        #[arg(value_parser = parse_theme, conflicts_with = "toggle")]
        theme: Option<Theme>,

        /// Switch between light and dark
        #[arg(long)]
        toggle: bool,

        /// Treat the system as preferring a dark colour scheme
        #[arg(long)]
        system_dark: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate contact form input
    ValidateContact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        message: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Display the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            AppContext, FilterOptions, cmd_config_init, cmd_config_show, cmd_facets, cmd_filter,
            cmd_theme, cmd_validate_contact, cmd_view_mode,
        };

        let ctx = AppContext::resolve(self.state_dir, self.config)?;

        match self.command {
            Commands::Filter {
                catalog,
                kind,
                facets,
                query,
                sort,
                page,
                per_page,
                json,
            } => cmd_filter(
                &ctx,
                FilterOptions {
                    catalog,
                    kind,
                    facets,
                    query,
                    sort,
                    page,
                    per_page,
                    output_json: json,
                },
            ),
            Commands::Facets {
                catalog,
                kind,
                json,
            } => cmd_facets(&catalog, kind, json),
            Commands::ViewMode { mode, json } => cmd_view_mode(&ctx, mode, json),
            Commands::Theme {
                theme,
                toggle,
                system_dark,
                json,
            } => cmd_theme(&ctx, theme, toggle, system_dark, json),
            Commands::ValidateContact {
                name,
                email,
                message,
                json,
            } => cmd_validate_contact(&name, &email, &message, json),
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(&ctx, json),
                ConfigAction::Init { force } => cmd_config_init(&ctx, force),
            },
        }
    }
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_page_kind(s: &str) -> Result<PageKind, String> {
    parse_with_validation(
        s,
        |v| PageKind::from_str(v).map_err(|_| String::new()),
        "page kind",
        PageKind::ALL_STRINGS,
    )
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    parse_with_validation(
        s,
        |v| SortKey::from_str(v).map_err(|_| String::new()),
        "sort key",
        SortKey::ALL_STRINGS,
    )
}

fn parse_view_mode(s: &str) -> Result<ViewMode, String> {
    parse_with_validation(
        s,
        |v| ViewMode::from_str(v).map_err(|_| String::new()),
        "view mode",
        &["grid", "list"],
    )
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    parse_with_validation(
        s,
        |v| Theme::from_str(v).map_err(|_| String::new()),
        "theme",
        &["light", "dark"],
    )
}

fn parse_facet_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!(
            "Invalid facet '{s}'. Expected NAME=VALUE, e.g. year=2021"
        )),
    }
}
