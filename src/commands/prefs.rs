//! Stored preference commands.
//!
//! - `view-mode`: show or set the list layout
//! - `theme`: show, set or toggle the colour theme

use owo_colors::OwoColorize;
use serde_json::json;

use super::{AppContext, CommandOutput};
use crate::error::Result;
use crate::storage::{PersistenceAdapter, load_theme, load_view_mode};
use crate::types::{Theme, ViewMode};

/// Show the stored view mode, or store a new one
pub fn cmd_view_mode(ctx: &AppContext, mode: Option<ViewMode>, output_json: bool) -> Result<()> {
    let store = ctx.store();
    let key = &ctx.config.list.view_mode_key;

    let (mode, changed) = match mode {
        Some(mode) => {
            store.set(key, mode.storage_value())?;
            (mode, true)
        }
        None => (load_view_mode(store.as_ref(), key), false),
    };

    let text = if changed {
        format!("View mode set to {}", mode.to_string().cyan())
    } else {
        mode.to_string()
    };

    CommandOutput::new(json!({
        "view_mode": mode.to_string(),
        "stored_as": mode.storage_value(),
        "changed": changed,
        "file": store.path().to_string_lossy(),
    }))
    .with_text(text)
    .print(output_json)
}

/// Show, set or toggle the stored theme
pub fn cmd_theme(
    ctx: &AppContext,
    theme: Option<Theme>,
    toggle: bool,
    system_dark: bool,
    output_json: bool,
) -> Result<()> {
    let store = ctx.store();
    let key = &ctx.config.list.theme_key;
    let current = load_theme(store.as_ref(), key, system_dark);

    let next = match (theme, toggle) {
        (Some(theme), _) => Some(theme),
        (None, true) => Some(current.toggled()),
        (None, false) => None,
    };
    if let Some(next) = next {
        store.set(key, next.storage_value())?;
    }
    let theme = next.unwrap_or(current);

    let text = match next {
        Some(theme) => format!("Theme set to {}", theme.to_string().cyan()),
        None => theme.to_string(),
    };

    CommandOutput::new(json!({
        "theme": theme.to_string(),
        "changed": next.is_some(),
        "file": store.path().to_string_lossy(),
    }))
    .with_text(text)
    .print(output_json)
}
