mod config;
mod facets;
mod filter;
mod prefs;
mod validate;

pub use config::{cmd_config_init, cmd_config_show};
pub use facets::cmd_facets;
pub use filter::{FilterOptions, cmd_filter};
pub use prefs::{cmd_theme, cmd_view_mode};
pub use validate::cmd_validate_contact;

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::error::{ListViewError, Result};
use crate::storage::FileStore;

/// Where a command finds its configuration and stored preferences
#[derive(Debug, Clone)]
pub struct AppContext {
    pub state_dir: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl AppContext {
    /// Resolve the state directory (flag, env, then platform default) and load config
    pub fn resolve(state_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self> {
        let state_dir = match state_dir {
            Some(dir) => dir,
            None => directories::ProjectDirs::from("", "", "listview")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    ListViewError::Config(
                        "cannot determine a state directory; pass --state-dir".to_string(),
                    )
                })?,
        };
        let config_path = config_path.unwrap_or_else(|| Config::config_path(&state_dir));
        let config = Config::load(&config_path)?;

        tracing::debug!(
            state_dir = %state_dir.display(),
            config = %config_path.display(),
            "Resolved command context"
        );

        Ok(Self {
            state_dir,
            config_path,
            config,
        })
    }

    pub fn store(&self) -> Arc<FileStore> {
        Arc::new(FileStore::in_dir(&self.state_dir))
    }
}

/// JSON payload plus an optional human-readable rendering of the same result
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as JSON when requested, otherwise the text (or JSON if there is no text)
    pub fn print(self, output_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !output_json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
