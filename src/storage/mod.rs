//! Durable key-value storage for client preferences
//!
//! A [`PersistenceAdapter`] is the browser's local storage, abstracted:
//! string keys, string values, and either operation may fail (storage
//! disabled, private browsing, unwritable disk). Callers that read
//! preferences go through [`load_view_mode`] and friends, which turn every
//! failure into "no saved preference".

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::storage_error::{Result, StorageError};
use crate::types::{THEME_KEY, Theme, VIEW_MODE_KEY, ViewMode};

/// Name of the preferences file inside a state directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// A key-value string store with fallible operations
pub trait PersistenceAdapter: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store, mostly for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl PersistenceAdapter for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that is never available
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStore;

impl PersistenceAdapter for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(StorageError::Unavailable("storage is disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(StorageError::Unavailable("storage is disabled".to_string()))
    }
}

/// Store persisted as a flat JSON object on disk
///
/// Every write rewrites the whole file; the lock only serializes writers
/// within this process.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store in `dir`/preferences.json
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILE))
    }

    /// Store in the platform data directory
    pub fn in_default_location() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "listview").ok_or_else(|| {
            StorageError::Unavailable("no home directory for preferences".to_string())
        })?;
        Ok(Self::in_dir(dirs.data_dir()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            StorageError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read preferences at {}: {}",
                    self.path.display(),
                    e
                ),
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            StorageError::Corrupted(format!("{}: {}", self.path.display(), e))
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .map_err(|_| StorageError::AccessDenied(parent.to_path_buf()))?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content).map_err(|e| {
            StorageError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write preferences at {}: {}",
                    self.path.display(),
                    e
                ),
            ))
        })
    }
}

impl PersistenceAdapter for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

// ============================================================================
// Preference helpers
// ============================================================================

/// Read a key, treating any storage failure as absent
pub fn read_or_absent(store: &dyn PersistenceAdapter, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read preference '{key}': {e}");
            None
        }
    }
}

/// Write a key, logging and swallowing any storage failure.
/// Returns whether the value was stored.
pub fn write_or_warn(store: &dyn PersistenceAdapter, key: &str, value: &str) -> bool {
    match store.set(key, value) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to save preference '{key}': {e}");
            false
        }
    }
}

/// Restore the view mode stored under `key`, defaulting to grid
pub fn load_view_mode(store: &dyn PersistenceAdapter, key: &str) -> ViewMode {
    match read_or_absent(store, key) {
        Some(value) => ViewMode::from_storage_value(&value).unwrap_or_else(|| {
            tracing::warn!("Ignoring unrecognized view mode '{value}'");
            ViewMode::default()
        }),
        None => ViewMode::default(),
    }
}

pub fn save_view_mode(store: &dyn PersistenceAdapter, key: &str, mode: ViewMode) -> bool {
    write_or_warn(store, key, mode.storage_value())
}

/// Restore the theme: a saved choice wins, otherwise the system preference
pub fn load_theme(store: &dyn PersistenceAdapter, key: &str, system_prefers_dark: bool) -> Theme {
    let saved = read_or_absent(store, key).and_then(|value| Theme::from_storage_value(&value));
    match saved {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

pub fn save_theme(store: &dyn PersistenceAdapter, key: &str, theme: Theme) -> bool {
    write_or_warn(store, key, theme.storage_value())
}

/// Default-key shortcut for [`load_view_mode`]
pub fn restore_view_mode(store: &dyn PersistenceAdapter) -> ViewMode {
    load_view_mode(store, VIEW_MODE_KEY)
}

/// Default-key shortcut for [`load_theme`]
pub fn restore_theme(store: &dyn PersistenceAdapter, system_prefers_dark: bool) -> Theme {
    load_theme(store, THEME_KEY, system_prefers_dark)
}
