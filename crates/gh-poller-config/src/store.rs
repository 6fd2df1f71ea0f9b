//! Key-value persistence
//!
//! Settings are stored as a JSON string under a single key. The store is
//! injected so callers depend on the capability, not on a file location.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::Settings;

/// Key holding the JSON-serialized settings
pub const SETTINGS_KEY: &str = "settings";

/// String key-value storage
pub trait KeyValueStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file
///
/// The file is read once on open and rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing or unparseable file is an empty store; the next `set`
    /// replaces an unparseable file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store file: {:?}", path))?;
            match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Failed to parse store file {:?}, starting empty: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            log::debug!("No store file at {:?}, starting empty", path);
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            serde_json::to_string_pretty(&self.entries).context("Failed to serialize store")?;

        // An interrupted write leaves the previous file intact
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write store file: {:?}", tmp_path))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace store file: {:?}", self.path))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Load settings from the store
///
/// A missing key yields default settings. An unparseable value is logged
/// and also yields defaults.
pub fn load_settings(store: &dyn KeyValueStore) -> Settings {
    let Some(raw) = store.get(SETTINGS_KEY) else {
        log::info!("No stored settings found, using defaults");
        return Settings::default();
    };

    match serde_json::from_str(&raw) {
        Ok(settings) => {
            log::info!("Loaded settings from store");
            settings
        }
        Err(e) => {
            log::warn!("Failed to parse stored settings: {}", e);
            Settings::default()
        }
    }
}

/// Persist settings to the store
pub fn save_settings(store: &mut dyn KeyValueStore, settings: &Settings) -> Result<()> {
    let raw = serde_json::to_string(settings).context("Failed to serialize settings")?;
    store.set(SETTINGS_KEY, &raw)?;
    log::info!("Saved settings ({} users)", settings.users.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_settings() -> Settings {
        Settings {
            users: vec!["alice".to_string(), "carol".to_string()],
            token: "ghp_test".to_string(),
            reviewer_name: "bob".to_string(),
            organization: "acme".to_string(),
        }
    }

    #[test]
    fn test_missing_key_yields_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_corrupt_value_yields_defaults() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_saved_settings_are_loaded_back() {
        let mut store = MemoryStore::new();
        save_settings(&mut store, &sample_settings()).unwrap();

        let raw = store.get(SETTINGS_KEY).unwrap();
        assert!(raw.contains("\"reviewerName\":\"bob\""));
        assert_eq!(load_settings(&store), sample_settings());
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.get(SETTINGS_KEY).is_none());
        save_settings(&mut store, &sample_settings()).unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.path(), path.as_path());
        assert_eq!(load_settings(&reopened), sample_settings());
    }

    #[test]
    fn test_truncated_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, r#"{"settings": "{\"users\":[\"a"#).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.get(SETTINGS_KEY).is_none());
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_save_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        save_settings(&mut store, &sample_settings()).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(load_settings(&reopened), sample_settings());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
