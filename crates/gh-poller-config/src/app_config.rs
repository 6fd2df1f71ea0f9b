//! Application configuration
//!
//! Configuration loaded from .gh-poller.toml. User settings (token, users,
//! filters) are not part of this file; they live in the settings store.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = ".gh-poller.toml";

/// Application configuration loaded from .gh-poller.toml
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// GitHub API base URI (None = public GitHub)
    #[serde(default)]
    pub api_base_uri: Option<String>,

    /// Settings store file (None = platform config directory)
    #[serde(default)]
    pub store_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load config from the working directory, then the home directory
    pub fn load() -> Self {
        let home = dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME));
        Self::load_first(std::iter::once(PathBuf::from(CONFIG_FILE_NAME)).chain(home))
    }

    /// Use the first readable file among `candidates`
    ///
    /// A malformed file is not skipped in favour of a later one: it yields
    /// the defaults.
    fn load_first(candidates: impl IntoIterator<Item = PathBuf>) -> Self {
        let found = candidates
            .into_iter()
            .find_map(|path| fs::read_to_string(&path).ok().map(|content| (path, content)));

        let Some((path, content)) = found else {
            log::debug!("No {} found, using default app config", CONFIG_FILE_NAME);
            return Self::default();
        };

        match toml::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded app config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolve where settings are stored
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        match &self.store_file {
            Some(path) => Ok(path.clone()),
            None => crate::default_store_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_base_uri.is_none());
        assert!(config.store_file.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            api_base_uri = "https://ghe.example.com/api/v3"
            store_file = "/tmp/gh-poller-store.json"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.api_base_uri.as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        assert_eq!(
            config.store_path().unwrap(),
            PathBuf::from("/tmp/gh-poller-store.json")
        );
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            api_base_uri = "http://localhost:8080"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_base_uri.as_deref(), Some("http://localhost:8080"));
        // Store location should use default
        assert!(config.store_file.is_none());
    }

    #[test]
    fn test_load_first_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("home.toml");
        fs::write(&present, "api_base_uri = \"http://localhost:9000\"\n").unwrap();

        let config = AppConfig::load_first([dir.path().join("missing.toml"), present]);
        assert_eq!(config.api_base_uri.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_load_first_prefers_earlier_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().join("cwd.toml");
        let home = dir.path().join("home.toml");
        fs::write(&cwd, "store_file = \"/tmp/cwd.json\"\n").unwrap();
        fs::write(&home, "store_file = \"/tmp/home.json\"\n").unwrap();

        let config = AppConfig::load_first([cwd, home]);
        assert_eq!(config.store_file, Some(PathBuf::from("/tmp/cwd.json")));
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "api_base_uri = [").unwrap();

        assert_eq!(AppConfig::load_first([broken]), AppConfig::default());
    }

    #[test]
    fn test_no_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            AppConfig::load_first([dir.path().join("none.toml")]),
            AppConfig::default()
        );
    }
}
