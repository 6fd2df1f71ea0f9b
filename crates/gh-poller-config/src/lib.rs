//! Configuration and persistence for gh-poller
//!
//! This crate provides:
//! - The user settings model (users, token, reviewer, organization)
//! - Settings change detection and editing rules
//! - A key-value store abstraction for persisting settings
//! - Application configuration (TOML) and platform paths

pub mod app_config;
pub mod paths;
pub mod settings;
pub mod store;

pub use app_config::AppConfig;
pub use paths::{cache_dir, config_dir, default_store_path};
pub use settings::{Settings, SettingsError};
pub use store::{load_settings, save_settings, FileStore, KeyValueStore, MemoryStore, SETTINGS_KEY};
