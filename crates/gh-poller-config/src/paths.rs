//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-poller/`, `~/.cache/gh-poller/`
//! - macOS: `~/Library/Application Support/gh-poller/`, `~/Library/Caches/gh-poller/`
//! - Windows: `%APPDATA%\gh-poller\`, `%LOCALAPPDATA%\gh-poller\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-poller";
const STORE_FILE: &str = "store.json";

/// Get the application config directory
/// Returns ~/.config/gh-poller/ on Linux, ~/Library/Application Support/gh-poller/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/gh-poller/ on Linux, ~/Library/Caches/gh-poller/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the settings store file
pub fn default_store_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(STORE_FILE))
}
