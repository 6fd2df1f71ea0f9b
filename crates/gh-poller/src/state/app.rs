//! Application State

use gh_poller_config::Settings;

use super::{FetchState, MainViewState, SettingsEditorState};
use crate::theme::Theme;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Current settings (edited in place by the settings editor)
    pub settings: Settings,
    pub fetch: FetchState,
    pub main_view: MainViewState,
    /// Present only while the settings editor is open
    pub settings_editor: Option<SettingsEditorState>,
    pub theme: Theme,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            running: true,
            settings,
            fetch: FetchState::default(),
            main_view: MainViewState::default(),
            settings_editor: None,
            theme: Theme::default(),
        }
    }

    pub fn is_settings_open(&self) -> bool {
        self.settings_editor.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
