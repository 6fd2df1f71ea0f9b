//! Settings Editor State

use gh_poller_config::Settings;

/// Focusable field of the settings editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    Token,
    ReviewerName,
    Organization,
    NewUser,
    Users,
}

impl SettingsField {
    /// Move to the next field
    pub fn next(self) -> Self {
        match self {
            Self::Token => Self::ReviewerName,
            Self::ReviewerName => Self::Organization,
            Self::Organization => Self::NewUser,
            Self::NewUser => Self::Users,
            Self::Users => Self::Token,
        }
    }

    /// Move to the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::Token => Self::Users,
            Self::ReviewerName => Self::Token,
            Self::Organization => Self::ReviewerName,
            Self::NewUser => Self::Organization,
            Self::Users => Self::NewUser,
        }
    }

    /// Fields that take typed characters
    pub fn accepts_text(self) -> bool {
        !matches!(self, Self::Users)
    }
}

/// State of the open settings editor
///
/// Edits are applied to `AppState::settings` directly; `snapshot` holds the
/// settings as they were when the editor opened.
#[derive(Debug, Clone, Default)]
pub struct SettingsEditorState {
    pub snapshot: Settings,
    pub focused_field: SettingsField,
    /// Username being typed
    pub new_user: String,
    /// Selected index in the users list
    pub selected_user: usize,
    pub show_token: bool,
    /// Last rejected edit
    pub error: Option<String>,
}

impl SettingsEditorState {
    pub fn new(snapshot: Settings) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }
}
