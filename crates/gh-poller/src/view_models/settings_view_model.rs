//! Settings Editor View Model

use crate::state::{SettingsEditorState, SettingsField};
use gh_poller_config::Settings;

/// Character shown for each hidden token character
const MASK: char = '•';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViewModel {
    pub label: &'static str,
    pub value: String,
    pub placeholder: Option<&'static str>,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRowViewModel {
    pub login: String,
    pub selected: bool,
}

/// View model for the settings popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsViewModel {
    pub token: FieldViewModel,
    pub reviewer: FieldViewModel,
    pub organization: FieldViewModel,
    pub new_user: FieldViewModel,
    pub users: Vec<UserRowViewModel>,
    pub users_focused: bool,
    pub error: Option<String>,
    /// Shown while a run is not yet possible
    pub incomplete_hint: Option<&'static str>,
}

impl SettingsViewModel {
    pub fn from_state(settings: &Settings, editor: &SettingsEditorState) -> Self {
        let field = |label: &'static str,
                     value: String,
                     placeholder: Option<&'static str>,
                     which: SettingsField| FieldViewModel {
            label,
            value,
            placeholder,
            focused: editor.focused_field == which,
        };

        let token = if editor.show_token {
            settings.token.clone()
        } else {
            settings.token.chars().map(|_| MASK).collect()
        };

        let users_focused = editor.focused_field == SettingsField::Users;
        let users = settings
            .users
            .iter()
            .enumerate()
            .map(|(index, login)| UserRowViewModel {
                login: login.clone(),
                selected: users_focused && index == editor.selected_user,
            })
            .collect();

        Self {
            token: field("Token", token, Some("GitHub token (repo scope)"), SettingsField::Token),
            reviewer: field(
                "Reviewer",
                settings.reviewer_name.clone(),
                Some("optional: only PRs awaiting this reviewer"),
                SettingsField::ReviewerName,
            ),
            organization: field(
                "Organization",
                settings.organization.clone(),
                Some("optional: only PRs in this org"),
                SettingsField::Organization,
            ),
            new_user: field(
                "Add user",
                editor.new_user.clone(),
                Some("username, Enter to add"),
                SettingsField::NewUser,
            ),
            users,
            users_focused,
            error: editor.error.clone(),
            incomplete_hint: (!settings.is_complete())
                .then_some("A token and at least one user are required"),
        }
    }
}
