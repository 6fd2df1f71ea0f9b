//! Settings Editor Reducer
//!
//! Edits go straight into `AppState::settings`. Closing compares against the
//! snapshot taken on open and resets the run data when anything changed.
//! Persisting happens in the settings middleware.

use crate::actions::{RunAction, SettingsAction};
use crate::reducers::run_reducer::reduce_run;
use crate::state::{AppState, MainViewState, SettingsEditorState, SettingsField};

/// Reduce settings editor state based on actions
pub fn reduce_settings(mut state: AppState, action: &SettingsAction) -> AppState {
    if let SettingsAction::Open = action {
        if state.settings_editor.is_none() {
            log::debug!("Opening settings editor");
            state.settings_editor = Some(SettingsEditorState::new(state.settings.clone()));
        }
        return state;
    }

    if let SettingsAction::Close = action {
        let Some(editor) = state.settings_editor.take() else {
            return state;
        };
        if state.settings.differs_from(&editor.snapshot) {
            log::info!("Settings changed, discarding loaded pull requests");
            state.fetch = reduce_run(state.fetch, &RunAction::Reset, &state.settings);
            state.main_view = MainViewState::default();
        } else {
            log::debug!("Settings unchanged");
        }
        return state;
    }

    let Some(editor) = state.settings_editor.as_mut() else {
        log::debug!("Settings editor closed, ignoring {:?}", action);
        return state;
    };
    let settings = &mut state.settings;

    match action {
        SettingsAction::NextField => {
            editor.focused_field = editor.focused_field.next();
        }
        SettingsAction::PrevField => {
            editor.focused_field = editor.focused_field.prev();
        }

        SettingsAction::Char(c) => {
            editor.error = None;
            match editor.focused_field {
                SettingsField::Token => settings.token.push(*c),
                SettingsField::ReviewerName => settings.reviewer_name.push(*c),
                SettingsField::Organization => settings.organization.push(*c),
                SettingsField::NewUser => editor.new_user.push(*c),
                SettingsField::Users => {}
            }
        }

        SettingsAction::Backspace => {
            editor.error = None;
            match editor.focused_field {
                SettingsField::Token => {
                    settings.token.pop();
                }
                SettingsField::ReviewerName => {
                    settings.reviewer_name.pop();
                }
                SettingsField::Organization => {
                    settings.organization.pop();
                }
                SettingsField::NewUser => {
                    editor.new_user.pop();
                }
                SettingsField::Users => {}
            }
        }

        SettingsAction::ClearField => {
            editor.error = None;
            match editor.focused_field {
                SettingsField::Token => settings.token.clear(),
                SettingsField::ReviewerName => settings.reviewer_name.clear(),
                SettingsField::Organization => settings.organization.clear(),
                SettingsField::NewUser => editor.new_user.clear(),
                SettingsField::Users => {}
            }
        }

        SettingsAction::AddUser => match settings.add_user(&editor.new_user) {
            Ok(()) => {
                editor.new_user.clear();
                editor.error = None;
                editor.selected_user = settings.users.len() - 1;
            }
            Err(e) => {
                log::debug!("Rejected user: {}", e);
                editor.error = Some(e.to_string());
            }
        },

        SettingsAction::RemoveSelectedUser => {
            if let Some(user) = settings.users.get(editor.selected_user).cloned() {
                settings.remove_user(&user);
                log::debug!("Removed tracked user {}", user);
                editor.selected_user = editor
                    .selected_user
                    .min(settings.users.len().saturating_sub(1));
            }
        }

        SettingsAction::SelectNextUser => {
            if !settings.users.is_empty() {
                editor.selected_user = (editor.selected_user + 1) % settings.users.len();
            }
        }

        SettingsAction::SelectPreviousUser => {
            if !settings.users.is_empty() {
                editor.selected_user = if editor.selected_user == 0 {
                    settings.users.len() - 1
                } else {
                    editor.selected_user - 1
                };
            }
        }

        SettingsAction::ToggleTokenVisibility => {
            editor.show_token = !editor.show_token;
        }

        SettingsAction::Open | SettingsAction::Close => {}
    }

    state
}
