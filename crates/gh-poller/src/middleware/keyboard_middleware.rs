//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! ## Priority keys
//! Ctrl+C quits from anywhere.
//!
//! ## Settings editor
//! While the editor is open it receives every key: text fields take typed
//! characters, the users list takes list navigation and removal.
//!
//! ## Main view
//! Single-key commands: `r` run, `s` settings, `j/k` rows, `Enter` open, `q` quit.

use crate::actions::{Action, GlobalAction, MainViewAction, RunAction, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, SettingsEditorState, SettingsField};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key event, `None` for unbound keys
    fn translate(&self, key: KeyEvent, state: &AppState) -> Option<Action> {
        // Ctrl+C: Emergency quit - always works
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Global(GlobalAction::Quit));
        }

        match &state.settings_editor {
            Some(editor) => translate_settings_key(key, editor).map(Action::Settings),
            None => translate_main_key(key),
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

fn translate_main_key(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => Action::Global(GlobalAction::Quit),
        KeyCode::Char('r') => Action::Run(RunAction::Request),
        KeyCode::Char('s') => Action::Settings(SettingsAction::Open),
        KeyCode::Char('j') | KeyCode::Down => Action::MainView(MainViewAction::NavigateNext),
        KeyCode::Char('k') | KeyCode::Up => Action::MainView(MainViewAction::NavigatePrevious),
        KeyCode::Enter => Action::MainView(MainViewAction::OpenSelected),
        _ => return None,
    };
    Some(action)
}

fn translate_settings_key(key: KeyEvent, editor: &SettingsEditorState) -> Option<SettingsAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return Some(SettingsAction::Close),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            return Some(SettingsAction::PrevField)
        }
        KeyCode::Tab => return Some(SettingsAction::NextField),
        KeyCode::BackTab => return Some(SettingsAction::PrevField),
        KeyCode::Char('t') if ctrl => return Some(SettingsAction::ToggleTokenVisibility),
        _ => {}
    }

    if !editor.focused_field.accepts_text() {
        return match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(SettingsAction::SelectNextUser),
            KeyCode::Char('k') | KeyCode::Up => Some(SettingsAction::SelectPreviousUser),
            KeyCode::Char('d') | KeyCode::Delete => Some(SettingsAction::RemoveSelectedUser),
            _ => None,
        };
    }

    match key.code {
        // Ctrl+U - Unix line kill (clear line)
        KeyCode::Char('u') if ctrl => Some(SettingsAction::ClearField),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(SettingsAction::Char(c))
        }
        KeyCode::Backspace => Some(SettingsAction::Backspace),
        KeyCode::Enter if editor.focused_field == SettingsField::NewUser => {
            Some(SettingsAction::AddUser)
        }
        KeyCode::Enter | KeyCode::Down => Some(SettingsAction::NextField),
        KeyCode::Up => Some(SettingsAction::PrevField),
        _ => None,
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match self.translate(*key, state) {
            Some(translated) => dispatcher.dispatch(translated),
            None => log::trace!("KeyboardMiddleware: unbound key {:?}", key.code),
        }

        // Key presses never reach the reducer
        false
    }
}
