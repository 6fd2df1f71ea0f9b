//! Settings Middleware
//!
//! Persists the settings every time the settings editor closes, whether or
//! not anything changed. Change detection itself happens in the reducer.

use crate::actions::{Action, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_poller_config::{save_settings, KeyValueStore};

pub struct SettingsMiddleware<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsMiddleware<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore + Send> Middleware for SettingsMiddleware<S> {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::Settings(SettingsAction::Close) = action {
            if state.is_settings_open() {
                if let Err(e) = save_settings(&mut self.store, &state.settings) {
                    log::error!("Failed to persist settings: {:#}", e);
                }
            }
        }

        true // Reducer still closes the editor
    }
}
