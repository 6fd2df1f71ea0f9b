use crate::actions::{Action, GlobalAction, RunAction, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Keystrokes may be part of the token
            Action::Global(GlobalAction::KeyPressed(_))
            | Action::Settings(SettingsAction::Char(_)) => {}
            // Search results can be large; the run reducer logs their counts
            Action::Run(RunAction::QuerySucceeded {
                run_id,
                index,
                user,
                items,
            }) => log::debug!(
                "Action: QuerySucceeded(run {}, query {}, {}, {} items)",
                run_id,
                index,
                user,
                items.len()
            ),
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
