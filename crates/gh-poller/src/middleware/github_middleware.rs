//! GitHub Operations Middleware
//!
//! - Run requests: guards against overlapping runs and incomplete settings,
//!   then spawns the sequential query loop
//! - Browser integration for the selected pull request

use crate::actions::{Action, MainViewAction, RunAction, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::orchestrator::{run_queries, FetchError};
use crate::state::AppState;
use crate::utils::browser::open_url;
use gh_client::SearchClient;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Middleware for all GitHub API operations
pub struct GitHubMiddleware {
    client: Arc<dyn SearchClient>,
    /// Runtime the query loop and browser commands are spawned on
    runtime: Handle,
}

impl GitHubMiddleware {
    pub fn new(client: Arc<dyn SearchClient>, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    /// Start a run unless one is in progress or settings are incomplete
    ///
    /// Returns whether the request reaches the reducer.
    fn handle_run_request(&self, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if state.fetch.run.is_running() {
            log::debug!(
                "Run {} already in progress, ignoring request",
                state.fetch.run.run_id
            );
            return false;
        }

        if !state.settings.is_complete() {
            log::warn!("{}", FetchError::InvalidConfiguration);
            dispatcher.dispatch(Action::Settings(SettingsAction::Open));
            return false;
        }

        // The reducer assigns the same id when it sees this request
        let run_id = state.fetch.next_run_id();
        let client = Arc::clone(&self.client);
        let settings = state.settings.clone();
        let dispatcher = dispatcher.clone();

        log::info!("Spawning run {} for {} users", run_id, settings.users.len());
        self.runtime.spawn(async move {
            let result = run_queries(client.as_ref(), &settings, run_id, move |action| {
                dispatcher.dispatch(Action::Run(action))
            })
            .await;

            match result {
                Ok(summary) => log::info!(
                    "Run {} completed: {} queries, {} items",
                    run_id,
                    summary.queries,
                    summary.items
                ),
                Err(e) => log::warn!(
                    "Run {} did not complete (stopped at query {:?}): {}",
                    run_id,
                    e.stop_index(),
                    e
                ),
            }
        });

        true
    }

    fn open_selected(&self, state: &AppState) {
        match state.fetch.groups.row_at(state.main_view.selected_row) {
            Some(item) => {
                log::info!("Opening {} in browser", item.html_url);
                self.runtime.spawn(open_url(item.html_url.clone()));
            }
            None => log::warn!("No pull request selected for opening in browser"),
        }
    }
}

impl Middleware for GitHubMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Run(RunAction::Request) => self.handle_run_request(state, dispatcher),

            Action::MainView(MainViewAction::OpenSelected) => {
                self.open_selected(state);
                false // Consume action
            }

            _ => true,
        }
    }
}
