//! Run Reducer
//!
//! The run state machine:
//! `Idle -> Running -> Succeeded | Failed`, and `Succeeded | Failed -> Running`
//! on the next request. `Reset` returns to Idle from anywhere.

use crate::actions::RunAction;
use crate::state::{FetchState, RepositoryGroups, RunPhase, RunState};
use gh_poller_config::Settings;

/// Reduce fetch state based on run actions
pub fn reduce_run(mut state: FetchState, action: &RunAction, settings: &Settings) -> FetchState {
    match action {
        RunAction::Request => {
            if state.run.is_running() {
                log::debug!("Run {} still in progress, ignoring request", state.run.run_id);
                return state;
            }
            if !settings.is_complete() {
                log::debug!("Ignoring run request with incomplete settings");
                return state;
            }

            if let Some(index) = state.run.failed_at {
                log::info!("Retrying after run {} stopped at query {}", state.run.run_id, index);
            }

            // A new run starts from zero progress and an empty grouping
            FetchState {
                run: RunState {
                    run_id: state.next_run_id(),
                    phase: RunPhase::Running,
                    total_queries: settings.users.len(),
                    users: settings.users.clone(),
                    ..RunState::default()
                },
                groups: RepositoryGroups::default(),
            }
        }

        RunAction::QuerySucceeded {
            run_id,
            index,
            user,
            items,
        } => {
            if is_stale(&state, *run_id) {
                return state;
            }
            log::debug!(
                "Run {}: query {} ({}) added {} items",
                run_id,
                index,
                user,
                items.len()
            );
            state.groups.insert_all(items.iter().cloned());
            state.run.completed_queries += 1;
            state
        }

        RunAction::QueryFailed {
            run_id,
            index,
            user,
            ..
        } => {
            if is_stale(&state, *run_id) {
                return state;
            }
            log::warn!("Run {} failed at query {} ({})", run_id, index, user);
            state.run.phase = RunPhase::Failed;
            state.run.failed_at = Some(*index);
            state
        }

        RunAction::Finished { run_id, at } => {
            if is_stale(&state, *run_id) {
                return state;
            }
            state.run.phase = RunPhase::Succeeded;
            state.run.completed_at = Some(*at);
            state.run.empty_result = state.groups.is_empty();
            log::info!(
                "Run {} succeeded: {} items in {} repositories",
                run_id,
                state.groups.item_count(),
                state.groups.repository_count()
            );
            state
        }

        RunAction::Reset => {
            log::info!("Resetting run data");
            FetchState {
                run: RunState {
                    // Bump the generation so a loop still in flight is ignored
                    run_id: state.next_run_id(),
                    ..RunState::default()
                },
                groups: RepositoryGroups::default(),
            }
        }
    }
}

/// Events only apply to the run that is currently in progress
fn is_stale(state: &FetchState, run_id: u64) -> bool {
    let stale = run_id != state.run.run_id || !state.run.is_running();
    if stale {
        log::debug!(
            "Discarding event of run {} (current run {}, {:?})",
            run_id,
            state.run.run_id,
            state.run.phase
        );
    }
    stale
}
