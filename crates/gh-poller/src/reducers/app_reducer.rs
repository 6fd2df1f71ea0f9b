use crate::actions::{Action, GlobalAction};
use crate::reducers::{main_view_reducer, run_reducer, settings_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            log::debug!("Quit requested");
            state.running = false;
        }
        // Key presses are translated by the keyboard middleware
        Action::Global(GlobalAction::KeyPressed(_)) => {}

        Action::Run(run_action) => {
            state.fetch = run_reducer::reduce_run(state.fetch, run_action, &state.settings);
            // Keep the cursor on an existing row as groups are rebuilt
            let rows = state.fetch.groups.item_count();
            state.main_view.selected_row = state.main_view.selected_row.min(rows.saturating_sub(1));
        }

        Action::Settings(settings_action) => {
            state = settings_reducer::reduce_settings(state, settings_action);
        }

        Action::MainView(main_view_action) => {
            state.main_view =
                main_view_reducer::reduce_main_view(state.main_view, main_view_action, &state.fetch);
        }
    }

    state
}
