//! Main View Reducer

use crate::actions::MainViewAction;
use crate::state::{FetchState, MainViewState};

/// Reduce main view state; the row count comes from the loaded pull requests
pub fn reduce_main_view(
    mut state: MainViewState,
    action: &MainViewAction,
    fetch: &FetchState,
) -> MainViewState {
    let rows = fetch.groups.item_count();

    match action {
        MainViewAction::NavigateNext => {
            if rows > 0 {
                state.selected_row = (state.selected_row + 1) % rows;
            }
        }
        MainViewAction::NavigatePrevious => {
            if rows > 0 {
                state.selected_row = if state.selected_row == 0 {
                    rows - 1
                } else {
                    state.selected_row - 1
                };
            }
        }
        // Handled by the browser middleware
        MainViewAction::OpenSelected => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;

    fn fetch_with(rows: u64) -> FetchState {
        let mut fetch = FetchState::default();
        fetch.groups.insert_all((1..=rows).map(|n| item("acme/api", n)));
        fetch
    }

    #[test]
    fn test_navigation_wraps() {
        let fetch = fetch_with(3);
        let state = MainViewState::default();

        let state = reduce_main_view(state, &MainViewAction::NavigatePrevious, &fetch);
        assert_eq!(state.selected_row, 2);

        let state = reduce_main_view(state, &MainViewAction::NavigateNext, &fetch);
        assert_eq!(state.selected_row, 0);
    }

    #[test]
    fn test_navigation_without_rows() {
        let state = reduce_main_view(
            MainViewState::default(),
            &MainViewAction::NavigateNext,
            &FetchState::default(),
        );
        assert_eq!(state.selected_row, 0);
    }
}
