//! Main View State

/// Main view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainViewState {
    /// Row cursor over all pull requests in display order
    pub selected_row: usize,
}
