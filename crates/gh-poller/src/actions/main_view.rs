//! Main view actions

/// Actions for the pull request tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainViewAction {
    /// Move the row cursor down (j, down arrow)
    NavigateNext,
    /// Move the row cursor up (k, up arrow)
    NavigatePrevious,
    /// Open the pull request under the cursor in the browser
    OpenSelected,
}
