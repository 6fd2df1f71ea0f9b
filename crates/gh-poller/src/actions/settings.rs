//! Settings editor actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Open the editor (snapshots the current settings)
    Open,
    /// Close the editor, persisting the settings
    Close,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,
    /// Type a character into the focused text field
    Char(char),
    /// Delete the last character of the focused text field
    Backspace,
    /// Clear the focused text field
    ClearField,
    /// Add the typed username to the tracked users
    AddUser,
    /// Remove the selected user from the tracked users
    RemoveSelectedUser,
    /// Move the users list selection down
    SelectNextUser,
    /// Move the users list selection up
    SelectPreviousUser,
    /// Show or mask the token
    ToggleTokenVisibility,
}
