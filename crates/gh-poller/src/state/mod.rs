//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod main_view;
mod run;
mod settings_editor;

pub use app::AppState;
pub use main_view::MainViewState;
pub use run::{FetchState, RepositoryGroups, RunPhase, RunState};
pub use settings_editor::{SettingsEditorState, SettingsField};
