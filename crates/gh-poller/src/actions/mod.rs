//! Actions module
//!
//! Actions are tagged by the part of the state they target:
//! - `Global`: raw input and application lifetime
//! - `Run`: the fetch run (requests and events published by the query loop)
//! - `Settings`: the settings editor
//! - `MainView`: row cursor and opening pull requests

pub mod global;
pub mod main_view;
pub mod run;
pub mod settings;

pub use global::GlobalAction;
pub use main_view::MainViewAction;
pub use run::RunAction;
pub use settings::SettingsAction;

/// Root action enum
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Fetch run requests and query loop events
    Run(RunAction),
    /// Settings editor actions
    Settings(SettingsAction),
    /// Main view actions
    MainView(MainViewAction),
}
