pub mod header_view_model;
pub mod progress_view_model;
pub mod repository_tables_view_model;
pub mod settings_view_model;

pub use header_view_model::{ActionButtonViewModel, HeaderViewModel};
pub use progress_view_model::ProgressViewModel;
pub use repository_tables_view_model::{
    determine_main_content, DisplayRow, EmptyStateViewModel, MainContentViewModel,
    RepositoryTablesViewModel, COLUMNS,
};
pub use settings_view_model::{FieldViewModel, SettingsViewModel};
