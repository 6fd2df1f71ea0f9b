pub mod app_reducer;
pub mod main_view_reducer;
pub mod run_reducer;
pub mod settings_reducer;
