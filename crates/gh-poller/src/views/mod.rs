use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod main_view;
pub mod settings_view;

/// Render the whole application; the settings editor floats on top
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    main_view::render(state, area, f);

    if state.is_settings_open() {
        settings_view::render(state, area, f);
    }
}
