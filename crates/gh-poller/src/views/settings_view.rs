//! Settings View
//!
//! A floating form for the token, the optional filters and the tracked users.

use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{FieldViewModel, SettingsViewModel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Width of the field label column
const LABEL_WIDTH: usize = 14;

/// Render the settings popup if the editor is open
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let Some(editor) = &state.settings_editor else {
        return;
    };
    let vm = SettingsViewModel::from_state(&state.settings, editor);
    let theme = &state.theme;

    // Dim everything behind the popup
    f.render_widget(
        Block::default().style(Style::default().bg(Color::Black).add_modifier(Modifier::DIM)),
        area,
    );

    let popup = popup_area(area, vm.users.len());

    f.render_widget(Clear, popup);

    let footer_hint = Line::from(vec![
        Span::styled(" Tab", theme.key_hint().bold()),
        Span::styled(" next  ", theme.muted()),
        Span::styled("Ctrl+T", theme.key_hint().bold()),
        Span::styled(" show token  ", theme.muted()),
        Span::styled("d", theme.key_hint().bold()),
        Span::styled(" remove user  ", theme.muted()),
        Span::styled("Esc", theme.key_hint().bold()),
        Span::styled(" save & close ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Settings ")
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, popup);

    let inner = popup.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Token
            Constraint::Length(1), // Reviewer
            Constraint::Length(1), // Organization
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // New user
            Constraint::Length(1), // Users header
            Constraint::Min(1),    // Users
            Constraint::Length(1), // Error / hint
        ])
        .split(inner);

    render_field(f, chunks[0], &vm.token, theme);
    render_field(f, chunks[1], &vm.reviewer, theme);
    render_field(f, chunks[2], &vm.organization, theme);
    render_field(f, chunks[4], &vm.new_user, theme);

    let users_header_style = if vm.users_focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };
    let indicator = if vm.users_focused { "> " } else { "  " };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(indicator, theme.accent().bold()),
            Span::styled(format!("Users ({})", vm.users.len()), users_header_style),
        ])),
        chunks[5],
    );

    let items: Vec<ListItem> = if vm.users.is_empty() {
        vec![ListItem::new(Span::styled(
            "    no users tracked yet",
            theme.muted().italic(),
        ))]
    } else {
        vm.users
            .iter()
            .map(|user| {
                let style = if user.selected {
                    theme.table_selected()
                } else {
                    theme.text()
                };
                ListItem::new(Span::styled(format!("    {}", user.login), style))
            })
            .collect()
    };
    f.render_widget(List::new(items), chunks[6]);

    let status = match (&vm.error, vm.incomplete_hint) {
        (Some(error), _) => Span::styled(error.clone(), theme.error()),
        (None, Some(hint)) => Span::styled(hint, theme.warning()),
        (None, None) => Span::raw(""),
    };
    f.render_widget(Paragraph::new(Line::from(status)), chunks[7]);
}

/// Render a single form field
/// Centered popup rect sized for the form plus one line per tracked user
fn popup_area(area: Rect, user_rows: usize) -> Rect {
    let width = (u32::from(area.width) * 65 / 100).clamp(55, 90) as u16;
    let width = width.min(area.width);
    let rows = u16::try_from(user_rows.max(1)).unwrap_or(u16::MAX);
    let height = rows.saturating_add(12).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn render_field(f: &mut Frame, area: Rect, field: &FieldViewModel, theme: &Theme) {
    let indicator = if field.focused { "> " } else { "  " };

    let label_style = if field.focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };

    let mut spans = vec![
        Span::styled(indicator, theme.accent().bold()),
        Span::styled(
            format!("{:width$}", format!("{}:", field.label), width = LABEL_WIDTH),
            label_style,
        ),
    ];

    match (field.value.is_empty(), field.placeholder) {
        (true, Some(placeholder)) => {
            if field.focused {
                spans.push(Span::styled("▌", theme.accent()));
            }
            spans.push(Span::styled(
                placeholder,
                theme.muted().italic().add_modifier(Modifier::DIM),
            ));
        }
        _ => {
            let value_style = if field.focused {
                Style::default().fg(theme.selected_fg).bg(theme.bg_primary)
            } else {
                theme.text()
            };
            spans.push(Span::styled(field.value.clone(), value_style));
            if field.focused {
                spans.push(Span::styled("▌", theme.accent()));
            }
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
