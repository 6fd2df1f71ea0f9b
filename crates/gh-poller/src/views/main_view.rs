//! Main View
//!
//! Action bar, run progress, the pull request tables and key hints.

use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{
    determine_main_content, ActionButtonViewModel, DisplayRow, EmptyStateViewModel,
    HeaderViewModel, MainContentViewModel, ProgressViewModel, RepositoryTablesViewModel, COLUMNS,
};
use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState},
    Frame,
};

/// Render the main view
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let now = Utc::now();

    f.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Progress
            Constraint::Min(0),    // Tables
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(&HeaderViewModel::from_state(state, now), theme, chunks[0], f);
    render_progress(&ProgressViewModel::from_run(&state.fetch.run, theme), theme, chunks[1], f);

    match determine_main_content(state, now) {
        MainContentViewModel::Empty(empty) => render_empty(&empty, chunks[2], f),
        MainContentViewModel::Tables(tables) => render_tables(&tables, theme, chunks[2], f),
    }

    render_footer(theme, chunks[3], f);
}

fn badge(action: &ActionButtonViewModel) -> Span<'static> {
    let style = if action.enabled {
        action.style
    } else {
        action.style.add_modifier(Modifier::DIM)
    };
    Span::styled(format!(" {} {} ", action.key, action.label), style)
}

fn render_header(vm: &HeaderViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut spans = vec![
        Span::styled(" gh-poller ", theme.panel_title()),
        badge(&vm.primary_action),
        Span::raw(" "),
        badge(&vm.settings_action),
    ];
    if let Some(label) = &vm.loaded_label {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(label.clone(), vm.loaded_style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_progress(vm: &ProgressViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(vm.bar_color).bg(theme.bg_panel))
        .ratio(vm.ratio)
        .label(Span::styled(vm.label.clone(), vm.label_style));
    f.render_widget(gauge, area);
}

fn render_empty(vm: &EmptyStateViewModel, area: Rect, f: &mut Frame) {
    let mut lines = vec![Line::from(""), Line::from(Span::styled(vm.message.clone(), vm.text_style))];
    if let Some(hint) = &vm.hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::raw(hint.clone()).italic()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(vm.border_color));

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

fn render_tables(vm: &RepositoryTablesViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row| match row {
            DisplayRow::Repository { name, count } => Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::styled(name.clone(), theme.section_header()),
                    Span::styled(format!(" ({})", count), theme.muted()),
                ])),
            ]),
            DisplayRow::PullRequest(pr) => Row::new(vec![
                Cell::from(pr.pr_number.clone()),
                Cell::from(pr.author.clone()),
                Cell::from(pr.title.clone()),
                Cell::from(pr.created.clone()),
                Cell::from(pr.updated.clone()),
            ])
            .style(pr.style),
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(18),
        Constraint::Fill(1),
        Constraint::Length(18),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths)
        .header(Row::new(COLUMNS).style(theme.table_header().bold()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border())
                .title(" Open pull requests ")
                .title_style(theme.panel_title()),
        );

    let mut table_state = TableState::default().with_selected(vm.selected_display_index);
    f.render_stateful_widget(table, area, &mut table_state);
}

fn render_footer(theme: &Theme, area: Rect, f: &mut Frame) {
    let hints = [
        ("r", "load"),
        ("s", "settings"),
        ("j/k", "move"),
        ("Enter", "open in browser"),
        ("q", "quit"),
    ];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(format!(" {}", key), theme.key_hint()),
                Span::styled(format!(" {} ", description), theme.key_description()),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
