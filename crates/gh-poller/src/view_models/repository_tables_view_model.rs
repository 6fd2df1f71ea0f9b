//! Repository Tables View Model
//!
//! Flattens the grouped pull requests into display rows: one header row per
//! repository (ascending) followed by its pull requests (ascending number).

use crate::state::{AppState, RunPhase};
use crate::theme::Theme;
use crate::utils::relative_time::relative_time;
use chrono::{DateTime, Utc};
use gh_client::PullRequestItem;
use ratatui::style::{Color, Style};

/// Column titles of the pull request table
pub const COLUMNS: [&str; 5] = ["PR #", "User", "Pull Request", "Creation time", "Updated time"];

/// What the main area shows
#[derive(Debug, Clone)]
pub enum MainContentViewModel {
    /// Show empty state with a message
    Empty(EmptyStateViewModel),
    /// Show the pull request tables
    Tables(RepositoryTablesViewModel),
}

/// View model for empty/loading states
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStateViewModel {
    pub message: String,
    /// Secondary line, e.g. which key to press
    pub hint: Option<String>,
    pub border_color: Color,
    pub text_style: Style,
}

impl EmptyStateViewModel {
    pub fn settings_required(theme: &Theme) -> Self {
        Self {
            message: "You must set all settings first".to_string(),
            hint: Some("Press 's' to add a token and at least one user.".to_string()),
            border_color: theme.status_warning,
            text_style: theme.warning(),
        }
    }

    pub fn not_loaded(theme: &Theme) -> Self {
        Self {
            message: "No data loaded yet.".to_string(),
            hint: Some("Press 'r' to load open pull requests.".to_string()),
            border_color: theme.accent_primary,
            text_style: theme.muted(),
        }
    }

    pub fn loading(theme: &Theme) -> Self {
        Self {
            message: "Loading pull requests...".to_string(),
            hint: None,
            border_color: theme.accent_primary,
            text_style: theme.muted(),
        }
    }

    pub fn all_reviewed(theme: &Theme) -> Self {
        Self {
            message: "All PRs have been reviewed already!".to_string(),
            hint: None,
            border_color: theme.status_success,
            text_style: theme.success(),
        }
    }

    pub fn failed(theme: &Theme) -> Self {
        Self {
            message: "Failed to load all data.".to_string(),
            hint: Some("Press 'r' to try again.".to_string()),
            border_color: theme.status_error,
            text_style: theme.error(),
        }
    }
}

/// Flattened tables ready to render
#[derive(Debug, Clone)]
pub struct RepositoryTablesViewModel {
    pub rows: Vec<DisplayRow>,
    /// Index into `rows` of the cursor, if any pull request is shown
    pub selected_display_index: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum DisplayRow {
    /// Repository section header
    Repository { name: String, count: usize },
    PullRequest(PrRowViewModel),
}

/// View model for a single PR row
#[derive(Debug, Clone)]
pub struct PrRowViewModel {
    pub pr_number: String, // "#123"
    pub author: String,
    pub title: String,
    pub created: String, // "3 days ago"
    pub updated: String,
    pub style: Style,
}

impl RepositoryTablesViewModel {
    pub fn from_state(state: &AppState, now: DateTime<Utc>) -> Self {
        let theme = &state.theme;
        let selected_row = state.main_view.selected_row;

        let mut rows = Vec::new();
        let mut selected_display_index = None;
        let mut pr_index = 0;

        for (repository, items) in state.fetch.groups.sorted() {
            rows.push(DisplayRow::Repository {
                name: repository.to_string(),
                count: items.len(),
            });
            for item in items {
                let selected = pr_index == selected_row;
                if selected {
                    selected_display_index = Some(rows.len());
                }
                rows.push(DisplayRow::PullRequest(Self::build_row(
                    item, pr_index, selected, now, theme,
                )));
                pr_index += 1;
            }
        }

        Self {
            rows,
            selected_display_index,
        }
    }

    fn build_row(
        item: &PullRequestItem,
        index: usize,
        selected: bool,
        now: DateTime<Utc>,
        theme: &Theme,
    ) -> PrRowViewModel {
        let style = if selected {
            theme.table_selected()
        } else {
            theme.table_row(index)
        };

        PrRowViewModel {
            pr_number: format!("#{}", item.number),
            author: item.author.login.clone(),
            title: item.title.clone(),
            created: relative_time(item.created_at, now),
            updated: relative_time(item.updated_at, now),
            style,
        }
    }

    /// Pull request rows only, in display order
    #[cfg(test)]
    pub fn pull_requests(&self) -> impl Iterator<Item = &PrRowViewModel> {
        self.rows.iter().filter_map(|row| match row {
            DisplayRow::PullRequest(pr) => Some(pr),
            DisplayRow::Repository { .. } => None,
        })
    }
}

/// Decide what the main area shows
///
/// Loaded pull requests are always shown, also when a run failed midway.
pub fn determine_main_content(state: &AppState, now: DateTime<Utc>) -> MainContentViewModel {
    let theme = &state.theme;
    let run = &state.fetch.run;

    if !state.fetch.groups.is_empty() {
        return MainContentViewModel::Tables(RepositoryTablesViewModel::from_state(state, now));
    }

    if !state.settings.is_complete() {
        return MainContentViewModel::Empty(EmptyStateViewModel::settings_required(theme));
    }

    let empty = match run.phase {
        RunPhase::Idle => EmptyStateViewModel::not_loaded(theme),
        RunPhase::Running => EmptyStateViewModel::loading(theme),
        RunPhase::Succeeded if run.empty_result => EmptyStateViewModel::all_reviewed(theme),
        RunPhase::Succeeded => EmptyStateViewModel::not_loaded(theme),
        RunPhase::Failed => EmptyStateViewModel::failed(theme),
    };
    MainContentViewModel::Empty(empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{item, settings};
    use chrono::Duration;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(settings(&["alice"]));
        state.fetch.run.phase = RunPhase::Succeeded;
        state.fetch.groups.insert_all([
            item("zeta/repo", 42),
            item("alpha/repo", 15),
            item("zeta/repo", 7),
        ]);
        state
    }

    fn message(content: MainContentViewModel) -> String {
        match content {
            MainContentViewModel::Empty(empty) => empty.message,
            MainContentViewModel::Tables(_) => "<tables>".to_string(),
        }
    }

    #[test]
    fn test_rows_in_display_order() {
        let vm = RepositoryTablesViewModel::from_state(&loaded_state(), Utc::now());

        let layout: Vec<String> = vm
            .rows
            .iter()
            .map(|row| match row {
                DisplayRow::Repository { name, count } => format!("{} ({})", name, count),
                DisplayRow::PullRequest(pr) => pr.pr_number.clone(),
            })
            .collect();
        assert_eq!(
            layout,
            vec!["alpha/repo (1)", "#15", "zeta/repo (2)", "#7", "#42"]
        );
    }

    #[test]
    fn test_selected_row_skips_headers() {
        let mut state = loaded_state();
        state.main_view.selected_row = 1;

        let vm = RepositoryTablesViewModel::from_state(&state, Utc::now());
        // alpha header, #15, zeta header, #7
        assert_eq!(vm.selected_display_index, Some(3));
        assert_eq!(vm.pull_requests().count(), 3);
    }

    #[test]
    fn test_row_cells() {
        let mut state = AppState::new(settings(&["alice"]));
        let now = Utc::now();
        let mut pr = item("acme/api", 3);
        pr.created_at = now - Duration::days(3);
        pr.updated_at = now - Duration::minutes(5);
        state.fetch.groups.insert_all([pr]);

        let vm = RepositoryTablesViewModel::from_state(&state, now);
        let row = vm.pull_requests().next().unwrap();
        assert_eq!(row.pr_number, "#3");
        assert_eq!(row.author, "alice");
        assert_eq!(row.created, "3 days ago");
        assert_eq!(row.updated, "5 minutes ago");
    }

    #[test]
    fn test_main_content_states() {
        let now = Utc::now();

        let state = AppState::default();
        assert_eq!(message(determine_main_content(&state, now)), "You must set all settings first");

        let mut state = AppState::new(settings(&["alice"]));
        assert_eq!(message(determine_main_content(&state, now)), "No data loaded yet.");

        state.fetch.run.phase = RunPhase::Running;
        assert_eq!(message(determine_main_content(&state, now)), "Loading pull requests...");

        state.fetch.run.phase = RunPhase::Succeeded;
        state.fetch.run.empty_result = true;
        assert_eq!(
            message(determine_main_content(&state, now)),
            "All PRs have been reviewed already!"
        );

        state.fetch.run.phase = RunPhase::Failed;
        state.fetch.run.empty_result = false;
        assert_eq!(message(determine_main_content(&state, now)), "Failed to load all data.");
    }

    #[test]
    fn test_partial_results_stay_visible_after_failure() {
        let mut state = loaded_state();
        state.fetch.run.phase = RunPhase::Failed;
        assert_eq!(message(determine_main_content(&state, Utc::now())), "<tables>");
    }
}
