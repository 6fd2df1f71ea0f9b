//! Progress View Model
//!
//! Pre-computes the progress gauge for the current run.

use crate::state::{RunPhase, RunState};
use crate::theme::Theme;
use ratatui::style::{Color, Modifier, Style};

/// View model for the progress gauge
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressViewModel {
    /// Filled fraction, 0.0..=1.0
    pub ratio: f64,
    /// Text drawn over the gauge
    pub label: String,
    pub bar_color: Color,
    pub label_style: Style,
}

impl ProgressViewModel {
    pub fn from_run(run: &RunState, theme: &Theme) -> Self {
        let label_style = Style::default()
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD);

        match run.phase {
            RunPhase::Idle => Self {
                ratio: 0.0,
                label: String::new(),
                bar_color: theme.accent_primary,
                label_style,
            },
            RunPhase::Running => {
                let ratio = if run.total_queries == 0 {
                    0.0
                } else {
                    run.completed_queries as f64 / run.total_queries as f64
                };
                let counter = format!("{}/{}", run.completed_queries, run.total_queries);
                let label = match run.last_completed_user() {
                    Some(user) => format!("{} {}", user, counter),
                    None => counter,
                };
                Self {
                    ratio: ratio.clamp(0.0, 1.0),
                    label,
                    bar_color: theme.status_info,
                    label_style,
                }
            }
            RunPhase::Succeeded => Self {
                ratio: 1.0,
                label: "All PRs loaded".to_string(),
                bar_color: theme.status_success,
                label_style,
            },
            RunPhase::Failed => Self {
                ratio: 1.0,
                label: "Failed to load all data.".to_string(),
                bar_color: theme.status_error,
                label_style,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(phase: RunPhase, completed: usize, users: &[&str]) -> RunState {
        RunState {
            phase,
            completed_queries: completed,
            total_queries: users.len(),
            users: users.iter().map(|u| u.to_string()).collect(),
            ..RunState::default()
        }
    }

    #[test]
    fn test_idle_is_empty() {
        let vm = ProgressViewModel::from_run(&RunState::default(), &Theme::default());
        assert_eq!(vm.ratio, 0.0);
        assert!(vm.label.is_empty());
    }

    #[test]
    fn test_running_names_last_finished_user() {
        let theme = Theme::default();
        let vm = ProgressViewModel::from_run(&run(RunPhase::Running, 1, &["alice", "carol"]), &theme);
        assert_eq!(vm.label, "alice 1/2");
        assert_eq!(vm.ratio, 0.5);

        let vm = ProgressViewModel::from_run(&run(RunPhase::Running, 0, &["alice", "carol"]), &theme);
        assert_eq!(vm.label, "0/2");
        assert_eq!(vm.ratio, 0.0);
    }

    #[test]
    fn test_terminal_phases() {
        let theme = Theme::default();
        let vm = ProgressViewModel::from_run(&run(RunPhase::Succeeded, 2, &["a", "b"]), &theme);
        assert_eq!(vm.label, "All PRs loaded");
        assert_eq!(vm.ratio, 1.0);

        let vm = ProgressViewModel::from_run(&run(RunPhase::Failed, 1, &["a", "b"]), &theme);
        assert_eq!(vm.label, "Failed to load all data.");
        assert_eq!(vm.ratio, 1.0);
        assert_eq!(vm.bar_color, theme.status_error);
    }
}
