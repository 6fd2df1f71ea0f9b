//! Header View Model
//!
//! The action bar above the tables: primary run action, settings shortcut
//! and when the data was last loaded.

use crate::state::{AppState, RunPhase, RunState};
use crate::theme::Theme;
use crate::utils::relative_time::relative_time;
use chrono::{DateTime, Utc};
use ratatui::style::Style;

/// A keyboard-triggered action shown as a badge
#[derive(Debug, Clone, PartialEq)]
pub struct ActionButtonViewModel {
    pub key: &'static str,
    pub label: &'static str,
    pub enabled: bool,
    pub style: Style,
}

impl ActionButtonViewModel {
    /// The run action for the current phase
    pub fn primary(run: &RunState, theme: &Theme) -> Self {
        let (label, enabled) = match run.phase {
            RunPhase::Idle => ("Load data", true),
            RunPhase::Running => ("Loading...", false),
            RunPhase::Succeeded => ("Refresh data", true),
            RunPhase::Failed => ("Try again", true),
        };
        let bg = if enabled {
            theme.action_refresh
        } else {
            theme.action_disabled
        };
        Self {
            key: "r",
            label,
            enabled,
            style: theme.action_badge(bg),
        }
    }

    pub fn settings(theme: &Theme) -> Self {
        Self {
            key: "s",
            label: "Settings",
            enabled: true,
            style: theme.action_badge(theme.action_settings),
        }
    }
}

/// View model for the header line
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderViewModel {
    pub primary_action: ActionButtonViewModel,
    pub settings_action: ActionButtonViewModel,
    /// "Data loaded 3 minutes ago" once a run succeeded
    pub loaded_label: Option<String>,
    pub loaded_style: Style,
}

impl HeaderViewModel {
    pub fn from_state(state: &AppState, now: DateTime<Utc>) -> Self {
        let theme = &state.theme;
        let run = &state.fetch.run;

        let loaded_label = run.completed_at.map(|at| {
            format!(
                "Data loaded {}",
                relative_time(at.with_timezone(&Utc), now)
            )
        });

        Self {
            primary_action: ActionButtonViewModel::primary(run, theme),
            settings_action: ActionButtonViewModel::settings(theme),
            loaded_label,
            loaded_style: theme.muted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn label_for(phase: RunPhase) -> (&'static str, bool) {
        let run = RunState {
            phase,
            ..RunState::default()
        };
        let vm = ActionButtonViewModel::primary(&run, &Theme::default());
        (vm.label, vm.enabled)
    }

    #[test]
    fn test_primary_action_per_phase() {
        assert_eq!(label_for(RunPhase::Idle), ("Load data", true));
        assert_eq!(label_for(RunPhase::Running), ("Loading...", false));
        assert_eq!(label_for(RunPhase::Succeeded), ("Refresh data", true));
        assert_eq!(label_for(RunPhase::Failed), ("Try again", true));
    }

    #[test]
    fn test_loaded_label() {
        let mut state = AppState::default();
        let now = Utc::now();
        assert!(HeaderViewModel::from_state(&state, now).loaded_label.is_none());

        state.fetch.run.phase = RunPhase::Succeeded;
        state.fetch.run.completed_at = Some((now - Duration::minutes(3)).with_timezone(&Local));
        assert_eq!(
            HeaderViewModel::from_state(&state, now).loaded_label.as_deref(),
            Some("Data loaded 3 minutes ago")
        );
    }
}
