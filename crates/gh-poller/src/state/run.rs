//! Fetch run state
//!
//! `FetchState` is the value the run reducer folds events into. Each published
//! event produces a new snapshot; the views only ever read snapshots.

use chrono::{DateTime, Local};
use gh_client::PullRequestItem;
use std::collections::HashMap;

/// Lifecycle phase of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Progress and outcome of the current (or last) run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunState {
    /// Generation counter; events from other generations are discarded
    pub run_id: u64,
    pub phase: RunPhase,
    pub completed_queries: usize,
    pub total_queries: usize,
    /// Users queried by this run, in query order
    pub users: Vec<String>,
    /// True iff a successful run aggregated zero items
    pub empty_result: bool,
    /// Set only when the run succeeded
    pub completed_at: Option<DateTime<Local>>,
    /// Index of the query that stopped the run
    pub failed_at: Option<usize>,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// The user whose query finished most recently
    pub fn last_completed_user(&self) -> Option<&str> {
        self.completed_queries
            .checked_sub(1)
            .and_then(|index| self.users.get(index))
            .map(String::as_str)
    }
}

/// Pull requests grouped by owning repository
///
/// Items are kept in arrival order; display order comes from `sorted`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryGroups {
    groups: HashMap<String, Vec<PullRequestItem>>,
}

impl RepositoryGroups {
    /// Append items to the group of their repository
    pub fn insert_all(&mut self, items: impl IntoIterator<Item = PullRequestItem>) {
        for item in items {
            self.groups
                .entry(item.repository.clone())
                .or_default()
                .push(item);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn repository_count(&self) -> usize {
        self.groups.len()
    }

    pub fn item_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn get(&self, repository: &str) -> Option<&[PullRequestItem]> {
        self.groups.get(repository).map(Vec::as_slice)
    }

    /// Repositories ascending, each with its items by ascending PR number
    pub fn sorted(&self) -> Vec<(&str, Vec<&PullRequestItem>)> {
        let mut repositories: Vec<_> = self
            .groups
            .iter()
            .map(|(repository, items)| {
                let mut items: Vec<&PullRequestItem> = items.iter().collect();
                items.sort_by_key(|item| item.number);
                (repository.as_str(), items)
            })
            .collect();
        repositories.sort_by(|a, b| a.0.cmp(b.0));
        repositories
    }

    /// The item at a flat row index over the sorted display order
    pub fn row_at(&self, row: usize) -> Option<&PullRequestItem> {
        self.sorted()
            .into_iter()
            .flat_map(|(_, items)| items)
            .nth(row)
    }
}

/// Run state plus the aggregated results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    pub run: RunState,
    pub groups: RepositoryGroups,
}

impl FetchState {
    /// Generation the next run will use
    pub fn next_run_id(&self) -> u64 {
        self.run.run_id + 1
    }
}
