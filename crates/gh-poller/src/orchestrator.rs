//! Sequential query loop
//!
//! One run issues one search per tracked user, strictly one at a time and in
//! settings order. Every resolved query is published as a `RunAction` so the
//! UI advances per user. The first failure ends the run.

use chrono::Local;
use gh_client::{SearchClient, SearchQuery};
use gh_poller_config::Settings;
use thiserror::Error;

use crate::actions::RunAction;

/// Why a run did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Settings are incomplete: at least one user and a token are required")]
    InvalidConfiguration,
    #[error("Query {index} for '{user}' failed: {message}")]
    QueryFailure {
        index: usize,
        user: String,
        message: String,
    },
}

impl FetchError {
    /// Index of the query that stopped the run
    pub fn stop_index(&self) -> Option<usize> {
        match self {
            Self::InvalidConfiguration => None,
            Self::QueryFailure { index, .. } => Some(*index),
        }
    }
}

/// Totals of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub queries: usize,
    pub items: usize,
}

/// Search query for one tracked user under the current filters
pub fn build_query(settings: &Settings, user: &str) -> String {
    let mut query = SearchQuery::new(user);
    if let Some(org) = settings.org() {
        query = query.organization(org);
    }
    if let Some(reviewer) = settings.reviewer() {
        query = query.review_requested(reviewer);
    }
    query.to_string()
}

/// Run every user's query in order, publishing each outcome through `emit`
///
/// Emits `QuerySucceeded` per resolved query, then either `Finished` or a
/// single `QueryFailed` for the query that stopped the run.
pub async fn run_queries<F>(
    client: &dyn SearchClient,
    settings: &Settings,
    run_id: u64,
    mut emit: F,
) -> Result<RunSummary, FetchError>
where
    F: FnMut(RunAction) + Send,
{
    if !settings.is_complete() {
        log::warn!("Run {}: refusing to start with incomplete settings", run_id);
        return Err(FetchError::InvalidConfiguration);
    }

    log::info!(
        "Run {}: querying open pull requests for {} users",
        run_id,
        settings.users.len()
    );

    let mut total_items = 0;
    for (index, user) in settings.users.iter().enumerate() {
        let query = build_query(settings, user);
        log::debug!("Run {}: query {} for {}: {}", run_id, index, user, query);

        match client.search_issues(&query, &settings.token).await {
            Ok(items) => {
                log::debug!("Run {}: {} returned {} items", run_id, user, items.len());
                total_items += items.len();
                emit(RunAction::QuerySucceeded {
                    run_id,
                    index,
                    user: user.clone(),
                    items,
                });
            }
            Err(e) => {
                let message = format!("{:#}", e);
                log::error!("Run {}: query for {} failed: {}", run_id, user, message);
                emit(RunAction::QueryFailed {
                    run_id,
                    index,
                    user: user.clone(),
                    message: message.clone(),
                });
                return Err(FetchError::QueryFailure {
                    index,
                    user: user.clone(),
                    message,
                });
            }
        }
    }

    log::info!(
        "Run {}: finished with {} items from {} queries",
        run_id,
        total_items,
        settings.users.len()
    );
    emit(RunAction::Finished {
        run_id,
        at: Local::now(),
    });

    Ok(RunSummary {
        queries: settings.users.len(),
        items: total_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::run_reducer::reduce_run;
    use crate::state::{FetchState, RunPhase};
    use crate::test_support::{item, settings, ScriptedClient};

    /// Fold the emitted actions into a sequence of published snapshots
    fn snapshots(start: FetchState, actions: &[RunAction], s: &Settings) -> Vec<FetchState> {
        let mut state = start;
        let mut published = Vec::new();
        for action in actions {
            state = reduce_run(state, action, s);
            published.push(state.clone());
        }
        published
    }

    fn started(s: &Settings) -> FetchState {
        reduce_run(FetchState::default(), &RunAction::Request, s)
    }

    #[test]
    fn test_build_query_with_filters() {
        let mut s = settings(&["alice"]);
        s.organization = "acme".to_string();
        s.reviewer_name = "bob".to_string();
        assert_eq!(
            build_query(&s, "alice"),
            "is:open is:pull-request draft:false archived:false org:acme review-requested:bob author:alice"
        );
    }

    #[test]
    fn test_build_query_without_filters() {
        assert_eq!(
            build_query(&settings(&["alice"]), "alice"),
            "is:open is:pull-request draft:false archived:false author:alice"
        );
    }

    #[tokio::test]
    async fn test_all_queries_succeed() {
        let s = settings(&["alice", "carol"]);
        let client = ScriptedClient::new(vec![
            Ok(vec![item("acme/api", 42), item("acme/web", 7)]),
            Ok(vec![item("acme/api", 15)]),
        ]);

        let mut emitted = Vec::new();
        let summary = run_queries(&client, &s, 1, |a| emitted.push(a))
            .await
            .unwrap();

        assert_eq!(summary, RunSummary { queries: 2, items: 3 });
        assert_eq!(
            client.queries(),
            vec![
                "is:open is:pull-request draft:false archived:false author:alice".to_string(),
                "is:open is:pull-request draft:false archived:false author:carol".to_string(),
            ]
        );
        assert_eq!(client.tokens(), vec!["t".to_string(), "t".to_string()]);

        let published = snapshots(started(&s), &emitted, &s);
        assert_eq!(published.len(), 3);

        // Progress is published after every single query
        assert_eq!(published[0].run.completed_queries, 1);
        assert_eq!(published[0].run.phase, RunPhase::Running);
        assert_eq!(published[1].run.completed_queries, 2);

        let last = published.last().unwrap();
        assert_eq!(last.run.phase, RunPhase::Succeeded);
        assert_eq!(last.run.completed_queries, 2);
        assert!(last.run.completed_at.is_some());
        assert!(!last.run.empty_result);
        assert_eq!(last.groups.item_count(), 3);
        assert_eq!(last.groups.get("acme/api").map(|i| i.len()), Some(2));
        assert_eq!(last.groups.get("acme/web").map(|i| i.len()), Some(1));
    }

    #[tokio::test]
    async fn test_zero_items_marks_empty_result() {
        let s = settings(&["alice", "carol"]);
        let client = ScriptedClient::new(vec![Ok(vec![]), Ok(vec![])]);

        let mut emitted = Vec::new();
        run_queries(&client, &s, 1, |a| emitted.push(a)).await.unwrap();

        let last = snapshots(started(&s), &emitted, &s).pop().unwrap();
        assert_eq!(last.run.phase, RunPhase::Succeeded);
        assert!(last.run.empty_result);
        assert!(last.groups.is_empty());
    }

    #[tokio::test]
    async fn test_failure_stops_the_run() {
        let s = settings(&["alice", "carol", "dave"]);
        let client = ScriptedClient::new(vec![
            Ok(vec![item("acme/api", 1)]),
            Err("401 Bad credentials".to_string()),
            Ok(vec![item("acme/api", 2)]),
        ]);

        let mut emitted = Vec::new();
        let err = run_queries(&client, &s, 1, |a| emitted.push(a))
            .await
            .unwrap_err();

        assert_eq!(err.stop_index(), Some(1));
        assert!(matches!(err, FetchError::QueryFailure { ref user, .. } if user == "carol"));
        // The third query is never issued
        assert_eq!(client.queries().len(), 2);

        let last = snapshots(started(&s), &emitted, &s).pop().unwrap();
        assert_eq!(last.run.phase, RunPhase::Failed);
        assert_eq!(last.run.completed_queries, 1);
        assert_eq!(last.run.failed_at, Some(1));
        assert!(last.run.completed_at.is_none());
        assert_eq!(last.groups.item_count(), 1);
    }

    #[tokio::test]
    async fn test_first_query_failure() {
        let s = settings(&["alice", "carol"]);
        let client = ScriptedClient::new(vec![Err("connection refused".to_string())]);

        let mut emitted = Vec::new();
        let err = run_queries(&client, &s, 1, |a| emitted.push(a))
            .await
            .unwrap_err();

        assert_eq!(err.stop_index(), Some(0));
        assert_eq!(emitted.len(), 1);

        let last = snapshots(started(&s), &emitted, &s).pop().unwrap();
        assert_eq!(last.run.phase, RunPhase::Failed);
        assert_eq!(last.run.completed_queries, 0);
        assert!(last.groups.is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_settings_issue_no_queries() {
        let mut s = settings(&["alice"]);
        s.token.clear();
        let client = ScriptedClient::new(vec![]);

        let mut emitted = Vec::new();
        let err = run_queries(&client, &s, 1, |a| emitted.push(a))
            .await
            .unwrap_err();

        assert_eq!(err, FetchError::InvalidConfiguration);
        assert_eq!(err.stop_index(), None);
        assert!(emitted.is_empty());
        assert!(client.queries().is_empty());
    }

    #[tokio::test]
    async fn test_events_carry_run_id_and_index() {
        let s = settings(&["alice", "carol"]);
        let client = ScriptedClient::new(vec![Ok(vec![]), Ok(vec![])]);

        let mut emitted = Vec::new();
        run_queries(&client, &s, 7, |a| emitted.push(a)).await.unwrap();

        assert!(matches!(
            &emitted[0],
            RunAction::QuerySucceeded { run_id: 7, index: 0, user, .. } if user == "alice"
        ));
        assert!(matches!(
            &emitted[1],
            RunAction::QuerySucceeded { run_id: 7, index: 1, user, .. } if user == "carol"
        ));
        assert!(matches!(emitted[2], RunAction::Finished { run_id: 7, .. }));
    }
}
