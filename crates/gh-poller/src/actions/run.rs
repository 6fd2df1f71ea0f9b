//! Fetch run actions
//!
//! `Request` comes from the user. Everything else is published by the query
//! loop and carries the `run_id` of the run that produced it, so events from a
//! superseded run can be told apart and dropped.

use chrono::{DateTime, Local};
use gh_client::PullRequestItem;

#[derive(Debug, Clone, PartialEq)]
pub enum RunAction {
    /// Start a run (load, refresh and retry all map here)
    Request,
    /// One user's query resolved
    QuerySucceeded {
        run_id: u64,
        index: usize,
        user: String,
        items: Vec<PullRequestItem>,
    },
    /// One user's query failed; the run stops here
    QueryFailed {
        run_id: u64,
        index: usize,
        user: String,
        message: String,
    },
    /// Every query of the run succeeded
    Finished { run_id: u64, at: DateTime<Local> },
    /// Drop all run data and return to Idle
    Reset,
}
