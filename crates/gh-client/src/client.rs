//! Search client trait
//!
//! This module defines the `SearchClient` trait that all client
//! implementations must satisfy.

use crate::types::PullRequestItem;
use async_trait::async_trait;

/// GitHub issue search client
///
/// Wraps exactly one HTTP call per invocation. Implementations can hit the
/// real API or replay scripted results in tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a client can be shared with the
/// background task that drives a fetch run.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{PullRequestItem, SearchClient};
///
/// async fn open_prs(client: &dyn SearchClient) -> anyhow::Result<Vec<PullRequestItem>> {
///     client
///         .search_issues("is:open is:pull-request author:octocat", "token")
///         .await
/// }
/// ```
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run one issue search
    ///
    /// # Arguments
    ///
    /// * `query` - The composed search query (see [`crate::SearchQuery`])
    /// * `token` - Credential sent as bearer token
    ///
    /// # Returns
    ///
    /// The items of the first result page. An absent or empty `items`
    /// array yields an empty vector. Network, authentication, rate-limit
    /// and decoding failures are returned as errors.
    async fn search_issues(&self, query: &str, token: &str)
        -> anyhow::Result<Vec<PullRequestItem>>;
}
