//! Octocrab-based search client
//!
//! Direct implementation of the `SearchClient` trait using the octocrab
//! library. One call is one `GET /search/issues` request; only the first
//! result page is read.

use crate::client::SearchClient;
use crate::client_manager::ClientManager;
use crate::types::{PullRequestItem, SearchIssuesResponse};
use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use tokio::sync::Mutex;

const SEARCH_ISSUES_ROUTE: &str = "/search/issues";

/// Query parameters of the search endpoint
#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    q: &'a str,
}

/// GitHub search client using octocrab
#[derive(Debug)]
pub struct OctocrabClient {
    client_manager: Mutex<ClientManager>,
}

impl OctocrabClient {
    /// Create a client for public GitHub
    pub fn new() -> Self {
        Self::from_manager(ClientManager::default())
    }

    /// Create a client for a custom API base (GitHub Enterprise, tests)
    pub fn with_base_uri(base_uri: Option<&str>) -> anyhow::Result<Self> {
        Ok(Self::from_manager(ClientManager::new(base_uri)?))
    }

    fn from_manager(client_manager: ClientManager) -> Self {
        Self {
            client_manager: Mutex::new(client_manager),
        }
    }
}

impl Default for OctocrabClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchClient for OctocrabClient {
    async fn search_issues(
        &self,
        query: &str,
        token: &str,
    ) -> anyhow::Result<Vec<PullRequestItem>> {
        debug!("Searching issues: {}", query);

        let octocrab = self.client_manager.lock().await.get_client(token)?;

        // Raw GET so a missing or null `items` field is not a decoding error
        let response: SearchIssuesResponse = octocrab
            .get(SEARCH_ISSUES_ROUTE, Some(&SearchParams { q: query }))
            .await?;

        if response.incomplete_results {
            debug!("Search reported incomplete results for: {}", query);
        }

        let items = response.into_items();
        debug!("Search returned {} items", items.len());
        Ok(items)
    }
}
