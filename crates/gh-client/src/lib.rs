//! GitHub issue search client
//!
//! This crate provides a trait-based client for the GitHub issue search
//! endpoint, used to find open pull requests per author.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              SearchClient trait                  │
//! │  - search_issues(query, token)                   │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ OctocrabClient  │────────►│ ClientManager       │
//! │ (GET /search)   │         │ (octocrab per token)│
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{OctocrabClient, SearchClient, SearchQuery};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::new();
//! let query = SearchQuery::new("octocat").organization("acme");
//! let items = client.search_issues(&query.to_string(), "token").await?;
//! println!("{} open pull requests", items.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod client_manager;
pub mod octocrab_client;
pub mod query;
pub mod types;

/// Default GitHub API base (public GitHub)
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

pub use client::SearchClient;
pub use client_manager::ClientManager;
pub use octocrab_client::OctocrabClient;
pub use query::SearchQuery;
pub use types::{repository_id_from_url, Author, PullRequestItem};
