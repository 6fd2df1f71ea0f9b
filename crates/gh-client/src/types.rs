//! GitHub search data transfer objects
//!
//! The `Search*` types mirror the JSON returned by `GET /search/issues` and
//! are kept lenient. `PullRequestItem` is what the rest of the application
//! works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login GitHub shows for deleted accounts
const GHOST_LOGIN: &str = "ghost";

/// Marker preceding `owner/name` in repository API URLs
const REPOS_MARKER: &str = "/repos/";

/// A pull request returned by the issue search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestItem {
    /// Unique issue id
    pub id: u64,

    /// PR number within its repository
    pub number: u64,

    /// PR title
    pub title: String,

    /// Who opened the PR
    pub author: Author,

    /// Link to the PR in the browser
    pub html_url: String,

    /// Owning repository as `owner/name`
    pub repository: String,

    /// Repository API URL the identifier was derived from
    pub repository_url: String,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// When the PR was last updated
    pub updated_at: DateTime<Utc>,
}

/// Author of a pull request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub login: String,
    /// Display name, rarely present in search results
    pub name: Option<String>,
    pub avatar_url: String,
    /// Profile link
    pub html_url: String,
}

/// Derive `owner/name` from a repository API URL
///
/// `https://api.github.com/repos/rust-lang/rust` becomes `rust-lang/rust`.
/// URLs without a `/repos/` segment are returned unchanged.
pub fn repository_id_from_url(repository_url: &str) -> String {
    match repository_url.find(REPOS_MARKER) {
        Some(pos) => repository_url[pos + REPOS_MARKER.len()..]
            .trim_end_matches('/')
            .to_string(),
        None => repository_url.to_string(),
    }
}

/// Body of `GET /search/issues`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchIssuesResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    /// Absent and `null` both mean "no results"
    #[serde(default)]
    pub items: Option<Vec<SearchIssue>>,
}

impl SearchIssuesResponse {
    /// Convert all items, treating a missing list as empty
    pub fn into_items(self) -> Vec<PullRequestItem> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .map(PullRequestItem::from)
            .collect()
    }
}

/// One search hit
#[derive(Debug, Clone, Deserialize)]
pub struct SearchIssue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub user: Option<SearchUser>,
    /// Issue link, used when `pull_request.html_url` is missing
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub pull_request: Option<SearchPullRequestLinks>,
    pub repository_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPullRequestLinks {
    #[serde(default)]
    pub html_url: Option<String>,
}

impl From<SearchIssue> for PullRequestItem {
    fn from(issue: SearchIssue) -> Self {
        let author = issue
            .user
            .map(|u| Author {
                login: u.login,
                name: u.name,
                avatar_url: u.avatar_url,
                html_url: u.html_url,
            })
            .unwrap_or_else(|| Author {
                login: GHOST_LOGIN.to_string(),
                ..Author::default()
            });

        let html_url = issue
            .pull_request
            .and_then(|links| links.html_url)
            .unwrap_or(issue.html_url);

        Self {
            id: issue.id,
            number: issue.number,
            title: issue.title,
            author,
            html_url,
            repository: repository_id_from_url(&issue.repository_url),
            repository_url: issue.repository_url,
            created_at: issue.created_at,
            updated_at: issue.updated_at,
        }
    }
}
