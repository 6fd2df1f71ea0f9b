//! Per-token octocrab client manager
//!
//! Clients are lazily initialized and cached per token, so a token edited
//! in the settings gets a freshly authenticated client on the next run.

use anyhow::{Context, Result};
use http::Uri;
use log::{debug, info};
use octocrab::Octocrab;
use std::collections::HashMap;
use std::sync::Arc;

/// Manages authenticated octocrab instances
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::ClientManager;
///
/// let mut manager = ClientManager::new(None)?;
/// let octocrab = manager.get_client("ghp_example")?;
/// ```
#[derive(Debug, Default)]
pub struct ClientManager {
    /// API base override (None = api.github.com)
    base_uri: Option<Uri>,
    /// Cached clients by token
    clients: HashMap<String, Arc<Octocrab>>,
}

impl ClientManager {
    /// Create a manager for the given API base URI
    pub fn new(base_uri: Option<&str>) -> Result<Self> {
        let base_uri = base_uri
            .map(|uri| {
                uri.parse::<Uri>()
                    .with_context(|| format!("Invalid GitHub API base URI '{}'", uri))
            })
            .transpose()?;

        Ok(Self {
            base_uri,
            clients: HashMap::new(),
        })
    }

    /// Get or create the client for a token
    ///
    /// Must be called from within a tokio runtime.
    pub fn get_client(&mut self, token: &str) -> Result<Arc<Octocrab>> {
        if let Some(client) = self.clients.get(token) {
            debug!("Using cached GitHub client");
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(self.build_client(token)?);
        self.clients.insert(token.to_string(), Arc::clone(&client));
        Ok(client)
    }

    /// Check if a client exists for a token
    pub fn has_client(&self, token: &str) -> bool {
        self.clients.contains_key(token)
    }

    fn build_client(&self, token: &str) -> Result<Octocrab> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = &self.base_uri {
            builder = builder
                .base_uri(uri.clone())
                .context("Failed to set GitHub API base URI")?;
        }

        let client = builder.build().context("Failed to build GitHub client")?;

        match &self.base_uri {
            Some(uri) => info!("Created GitHub client for {}", uri),
            None => info!("Created GitHub client for {}", crate::DEFAULT_API_BASE),
        }
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_uri_is_rejected() {
        assert!(ClientManager::new(Some("not a uri")).is_err());
    }

    #[tokio::test]
    async fn test_clients_are_cached_per_token() {
        let mut manager = ClientManager::new(Some("http://127.0.0.1:9")).unwrap();
        assert!(!manager.has_client("one"));

        let first = manager.get_client("one").unwrap();
        let again = manager.get_client("one").unwrap();
        assert!(Arc::ptr_eq(&first, &again));

        let other = manager.get_client("two").unwrap();
        assert!(!Arc::ptr_eq(&first, &other));
        assert!(manager.has_client("one"));
        assert!(manager.has_client("two"));
    }
}
