//! User settings
//!
//! The settings drive every fetch run: which authors to query, the token
//! to authenticate with, and the optional reviewer/organization filters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Persisted user settings
///
/// `users` keeps insertion order: it is the query order and the order shown
/// in the progress label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Authors whose open pull requests are tracked
    pub users: Vec<String>,
    /// GitHub token, required for any run
    pub token: String,
    /// Only show PRs where this user is a requested reviewer (empty = any)
    pub reviewer_name: String,
    /// Only show PRs in this organization (empty = any)
    pub organization: String,
}

/// Rejections of settings edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Username must not be empty")]
    EmptyUser,
    #[error("User '{0}' is already tracked")]
    DuplicateUser(String),
    #[error("User '{0}' is the reviewer and cannot be tracked")]
    UserIsReviewer(String),
}

impl Settings {
    /// A run is only permitted with at least one user and a token
    pub fn is_complete(&self) -> bool {
        !self.users.is_empty() && !self.token.is_empty()
    }

    /// Compare against a previously persisted snapshot
    ///
    /// `users` is compared as an ordered sequence; the other fields by exact
    /// string equality. Reordering users counts as a change.
    pub fn differs_from(&self, persisted: &Settings) -> bool {
        self.users != persisted.users
            || self.token != persisted.token
            || self.reviewer_name != persisted.reviewer_name
            || self.organization != persisted.organization
    }

    /// Reviewer filter, if set
    pub fn reviewer(&self) -> Option<&str> {
        Some(self.reviewer_name.as_str()).filter(|r| !r.is_empty())
    }

    /// Organization filter, if set
    pub fn org(&self) -> Option<&str> {
        Some(self.organization.as_str()).filter(|o| !o.is_empty())
    }

    /// Append a user to the tracked list
    ///
    /// The name is trimmed and must be non-empty, not yet tracked, and not
    /// the configured reviewer.
    pub fn add_user(&mut self, user: &str) -> Result<(), SettingsError> {
        let user = user.trim();
        if user.is_empty() {
            return Err(SettingsError::EmptyUser);
        }
        if self.users.iter().any(|u| u == user) {
            return Err(SettingsError::DuplicateUser(user.to_string()));
        }
        if user == self.reviewer_name {
            return Err(SettingsError::UserIsReviewer(user.to_string()));
        }

        log::debug!("Adding tracked user {}", user);
        self.users.push(user.to_string());
        Ok(())
    }

    /// Remove a user, returning whether it was tracked
    pub fn remove_user(&mut self, user: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u != user);
        before != self.users.len()
    }
}
