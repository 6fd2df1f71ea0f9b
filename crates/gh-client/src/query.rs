//! Search query construction
//!
//! Builds the `q` parameter for the issue search endpoint. Values are
//! inserted verbatim: a name containing search operators changes the
//! meaning of the query.

use std::fmt;

/// Clauses every query starts with
const BASE_CLAUSES: [&str; 4] = ["is:open", "is:pull-request", "draft:false", "archived:false"];

/// Search query for the open, non-draft pull requests of one author
///
/// Clause order is fixed: base clauses, `org:`, `review-requested:`,
/// and `author:` last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    author: String,
    organization: Option<String>,
    review_requested: Option<String>,
}

impl SearchQuery {
    /// Create a query for the given author
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            organization: None,
            review_requested: None,
        }
    }

    /// Restrict results to an organization (ignored when empty)
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        let organization: String = organization.into();
        self.organization = (!organization.is_empty()).then_some(organization);
        self
    }

    /// Restrict results to PRs where `reviewer` is a requested reviewer
    /// (ignored when empty)
    pub fn review_requested(mut self, reviewer: impl Into<String>) -> Self {
        let reviewer: String = reviewer.into();
        self.review_requested = (!reviewer.is_empty()).then_some(reviewer);
        self
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE_CLAUSES.join(" "))?;
        if let Some(org) = &self.organization {
            write!(f, " org:{}", org)?;
        }
        if let Some(reviewer) = &self.review_requested {
            write!(f, " review-requested:{}", reviewer)?;
        }
        write!(f, " author:{}", self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_with_all_filters() {
        let query = SearchQuery::new("alice")
            .organization("acme")
            .review_requested("bob");
        assert_eq!(
            query.to_string(),
            "is:open is:pull-request draft:false archived:false org:acme review-requested:bob author:alice"
        );
    }

    #[test]
    fn test_query_without_filters() {
        let query = SearchQuery::new("alice").organization("").review_requested("");
        assert_eq!(
            query.to_string(),
            "is:open is:pull-request draft:false archived:false author:alice"
        );
    }

    #[test]
    fn test_query_clause_order_is_fixed() {
        // Builder call order must not affect the rendered order
        let query = SearchQuery::new("carol")
            .review_requested("dave")
            .organization("initech");
        let rendered = query.to_string();
        assert!(rendered.ends_with("org:initech review-requested:dave author:carol"));
        assert_eq!(rendered.matches("author:").count(), 1);
    }

    #[test]
    fn test_query_inserts_values_verbatim() {
        let query = SearchQuery::new("eve is:closed");
        assert!(query.to_string().ends_with(" author:eve is:closed"));
    }
}
