//! Search payloads and response parsing.

use serde::{Deserialize, Serialize};

/// One row of the search dropdown, as returned by `GET /api/search`.
/// Entirely transient: the whole set is replaced on every query cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// URL-safe article identifier.
    pub slug: String,
    /// Article title.
    pub title: String,
    /// Truncated article body for the row's second line.
    pub description: String,
}

impl SearchResult {
    /// The content path a result row links to.
    #[must_use]
    pub fn article_path(&self) -> String {
        format!("/wiki/{}", self.slug)
    }
}

/// Why a search query produced no result set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The request never completed (network failure, missing browser
    /// APIs, or a response that was not text).
    #[error("search request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("search returned status {0}")]
    Status(u16),

    /// The body was not a JSON array of results.
    #[error("search response was not valid JSON: {0}")]
    Malformed(String),
}

/// Parse a search response body.
///
/// The endpoint returns a JSON array, empty when nothing matched.
///
/// # Errors
///
/// Returns [`SearchError::Malformed`] when the body does not parse.
pub fn parse_results(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    serde_json::from_str(body).map_err(|e| SearchError::Malformed(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_parses_to_no_results() {
        assert_eq!(parse_results("[]"), Ok(Vec::new()));
    }

    #[test]
    fn populated_array_parses_in_order() {
        let body = r#"[
            {"slug":"cats","title":"Cats","description":"Small felines..."},
            {"slug":"dogs","title":"Dogs","description":"Loyal canines..."}
        ]"#;
        let results = parse_results(body).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].slug, "cats");
        assert_eq!(results[0].title, "Cats");
        assert_eq!(results[1].description, "Loyal canines...");
    }

    #[test]
    fn garbage_body_is_malformed() {
        assert!(matches!(
            parse_results("<!DOCTYPE html>"),
            Err(SearchError::Malformed(_))
        ));
    }

    #[test]
    fn article_path_derives_from_slug() {
        let result = SearchResult {
            slug: "cats".into(),
            title: "Cats".into(),
            description: String::new(),
        };
        assert_eq!(result.article_path(), "/wiki/cats");
    }
}
