//! Wire models for the repository-search API
//!
//! The endpoint answers with either `{"items": [...]}` or `{"message": "..."}`.
//! Both shapes are read through one permissive struct and then collapsed into
//! a [`SearchOutcome`], so callers never deal with raw JSON.

use serde::{Deserialize, Serialize};

/// A single repository from the search results
///
/// Read-only projection of the fields the result list displays.
/// Any other fields in the API payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: u64,
    /// "owner/name"
    pub full_name: String,
    /// Link to the repository page
    pub html_url: String,
    /// Star count (the API mirrors stargazers into `watchers`)
    pub watchers: u64,
    pub forks: u64,
}

/// Raw response body, before deciding which shape it is
#[derive(Debug, Deserialize, Default)]
struct RawSearchResponse {
    items: Option<Vec<ResultItem>>,
    message: Option<String>,
}

/// Result of one search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A page of results (possibly empty)
    Items(Vec<ResultItem>),
    /// Search failed; carries a human-readable message.
    /// API messages ("API rate limit exceeded ...") are kept verbatim.
    Failed(String),
    /// Body was JSON but had neither `items` nor `message`
    Unrecognized,
}

impl SearchOutcome {
    /// Interpret a response body
    ///
    /// The HTTP status is deliberately not an input: a 403 carrying a
    /// `message` and a 200 carrying `items` are told apart by shape alone.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<RawSearchResponse>(body) {
            Ok(RawSearchResponse {
                items: Some(items), ..
            }) => Self::Items(items),
            Ok(RawSearchResponse {
                message: Some(message),
                ..
            }) => Self::Failed(message),
            Ok(_) => Self::Unrecognized,
            Err(e) => Self::Failed(format!("Malformed search response: {}", e)),
        }
    }

    /// Number of items carried (0 for non-item outcomes)
    pub fn item_count(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            _ => 0,
        }
    }
}
