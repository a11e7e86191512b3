//! HTTP client for the repository-search endpoint
//!
//! One GET per call, no retries, no timeout beyond reqwest's defaults.
//! Every failure mode ends up as a [`SearchOutcome`] so the UI has exactly
//! one error path to render.

use super::models::SearchOutcome;
use crate::config::VERSION;
use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Url};
use std::future::Future;

/// Default endpoint (GitHub repository search)
pub const DEFAULT_API_URL: &str = "https://api.github.com/search/repositories";

/// Results requested per page
pub const PER_PAGE: u32 = 10;

/// Anything that can answer a (query, page) search
///
/// The session is generic over this so tests can drive it with a fake backend.
pub trait RepoSearch: Send + Sync + 'static {
    /// Fetch one page of results. Never errors: failures are `SearchOutcome::Failed`.
    fn search(&self, query: &str, page: u32) -> impl Future<Output = SearchOutcome> + Send;
}

/// reqwest-backed search client
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Create a client for the given endpoint
    pub fn new(api_url: &str) -> Result<Self> {
        let endpoint =
            Url::parse(api_url).with_context(|| format!("Invalid search API URL: {}", api_url))?;

        let mut headers = HeaderMap::new();
        // The API rejects requests without a user agent
        let agent = HeaderValue::from_str(&format!("reposeek/{}", VERSION))
            .context("Invalid user agent")?;
        headers.insert(USER_AGENT, agent);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, endpoint })
    }

    /// Build the request URL: `<endpoint>?q=<query>&page=<page>&per_page=10`
    ///
    /// Parameters are appended to whatever query string the endpoint already has.
    pub fn request_url(&self, query: &str, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &PER_PAGE.to_string());
        url
    }

    /// Perform the round trip, surfacing transport errors
    async fn fetch(&self, query: &str, page: u32) -> Result<SearchOutcome> {
        let url = self.request_url(query, page);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Search request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read search response")?;

        let outcome = SearchOutcome::from_body(&body);
        tracing::debug!(
            "Search {:?} page {} -> HTTP {} ({} items)",
            query,
            page,
            status.as_u16(),
            outcome.item_count()
        );
        Ok(outcome)
    }
}

impl RepoSearch for SearchClient {
    async fn search(&self, query: &str, page: u32) -> SearchOutcome {
        match self.fetch(query, page).await {
            Ok(outcome) => {
                if let SearchOutcome::Failed(message) = &outcome {
                    tracing::warn!("Search {:?} page {} failed: {}", query, page, message);
                }
                outcome
            }
            Err(e) => {
                tracing::warn!("Search {:?} page {} failed: {:#}", query, page, e);
                SearchOutcome::Failed(format!("{:#}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_carries_query_page_and_page_size() {
        let client = SearchClient::new(DEFAULT_API_URL).unwrap();
        let url = client.request_url("react", 2);

        assert_eq!(url.host_str(), Some("api.github.com"));
        assert_eq!(url.path(), "/search/repositories");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "react".to_string()),
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn request_url_encodes_query_text() {
        let client = SearchClient::new(DEFAULT_API_URL).unwrap();
        let url = client.request_url("tui language:rust&stars>100", 1);

        // Ampersand must not split the q parameter
        let q = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned());
        assert_eq!(q.as_deref(), Some("tui language:rust&stars>100"));
        assert!(!url.as_str().contains("&stars"));
    }

    #[test]
    fn request_url_keeps_existing_endpoint_params() {
        let client = SearchClient::new("https://ghe.example.com/api/v3/search/repositories?sort=stars")
            .unwrap();
        let url = client.request_url("x", 1);
        assert!(url.as_str().starts_with(
            "https://ghe.example.com/api/v3/search/repositories?sort=stars&q=x"
        ));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        assert!(SearchClient::new("not a url").is_err());
    }
}
