//! HTTP client for the business search backend.
//!
//! Wraps `reqwest` with the backend's `POST /search` contract: one JSON
//! request per search, typed 2xx bodies, and the backend's `{"error": ...}`
//! message surfaced on failure. Searches are never retried; a search runs
//! exactly once and its outcome is reported as-is.

use std::time::Duration;

use bizfind_core::{AppConfig, SearchBackend, SearchOutcome, SearchRequest};
use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::types::{ErrorBody, SearchRequestBody, SearchResponse};

/// Status message used when a failed response carries no `error` text.
pub const GENERIC_FAILURE_MESSAGE: &str = "Search failed";

const SEARCH_PATH: &str = "search";

/// Client for the backend search endpoint.
///
/// Use [`SearchClient::from_config`] in the binary or
/// [`SearchClient::new`] to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    search_url: Url,
}

impl SearchClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// `timeout_secs` bounds a whole round trip at the transport layer; the
    /// client itself never abandons a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            search_url: Self::search_url(base_url)?,
        })
    }

    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`SearchClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SearchError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.search_url
    }

    /// Sends one `POST /search` and returns the parsed outcome.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Request`] on a non-2xx status, carrying the backend's
    ///   `error` message or [`GENERIC_FAILURE_MESSAGE`].
    /// - [`SearchError::Transport`] when no response is obtained.
    /// - [`SearchError::Deserialize`] when a 2xx body does not match the
    ///   response contract.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let body = SearchRequestBody::from(request);
        tracing::debug!(url = %self.search_url, query = %body.query, "POST search");

        let response = self
            .client
            .post(self.search_url.clone())
            .json(&body)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            // A body we cannot read is treated like a body without a message.
            let text = response.text().await.unwrap_or_default();
            let message = Self::error_message(&text);
            tracing::warn!(status = status.as_u16(), %message, "search backend returned an error");
            return Err(SearchError::Request {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&text).map_err(|e| SearchError::Deserialize {
                context: format!("search(query={})", request.query()),
                source: e,
            })?;

        tracing::debug!(
            received = parsed.results.len(),
            total_found = parsed.total_found,
            filtered_count = parsed.filtered_count,
            "search response parsed"
        );
        Ok(parsed.into())
    }

    /// Resolves `{base_url}/search`, keeping any path prefix on the base.
    fn search_url(base_url: &str) -> Result<Url, SearchError> {
        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| SearchError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };

        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL".to_owned()));
        }
        base.join(SEARCH_PATH).map_err(|e| invalid(e.to_string()))
    }

    /// Extracts the backend's `error` text from a failure body.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned())
    }
}

impl SearchBackend for SearchClient {
    type Error = SearchError;

    async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        SearchClient::search(self, request).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
