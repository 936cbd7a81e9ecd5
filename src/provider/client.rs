use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::error::ProviderError;
use super::types::SearchResult;
use crate::constants::PROVIDER_TIMEOUT_SECS;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Minimal async interface the engine needs from a search backend.
///
/// Pagination is 1-based (`start` is the rank of the first item wanted) and
/// the real provider returns at most 10 items per call.
pub trait SearchProvider: Send + Sync {
    /// Fetches one page of results for `query`.
    fn search(
        &self,
        query: &str,
        start: usize,
        num: usize,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, ProviderError>> + Send;
}

/// Google Custom Search client.
#[derive(Debug, Clone)]
pub struct GoogleSearchClient {
    client: reqwest::Client,
    api_key: String,
    cx_id: String,
    endpoint: String,
}

impl GoogleSearchClient {
    /// Creates a client with the fixed per-call deadline.
    pub fn new(api_key: impl Into<String>, cx_id: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
            .build()
            .map_err(|source| ProviderError::RequestFailed { source })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            cx_id: cx_id.into(),
            endpoint: SEARCH_ENDPOINT.to_string(),
        })
    }

    /// Overrides the API endpoint (integration tests against a local stub).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Vec<CseItem>,
}

#[derive(Debug, Deserialize)]
struct CseItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

impl From<CseItem> for SearchResult {
    fn from(item: CseItem) -> Self {
        SearchResult::new(item.title, item.snippet, item.link)
    }
}

impl SearchProvider for GoogleSearchClient {
    async fn search(
        &self,
        query: &str,
        start: usize,
        num: usize,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        debug!(query, start, num, "provider call");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cx_id.as_str()),
                ("q", query),
            ])
            .query(&[("start", start), ("num", num)])
            .send()
            .await
            .map_err(|source| ProviderError::RequestFailed { source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let data: CseResponse = response
            .json()
            .await
            .map_err(|source| ProviderError::DecodeFailed { source })?;

        Ok(data.items.into_iter().map(SearchResult::from).collect())
    }
}

#[cfg(test)]
pub(super) fn parse_response_body(body: &str) -> Result<Vec<SearchResult>, serde_json::Error> {
    let data: CseResponse = serde_json::from_str(body)?;
    Ok(data.items.into_iter().map(SearchResult::from).collect())
}
