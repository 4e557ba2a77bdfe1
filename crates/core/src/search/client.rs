//! HTTP client for the route-search backend.

use tracing::{debug, warn};

use crate::route::aggregator::merge_candidates;
use crate::route::types::MergedRoute;

use super::types::{RouteSearchRequest, RouteSearchResponse};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("route search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("route search backend returned {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the route-search collaborator.
///
/// One search is one POST; the response carries every objective at once.
/// There is no retry or caching in this layer — a failed search is reported
/// to the caller and the previously displayed results stay untouched.
#[derive(Clone, Debug)]
pub struct RouteSearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl RouteSearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// Search a station pair and return display-ready, deduplicated routes.
    pub async fn search(
        &self,
        from_station: &str,
        to_station: &str,
    ) -> Result<Vec<MergedRoute>, SearchError> {
        let request = RouteSearchRequest::now(from_station, to_station);
        debug!(from = from_station, to = to_station, "requesting routes");

        let response = self
            .http
            .post(format!("{}/api/routes/search", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, from = from_station, to = to_station, "route search rejected");
            return Err(SearchError::Status(status));
        }

        let response: RouteSearchResponse = response.json().await?;
        Ok(merge_candidates(response.into_candidates()))
    }
}
