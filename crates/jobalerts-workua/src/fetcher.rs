//! Search results page fetcher

use jobalerts::SearchQuery;
use reqwest::{Client, StatusCode};
use scraper::Html;
use tracing::{debug, warn};

use crate::config::WorkUaConfig;
use crate::error::{FetchError, SetupError};

/// Raw HTML of a search results page
#[derive(Debug, Clone)]
pub struct ListingsPage {
    /// URL the page was requested from
    pub url: String,
    /// Response body
    pub html: String,
}

impl ListingsPage {
    /// Parse the body into a document for structural selection
    pub fn document(&self) -> Html {
        Html::parse_document(&self.html)
    }
}

/// Issues the single GET behind each search
#[derive(Debug, Clone)]
pub struct WorkUaFetcher {
    client: Client,
    origin: String,
}

impl WorkUaFetcher {
    pub fn new(config: &WorkUaConfig) -> Result<Self, SetupError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            origin: config.origin.trim_end_matches('/').to_string(),
        })
    }

    /// Search URL for a query: `<origin>/jobs-<query>/`
    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/jobs-{}/", self.origin, query.path_segment())
    }

    /// Fetch the search results page for `query`.
    ///
    /// Only a 200 response counts as success. Redirects are followed.
    pub async fn fetch_listings_page(
        &self,
        query: &SearchQuery,
    ) -> Result<ListingsPage, FetchError> {
        let url = self.search_url(query);
        debug!(url = %url, "Fetching search results page");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Search request failed");
            FetchError::Unreachable {
                url: url.clone(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %url, status = %status, "Unexpected status from job board");
            return Err(FetchError::Unreachable {
                url,
                reason: format!("HTTP {}", status),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Unreachable {
                url: url.clone(),
                reason: format!("Failed to read response body: {}", e),
            })?;

        debug!(url = %url, bytes = html.len(), "Fetched search results page");

        Ok(ListingsPage { url, html })
    }
}
