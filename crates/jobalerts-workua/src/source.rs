//! ListingSource implementation for Work.ua

use async_trait::async_trait;
use jobalerts::{JobListing, ListingSource, SearchError, SearchQuery};
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::WorkUaConfig;
use crate::error::SetupError;
use crate::extractor::ListingExtractor;
use crate::fetcher::WorkUaFetcher;

/// Work.ua search: one page fetch followed by card extraction
pub struct WorkUaSource {
    fetcher: WorkUaFetcher,
    extractor: Arc<ListingExtractor>,
}

impl WorkUaSource {
    /// Build the HTTP client and compile the selectors.
    ///
    /// Invalid selectors or origin are reported here rather than on the
    /// first search.
    pub fn new(config: WorkUaConfig) -> Result<Self, SetupError> {
        let fetcher = WorkUaFetcher::new(&config)?;
        let extractor = Arc::new(ListingExtractor::new(&config)?);
        Ok(Self { fetcher, extractor })
    }
}

#[async_trait]
impl ListingSource for WorkUaSource {
    async fn fetch_listings(
        &self,
        query: &SearchQuery,
        limit: usize,
    ) -> Result<Vec<JobListing>, SearchError> {
        let page = self.fetcher.fetch_listings_page(query).await?;

        // HTML parsing is CPU-bound and the parsed tree is not Send
        let extractor = Arc::clone(&self.extractor);
        let url = page.url.clone();
        let listings =
            tokio::task::spawn_blocking(move || extractor.extract_listings(&page.document(), limit))
                .await
                .map_err(|e| {
                    error!(url = %url, error = %e, "Listing extraction task failed");
                    SearchError::Extraction(e.to_string())
                })?;

        debug!(url = %url, found = listings.len(), "Extracted listings");
        Ok(listings)
    }

    fn name(&self) -> &str {
        "work.ua"
    }
}
