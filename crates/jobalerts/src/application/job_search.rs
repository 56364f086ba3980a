//! Job Search Application Service
//!
//! Runs one search against a listing source and turns the outcome into
//! a `SearchResult` the chat layer can render.

use std::sync::Arc;

use crate::domain::{SearchError, SearchQuery, SearchResult};
use crate::ports::ListingSource;

/// Listings shown per search unless configured otherwise
pub const DEFAULT_MAX_RESULTS: usize = 7;

/// Application service for keyword searches
pub struct JobSearchService<S: ListingSource> {
    source: Arc<S>,
    max_results: usize,
}

impl<S: ListingSource> JobSearchService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Override how many job cards are considered per search
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Search for `query`.
    ///
    /// An unreachable board is an expected outcome and comes back as
    /// `SearchResult::Unreachable`. Any other source error is returned to
    /// the caller.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        match self.source.fetch_listings(query, self.max_results).await {
            Ok(listings) => {
                let result = SearchResult::from_listings(listings);
                tracing::info!(
                    source = %self.source.name(),
                    query = %query,
                    found = result.listing_count(),
                    "Search completed"
                );
                Ok(result)
            }
            Err(SearchError::Unreachable(reason)) => {
                tracing::warn!(
                    source = %self.source.name(),
                    query = %query,
                    reason = %reason,
                    "Job board unreachable"
                );
                Ok(SearchResult::Unreachable)
            }
            Err(e) => Err(e),
        }
    }

    /// Search and return the display lines (entries or a single placeholder)
    pub async fn search_lines(&self, query: &SearchQuery) -> Result<Vec<String>, SearchError> {
        Ok(self.search(query).await?.lines())
    }
}
