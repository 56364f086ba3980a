//! Listing Source Port
//!
//! Abstract interface for fetching job listings from a job board.

use async_trait::async_trait;

use crate::domain::{JobListing, SearchError, SearchQuery};

/// A job board that can be searched by keyword
///
/// Selector strings and other markup details stay inside the implementation,
/// so a board changing its HTML only touches the adapter.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch at most `limit` listings for `query`, in the board's own order.
    ///
    /// An empty vector means the page was read but nothing matched.
    async fn fetch_listings(
        &self,
        query: &SearchQuery,
        limit: usize,
    ) -> Result<Vec<JobListing>, SearchError>;

    /// Source name used in logs (e.g. "work.ua")
    fn name(&self) -> &str;
}
