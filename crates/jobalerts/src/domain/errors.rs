//! Domain Errors
//!
//! Failures a listing source can report to the search use case.

use thiserror::Error;

/// Errors returned by [`crate::ports::ListingSource`] implementations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport failure or non-200 response from the job board
    #[error("Job board unreachable: {0}")]
    Unreachable(String),

    /// The page was fetched but could not be turned into listings
    #[error("Listing extraction failed: {0}")]
    Extraction(String),
}
