//! Work.ua adapter errors

use jobalerts::SearchError;
use thiserror::Error;

/// Failure to get a search results page
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, timeout, or any status other than 200
    #[error("Could not reach {url}: {reason}")]
    Unreachable { url: String, reason: String },
}

impl From<FetchError> for SearchError {
    fn from(err: FetchError) -> Self {
        SearchError::Unreachable(err.to_string())
    }
}

/// Invalid adapter configuration, reported when the source is built
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },
}
