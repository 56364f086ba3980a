//! Work.ua adapter for Job Alerts
//!
//! Fetches a Work.ua search results page and extracts job listings from it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jobalerts_workua::{WorkUaConfig, WorkUaSource};
//!
//! let source = WorkUaSource::new(WorkUaConfig::default())?;
//! let listings = source.fetch_listings(&query, 7).await?;
//! ```

mod config;
mod error;
mod extractor;
mod fetcher;
mod source;

pub use config::{
    WorkUaConfig, CARD_SELECTOR, DEFAULT_TIMEOUT, TITLE_SELECTOR, USER_AGENT, WORK_UA_ORIGIN,
};
pub use error::{FetchError, SetupError};
pub use extractor::{absolute_link, ListingExtractor};
pub use fetcher::{ListingsPage, WorkUaFetcher};
pub use source::WorkUaSource;
