//! Job Alerts Domain Library
//!
//! Core types and interfaces for the Job Alerts chat bot, which looks up
//! job postings by keyword and answers with a short list of title/link pairs.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): listings, queries, search results and errors
//! - **Ports** (`ports/`): the `ListingSource` interface implemented by job board adapters
//! - **Application** (`application/`): the `JobSearchService` use case invoked by chat front-ends
//!
//! # Usage
//!
//! ```rust,ignore
//! use jobalerts::{JobSearchService, SearchQuery};
//!
//! let service = JobSearchService::new(Arc::new(source));
//! let query = SearchQuery::parse("Python").unwrap();
//! let reply = service.search(&query).await?.to_reply();
//! ```

pub mod application;
pub mod domain;
pub mod ports;

pub use application::{JobSearchService, DEFAULT_MAX_RESULTS};
pub use domain::{
    JobListing, SearchError, SearchQuery, SearchResult, NO_MATCHES_PLACEHOLDER, REPLY_SEPARATOR,
    UNREACHABLE_PLACEHOLDER,
};
pub use ports::ListingSource;
