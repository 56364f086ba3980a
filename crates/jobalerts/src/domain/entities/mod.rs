//! Domain Entities
//!
//! - SearchQuery: keyword text typed by the user
//! - JobListing: one (title, link) pair extracted from a job card

mod listing;
mod query;

pub use listing::*;
pub use query::*;
