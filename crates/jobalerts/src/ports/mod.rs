//! Ports (Interfaces)
//!
//! Abstract interfaces between the search use case and job board adapters.
//! Implementations live in adapter crates (e.g. jobalerts-workua).

mod listing_source;

pub use listing_source::*;
