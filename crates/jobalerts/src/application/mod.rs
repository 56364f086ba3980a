//! Application Services (Use Cases)

mod job_search;

pub use job_search::*;
