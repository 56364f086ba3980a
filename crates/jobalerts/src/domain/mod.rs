//! Domain Layer
//!
//! Pure domain logic without network or chat platform dependencies.

pub mod entities;
pub mod errors;
pub mod search_result;

pub use entities::*;
pub use errors::*;
pub use search_result::*;
