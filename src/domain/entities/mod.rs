//! Domain entities - Request-scoped search value objects
//!
//! Everything here is created at request entry and discarded at response
//! emission; nothing is persisted.

pub mod query;
pub mod response;
pub mod result;

pub use query::{SearchQuery, DEFAULT_RESULT_LIMIT};
pub use response::UniversalSearchResponse;
pub use result::{SearchDomain, SearchResult};
