use async_trait::async_trait;

use crate::application::errors::FetchError;
use crate::domain::entities::{SearchDomain, SearchQuery, SearchResult};

/// Result type for fetcher operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Fetcher trait - abstraction for one domain service behind the fan-out
#[async_trait]
pub trait DomainFetcher: Send + Sync {
    /// Domain this fetcher covers
    fn domain(&self) -> SearchDomain;

    /// Issue the single outbound call, apply the domain's filter rule and
    /// map the surviving records.
    ///
    /// Errors are degraded to an empty list at the dispatch boundary; the
    /// returned list is never longer than `query.limit`.
    async fn fetch(&self, query: &SearchQuery) -> FetchResult<Vec<SearchResult>>;
}
