//! Response assembly - merges the settled per-domain lists into one response

use std::time::Duration;

use crate::domain::entities::{SearchDomain, SearchResult, UniversalSearchResponse};

/// Compose the final response from the settled per-domain lists.
///
/// `total_results` is computed once, here, after every domain has settled
/// (completed, failed, or timed out).
pub fn assemble(
    query: impl Into<String>,
    settled: Vec<(SearchDomain, Vec<SearchResult>)>,
    elapsed: Duration,
) -> UniversalSearchResponse {
    let mut response = UniversalSearchResponse::new(query);
    for (domain, results) in settled {
        response.set_results(domain, results);
    }
    response.total_results = response.sum_results();
    response.execution_time_ms = elapsed.as_millis() as u64;
    response
}
