//! Search dispatcher - owns the concurrency and timeout contract

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::entities::{SearchDomain, SearchQuery, SearchResult, UniversalSearchResponse};
use crate::domain::traits::DomainFetcher;

use super::aggregator;

/// Collective wait applied to the whole batch when none is configured
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Runs the active fetchers concurrently and joins them under one deadline.
///
/// Each fetcher is an independent tokio task; a slow or failing domain only
/// degrades its own list to empty. A task that misses the deadline is
/// abandoned, not cancelled: its eventual result is discarded while the
/// outbound call keeps running to its own timeout in the background.
pub struct SearchDispatcher {
    fetchers: Vec<Arc<dyn DomainFetcher>>,
    timeout: Duration,
}

impl SearchDispatcher {
    pub fn new(fetchers: Vec<Arc<dyn DomainFetcher>>, timeout: Duration) -> Self {
        Self { fetchers, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one search across every requested domain.
    pub async fn dispatch(&self, query: SearchQuery) -> UniversalSearchResponse {
        let started = Instant::now();
        let query = Arc::new(query);

        let mut handles = Vec::with_capacity(self.fetchers.len());
        for fetcher in &self.fetchers {
            let domain = fetcher.domain();
            if !query.includes(domain) {
                continue;
            }

            let fetcher = Arc::clone(fetcher);
            let query = Arc::clone(&query);
            handles.push((
                domain,
                tokio::spawn(async move { run_fetch(fetcher, &query).await }),
            ));
        }

        let deadline = started + self.timeout;
        let mut settled: Vec<(SearchDomain, Vec<SearchResult>)> =
            Vec::with_capacity(handles.len());
        let mut unfinished = 0usize;

        for (domain, handle) in handles {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match tokio::time::timeout(remaining, handle).await {
                Ok(Ok(results)) => settled.push((domain, results)),
                Ok(Err(e)) => {
                    tracing::warn!("{} search task failed: {}", domain, e);
                    settled.push((domain, Vec::new()));
                }
                Err(_) => {
                    unfinished += 1;
                    settled.push((domain, Vec::new()));
                }
            }
        }

        if unfinished > 0 {
            tracing::warn!(
                "Search timed out after {}ms, {} domain(s) unfinished",
                self.timeout.as_millis(),
                unfinished
            );
        }

        aggregator::assemble(query.text.clone(), settled, started.elapsed())
    }
}

/// Run one fetcher; failures degrade to an empty list here, at the boundary.
async fn run_fetch(fetcher: Arc<dyn DomainFetcher>, query: &SearchQuery) -> Vec<SearchResult> {
    match fetcher.fetch(query).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!("{} search degraded: {}", fetcher.domain(), e);
            Vec::new()
        }
    }
}
