//! Aggregated fan-out response returned to the caller

use serde::{Deserialize, Serialize};

use super::result::{SearchDomain, SearchResult};

/// The merged response for one universal search.
///
/// Each domain owns exactly one list; a domain that was not dispatched keeps
/// its empty list. `total_results` is computed once, after every domain has
/// settled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversalSearchResponse {
    pub query: String,
    pub expenses: Vec<SearchResult>,
    pub budgets: Vec<SearchResult>,
    pub categories: Vec<SearchResult>,
    pub bills: Vec<SearchResult>,
    pub payment_methods: Vec<SearchResult>,
    pub friends: Vec<SearchResult>,
    pub total_results: usize,
    pub execution_time_ms: u64,
}

impl UniversalSearchResponse {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Write one domain's settled list into its own slot.
    pub fn set_results(&mut self, domain: SearchDomain, results: Vec<SearchResult>) {
        match domain {
            SearchDomain::Expense => self.expenses = results,
            SearchDomain::Budget => self.budgets = results,
            SearchDomain::Category => self.categories = results,
            SearchDomain::Bill => self.bills = results,
            SearchDomain::PaymentMethod => self.payment_methods = results,
            SearchDomain::Friend => self.friends = results,
        }
    }

    pub fn results(&self, domain: SearchDomain) -> &[SearchResult] {
        match domain {
            SearchDomain::Expense => &self.expenses,
            SearchDomain::Budget => &self.budgets,
            SearchDomain::Category => &self.categories,
            SearchDomain::Bill => &self.bills,
            SearchDomain::PaymentMethod => &self.payment_methods,
            SearchDomain::Friend => &self.friends,
        }
    }

    /// Sum of the six list lengths.
    pub fn sum_results(&self) -> usize {
        SearchDomain::ALL.iter().map(|d| self.results(*d).len()).sum()
    }
}
