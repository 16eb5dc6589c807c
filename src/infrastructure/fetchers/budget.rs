//! Budget fetcher - client-side filtered

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{SearchDomain, SearchQuery, SearchResult};
use crate::domain::traits::{DomainFetcher, FetchResult};

use super::{format_amount, get_json, matches_query};

/// Budget domain fetcher.
///
/// The budget service has no search endpoint; the full collection is fetched
/// and matched here against the budget name.
pub struct BudgetFetcher {
    base_url: String,
    client: Client,
}

impl BudgetFetcher {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn list_url(&self) -> String {
        format!("{}/api/budgets", self.base_url)
    }
}

/// Budget record as returned by the budget service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BudgetRecord {
    id: i64,
    name: Option<String>,
    amount: Option<f64>,
    period: Option<String>,
}

fn select(records: Vec<BudgetRecord>, query: &SearchQuery) -> Vec<SearchResult> {
    // Filter on the full collection first, then truncate
    records
        .into_iter()
        .filter(|record| matches_query(&query.text, &[record.name.as_deref()]))
        .take(query.limit)
        .map(to_result)
        .collect()
}

fn to_result(record: BudgetRecord) -> SearchResult {
    let subtitle = match record.amount {
        Some(amount) => format!("Budget • {}", format_amount(amount)),
        None => "Budget".to_string(),
    };

    let mut result = SearchResult::new(
        record.id.to_string(),
        SearchDomain::Budget,
        record.name.unwrap_or_default(),
    )
    .with_subtitle(subtitle)
    .with_icon("account_balance_wallet")
    .with_color("#43A047");

    if let Some(amount) = record.amount {
        result = result.with_meta("amount", amount.into());
    }
    if let Some(period) = record.period {
        result = result.with_meta("period", period.into());
    }
    result
}

#[async_trait]
impl DomainFetcher for BudgetFetcher {
    fn domain(&self) -> SearchDomain {
        SearchDomain::Budget
    }

    async fn fetch(&self, query: &SearchQuery) -> FetchResult<Vec<SearchResult>> {
        let mut params = Vec::new();
        if let Some(target_id) = query.target_id {
            params.push(("targetId", target_id.to_string()));
        }

        let records: Vec<BudgetRecord> =
            get_json(&self.client, &self.list_url(), &params, query.auth_token.as_deref())
                .await?;

        Ok(select(records, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<BudgetRecord> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Travel Fund", "amount": 500.0},
            {"id": 2, "name": "Rent"},
        ]))
        .unwrap()
    }

    #[test]
    fn test_only_matching_budgets_survive() {
        let query = SearchQuery::new("travel").with_limit(3);
        let results = select(sample(), &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Travel Fund");
        assert_eq!(results[0].subtitle, "Budget • $500.00");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        for text in ["cer", "GROCER", "groceries"] {
            let query = SearchQuery::new(text);
            let records: Vec<BudgetRecord> =
                serde_json::from_value(json!([{"id": 1, "name": "Groceries"}])).unwrap();
            assert_eq!(select(records, &query).len(), 1, "query {text:?} should match");
        }
    }

    #[test]
    fn test_truncation_happens_after_filtering() {
        // Non-matching records ahead of matching ones must not eat the limit
        let records: Vec<BudgetRecord> = serde_json::from_value(json!([
            {"id": 1, "name": "Rent"},
            {"id": 2, "name": "Utilities"},
            {"id": 3, "name": "Trip north"},
            {"id": 4, "name": "Trip south"},
        ]))
        .unwrap();

        let query = SearchQuery::new("trip").with_limit(2);
        let results = select(records, &query);

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.title.starts_with("Trip")));
    }

    #[test]
    fn test_missing_amount_keeps_plain_subtitle() {
        let query = SearchQuery::new("rent");
        let results = select(sample(), &query);
        assert_eq!(results[0].subtitle, "Budget");
    }
}
