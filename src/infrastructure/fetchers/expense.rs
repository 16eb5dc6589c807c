//! Expense fetcher - server-side filtered

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{SearchDomain, SearchQuery, SearchResult};
use crate::domain::traits::{DomainFetcher, FetchResult};

use super::{format_amount, get_json};

/// Expense domain fetcher.
///
/// The expense service filters by name on its side; this fetcher only
/// truncates defensively and maps the records.
pub struct ExpenseFetcher {
    base_url: String,
    client: Client,
}

impl ExpenseFetcher {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/api/expenses/search", self.base_url)
    }
}

/// Expense record as returned by the expense service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseRecord {
    id: i64,
    expense_name: Option<String>,
    category: Option<String>,
    amount: Option<f64>,
    date: Option<String>,
}

fn select(records: Vec<ExpenseRecord>, query: &SearchQuery) -> Vec<SearchResult> {
    records
        .into_iter()
        .take(query.limit)
        .map(to_result)
        .collect()
}

fn to_result(record: ExpenseRecord) -> SearchResult {
    let subtitle = match (record.category.as_deref(), record.amount) {
        (Some(category), Some(amount)) => format!("{} • {}", category, format_amount(amount)),
        (Some(category), None) => category.to_string(),
        (None, Some(amount)) => format_amount(amount),
        (None, None) => "Expense".to_string(),
    };

    let mut result = SearchResult::new(
        record.id.to_string(),
        SearchDomain::Expense,
        record.expense_name.unwrap_or_default(),
    )
    .with_subtitle(subtitle)
    .with_icon("receipt_long")
    .with_color("#E53935");

    if let Some(amount) = record.amount {
        result = result.with_meta("amount", amount.into());
    }
    if let Some(date) = record.date {
        result = result.with_meta("date", date.into());
    }
    result
}

#[async_trait]
impl DomainFetcher for ExpenseFetcher {
    fn domain(&self) -> SearchDomain {
        SearchDomain::Expense
    }

    async fn fetch(&self, query: &SearchQuery) -> FetchResult<Vec<SearchResult>> {
        let mut params = vec![("expenseName", query.text.clone())];
        if let Some(target_id) = query.target_id {
            params.push(("targetId", target_id.to_string()));
        }

        let records: Vec<ExpenseRecord> =
            get_json(&self.client, &self.search_url(), &params, query.auth_token.as_deref())
                .await?;

        Ok(select(records, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(count: usize) -> Vec<ExpenseRecord> {
        (0..count)
            .map(|i| {
                serde_json::from_value(json!({
                    "id": i,
                    "expenseName": format!("Taxi ride {i}"),
                    "category": "Transport",
                    "amount": 12.5,
                    "date": "2025-06-01",
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_subtitle_combines_category_and_amount() {
        let result = to_result(records(1).remove(0));
        assert_eq!(result.subtitle, "Transport • $12.50");
        assert_eq!(result.kind, SearchDomain::Expense);
        assert_eq!(result.metadata.get("date"), Some(&"2025-06-01".into()));
    }

    #[test]
    fn test_subtitle_without_category_is_amount_only() {
        let record: ExpenseRecord =
            serde_json::from_value(json!({"id": 1, "expenseName": "Misc", "amount": 3.0}))
                .unwrap();
        assert_eq!(to_result(record).subtitle, "$3.00");
    }

    #[test]
    fn test_select_truncates_to_limit() {
        let query = SearchQuery::new("taxi").with_limit(3);
        let results = select(records(10), &query);
        assert_eq!(results.len(), 3);
    }
}
