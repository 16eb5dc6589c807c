//! Bill fetcher - client-side filtered

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{SearchDomain, SearchQuery, SearchResult};
use crate::domain::traits::{DomainFetcher, FetchResult};

use super::{format_amount, get_json, matches_query};

/// Bill domain fetcher.
///
/// Bills match on either the name or the free-text description.
pub struct BillFetcher {
    base_url: String,
    client: Client,
}

impl BillFetcher {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn list_url(&self) -> String {
        format!("{}/api/bills", self.base_url)
    }
}

/// Bill record as returned by the bill service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BillRecord {
    id: i64,
    name: Option<String>,
    description: Option<String>,
    amount: Option<f64>,
    due_date: Option<String>,
}

fn select(records: Vec<BillRecord>, query: &SearchQuery) -> Vec<SearchResult> {
    records
        .into_iter()
        .filter(|record| {
            matches_query(
                &query.text,
                &[record.name.as_deref(), record.description.as_deref()],
            )
        })
        .take(query.limit)
        .map(to_result)
        .collect()
}

/// Render an ISO due date for display, keeping the raw value on parse failure.
fn format_due_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn to_result(record: BillRecord) -> SearchResult {
    let subtitle = match (record.amount, record.due_date.as_deref()) {
        (Some(amount), Some(due)) => {
            format!("{} • due {}", format_amount(amount), format_due_date(due))
        }
        (Some(amount), None) => format_amount(amount),
        (None, Some(due)) => format!("due {}", format_due_date(due)),
        (None, None) => "Bill".to_string(),
    };

    let mut result = SearchResult::new(
        record.id.to_string(),
        SearchDomain::Bill,
        record.name.unwrap_or_default(),
    )
    .with_subtitle(subtitle)
    .with_icon("event")
    .with_color("#FB8C00");

    if let Some(amount) = record.amount {
        result = result.with_meta("amount", amount.into());
    }
    if let Some(due_date) = record.due_date {
        result = result.with_meta("dueDate", due_date.into());
    }
    result
}

#[async_trait]
impl DomainFetcher for BillFetcher {
    fn domain(&self) -> SearchDomain {
        SearchDomain::Bill
    }

    async fn fetch(&self, query: &SearchQuery) -> FetchResult<Vec<SearchResult>> {
        let mut params = Vec::new();
        if let Some(target_id) = query.target_id {
            params.push(("targetId", target_id.to_string()));
        }

        let records: Vec<BillRecord> =
            get_json(&self.client, &self.list_url(), &params, query.auth_token.as_deref())
                .await?;

        Ok(select(records, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matches_on_name_or_description() {
        let records: Vec<BillRecord> = serde_json::from_value(json!([
            {"id": 1, "name": "Internet", "description": "Fiber plan"},
            {"id": 2, "name": "Water", "description": "City utilities"},
            {"id": 3, "name": "Gym"},
        ]))
        .unwrap();

        let query = SearchQuery::new("utilities");
        let results = select(records, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Water");
    }

    #[test]
    fn test_subtitle_renders_amount_and_due_date() {
        let record: BillRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "Internet",
            "amount": 49.9,
            "dueDate": "2025-07-05",
        }))
        .unwrap();

        assert_eq!(to_result(record).subtitle, "$49.90 • due Jul 5, 2025");
    }

    #[test]
    fn test_unparseable_due_date_is_kept_raw() {
        assert_eq!(format_due_date("next week"), "next week");
    }
}
