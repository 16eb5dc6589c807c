//! Payment method fetcher - client-side filtered

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{SearchDomain, SearchQuery, SearchResult};
use crate::domain::traits::{DomainFetcher, FetchResult};

use super::{get_json, matches_query};

/// Payment method domain fetcher.
///
/// Methods match on either the display name or the method kind, so a query
/// like "card" finds every card.
pub struct PaymentMethodFetcher {
    base_url: String,
    client: Client,
}

impl PaymentMethodFetcher {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn list_url(&self) -> String {
        format!("{}/api/payment-methods", self.base_url)
    }
}

/// Payment method record as returned by the payment-method service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentMethodRecord {
    id: i64,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    last_four: Option<String>,
}

fn select(records: Vec<PaymentMethodRecord>, query: &SearchQuery) -> Vec<SearchResult> {
    records
        .into_iter()
        .filter(|record| {
            matches_query(&query.text, &[record.name.as_deref(), record.kind.as_deref()])
        })
        .take(query.limit)
        .map(to_result)
        .collect()
}

fn describe_kind(kind: &str) -> String {
    match kind {
        "CREDIT_CARD" => "Credit card".to_string(),
        "DEBIT_CARD" => "Debit card".to_string(),
        "BANK_ACCOUNT" => "Bank account".to_string(),
        "E_WALLET" => "E-wallet".to_string(),
        "CASH" => "Cash".to_string(),
        other => other.to_string(),
    }
}

fn to_result(record: PaymentMethodRecord) -> SearchResult {
    let subtitle = match (record.kind.as_deref(), record.last_four.as_deref()) {
        (Some(kind), Some(last_four)) => format!("{} •••• {}", describe_kind(kind), last_four),
        (Some(kind), None) => describe_kind(kind),
        (None, Some(last_four)) => format!("•••• {}", last_four),
        (None, None) => "Payment method".to_string(),
    };

    SearchResult::new(
        record.id.to_string(),
        SearchDomain::PaymentMethod,
        record.name.unwrap_or_default(),
    )
    .with_subtitle(subtitle)
    .with_icon("credit_card")
    .with_color("#5E35B1")
}

#[async_trait]
impl DomainFetcher for PaymentMethodFetcher {
    fn domain(&self) -> SearchDomain {
        SearchDomain::PaymentMethod
    }

    async fn fetch(&self, query: &SearchQuery) -> FetchResult<Vec<SearchResult>> {
        let mut params = Vec::new();
        if let Some(target_id) = query.target_id {
            params.push(("targetId", target_id.to_string()));
        }

        let records: Vec<PaymentMethodRecord> =
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
    fn test_subtitle_masks_card_suffix() {
        let record: PaymentMethodRecord = serde_json::from_value(json!({
            "id": 3,
            "name": "Everyday Visa",
            "type": "CREDIT_CARD",
            "lastFour": "4242",
        }))
        .unwrap();

        assert_eq!(to_result(record).subtitle, "Credit card •••• 4242");
    }

    #[test]
    fn test_kind_is_also_searchable() {
        let records: Vec<PaymentMethodRecord> = serde_json::from_value(json!([
            {"id": 1, "name": "Everyday Visa", "type": "CREDIT_CARD"},
            {"id": 2, "name": "Payroll", "type": "BANK_ACCOUNT"},
        ]))
        .unwrap();

        let query = SearchQuery::new("credit");
        let results = select(records, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Everyday Visa");
    }

    #[test]
    fn test_unknown_kind_is_shown_verbatim() {
        let record: PaymentMethodRecord =
            serde_json::from_value(json!({"id": 1, "name": "Voucher", "type": "GIFT_CARD"}))
                .unwrap();
        assert_eq!(to_result(record).subtitle, "GIFT_CARD");
    }
}
