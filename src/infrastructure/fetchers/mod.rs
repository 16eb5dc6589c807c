//! Domain fetchers - one outbound client per searched domain
//!
//! Each fetcher issues exactly one call to its domain service, applies that
//! domain's own filter rule, truncates to the requested limit and maps the
//! surviving records into the common result shape. The six fetchers are
//! deliberately separate types: their record shapes and subtitle rules differ
//! even where the call dance looks alike.

pub mod bill;
pub mod budget;
pub mod category;
pub mod expense;
pub mod friend;
pub mod payment_method;

pub use bill::BillFetcher;
pub use budget::BudgetFetcher;
pub use category::CategoryFetcher;
pub use expense::ExpenseFetcher;
pub use friend::FriendFetcher;
pub use payment_method::PaymentMethodFetcher;

use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::application::errors::FetchError;
use crate::domain::traits::{DomainFetcher, FetchResult};
use crate::infrastructure::config::Config;

/// Construct the full fetcher set from configuration.
///
/// The shared client carries the global search timeout, so no single call can
/// outlive the whole batch budget.
pub fn build_fetchers(config: &Config, client: &Client) -> Vec<Arc<dyn DomainFetcher>> {
    vec![
        Arc::new(ExpenseFetcher::new(
            config.domains.expense_base_url.clone(),
            client.clone(),
        )),
        Arc::new(BudgetFetcher::new(
            config.domains.budget_base_url.clone(),
            client.clone(),
        )),
        Arc::new(CategoryFetcher::new(
            config.domains.category_base_url.clone(),
            client.clone(),
        )),
        Arc::new(BillFetcher::new(
            config.domains.bill_base_url.clone(),
            client.clone(),
        )),
        Arc::new(PaymentMethodFetcher::new(
            config.domains.payment_method_base_url.clone(),
            client.clone(),
        )),
        Arc::new(FriendFetcher::new(
            config.domains.friend_base_url.clone(),
            client.clone(),
        )),
    ]
}

/// Case-insensitive substring containment across a domain's display fields.
///
/// A record matches when the query is a substring of any configured field.
pub(crate) fn matches_query(query: &str, fields: &[Option<&str>]) -> bool {
    let needle = query.to_lowercase();
    fields
        .iter()
        .filter_map(|field| *field)
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Issue one authenticated GET and decode the JSON body.
///
/// The caller's bearer token is forwarded unchanged when present.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    params: &[(&str, String)],
    auth_token: Option<&str>,
) -> FetchResult<T> {
    let mut request = client.get(url).query(params);
    if let Some(token) = auth_token {
        request = request.header("Authorization", token);
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::UpstreamStatus { status, body });
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

/// Display formatting for monetary amounts
pub(crate) fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let name = Some("Groceries");
        assert!(matches_query("cer", &[name]));
        assert!(matches_query("GROCER", &[name]));
        assert!(matches_query("groceries", &[name]));
        assert!(!matches_query("fuel", &[name]));
    }

    #[test]
    fn test_match_any_configured_field() {
        assert!(matches_query("electric", &[Some("Utilities"), Some("Electric bill")]));
        assert!(!matches_query("electric", &[Some("Utilities"), None]));
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(500.0), "$500.00");
        assert_eq!(format_amount(12.345), "$12.35");
    }
}
