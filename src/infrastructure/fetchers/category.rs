//! Category fetcher - client-side filtered

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{SearchDomain, SearchQuery, SearchResult};
use crate::domain::traits::{DomainFetcher, FetchResult};

use super::{get_json, matches_query};

/// Category domain fetcher.
///
/// Categories carry their own icon and color; both pass through to the
/// result untouched.
pub struct CategoryFetcher {
    base_url: String,
    client: Client,
}

impl CategoryFetcher {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn list_url(&self) -> String {
        format!("{}/api/categories", self.base_url)
    }
}

/// Category record as returned by the category service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRecord {
    id: i64,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    icon: Option<String>,
    color: Option<String>,
}

fn select(records: Vec<CategoryRecord>, query: &SearchQuery) -> Vec<SearchResult> {
    records
        .into_iter()
        .filter(|record| matches_query(&query.text, &[record.name.as_deref()]))
        .take(query.limit)
        .map(to_result)
        .collect()
}

fn to_result(record: CategoryRecord) -> SearchResult {
    let subtitle = match record.kind.as_deref() {
        Some("INCOME") => "Income category",
        Some("EXPENSE") => "Expense category",
        _ => "Category",
    };

    let mut result = SearchResult::new(
        record.id.to_string(),
        SearchDomain::Category,
        record.name.unwrap_or_default(),
    )
    .with_subtitle(subtitle);

    if let Some(icon) = record.icon {
        result = result.with_icon(icon);
    }
    if let Some(color) = record.color {
        result = result.with_color(color);
    }
    result
}

#[async_trait]
impl DomainFetcher for CategoryFetcher {
    fn domain(&self) -> SearchDomain {
        SearchDomain::Category
    }

    async fn fetch(&self, query: &SearchQuery) -> FetchResult<Vec<SearchResult>> {
        let mut params = Vec::new();
        if let Some(target_id) = query.target_id {
            params.push(("targetId", target_id.to_string()));
        }

        let records: Vec<CategoryRecord> =
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
    fn test_service_presentation_hints_pass_through() {
        let record: CategoryRecord = serde_json::from_value(json!({
            "id": 7,
            "name": "Dining",
            "type": "EXPENSE",
            "icon": "restaurant",
            "color": "#FF7043",
        }))
        .unwrap();

        let result = to_result(record);
        assert_eq!(result.icon.as_deref(), Some("restaurant"));
        assert_eq!(result.color.as_deref(), Some("#FF7043"));
        assert_eq!(result.subtitle, "Expense category");
    }

    #[test]
    fn test_unknown_kind_gets_plain_subtitle() {
        let record: CategoryRecord =
            serde_json::from_value(json!({"id": 1, "name": "Other"})).unwrap();
        assert_eq!(to_result(record).subtitle, "Category");
    }

    #[test]
    fn test_filter_matches_on_name() {
        let records: Vec<CategoryRecord> = serde_json::from_value(json!([
            {"id": 1, "name": "Dining"},
            {"id": 2, "name": "Transport"},
        ]))
        .unwrap();

        let query = SearchQuery::new("din");
        let results = select(records, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Dining");
    }
}
