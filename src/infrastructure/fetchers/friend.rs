//! Friend fetcher - server-side filtered

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{SearchDomain, SearchQuery, SearchResult};
use crate::domain::traits::{DomainFetcher, FetchResult};

use super::get_json;

/// Friend domain fetcher.
///
/// The friendship service searches by name and email itself; the query is
/// forwarded as-is and no client-side substring pass happens here. Searching
/// on behalf of another user is not supported by this domain, so the target
/// id is not forwarded.
pub struct FriendFetcher {
    base_url: String,
    client: Client,
}

impl FriendFetcher {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/api/friendships/search", self.base_url)
    }
}

/// Friendship record as returned by the friendship service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FriendRecord {
    id: i64,
    full_name: Option<String>,
    email: Option<String>,
}

fn select(records: Vec<FriendRecord>, query: &SearchQuery) -> Vec<SearchResult> {
    records
        .into_iter()
        .take(query.limit)
        .map(to_result)
        .collect()
}

fn to_result(record: FriendRecord) -> SearchResult {
    let title = record
        .full_name
        .clone()
        .or_else(|| record.email.clone())
        .unwrap_or_default();

    SearchResult::new(record.id.to_string(), SearchDomain::Friend, title)
        .with_subtitle(record.email.unwrap_or_default())
        .with_icon("person")
        .with_color("#1E88E5")
}

#[async_trait]
impl DomainFetcher for FriendFetcher {
    fn domain(&self) -> SearchDomain {
        SearchDomain::Friend
    }

    async fn fetch(&self, query: &SearchQuery) -> FetchResult<Vec<SearchResult>> {
        let params = vec![("query", query.text.clone())];

        let records: Vec<FriendRecord> =
            get_json(&self.client, &self.search_url(), &params, query.auth_token.as_deref())
                .await?;

        Ok(select(records, query))
    }
}
