//! HTTP handlers for the search API

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::application::search::{parse_sections, SearchDispatcher};
use crate::domain::entities::SearchQuery;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<SearchDispatcher>,
    pub default_limit: usize,
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/health", get(health))
        .with_state(state)
}

/// Query parameters accepted by `GET /search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    query: Option<String>,
    limit: Option<u32>,
    sections: Option<String>,
    #[serde(rename = "targetId")]
    target_id: Option<i64>,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// `GET /search` - fan one query out to every requested domain.
///
/// A missing or blank `query` is the only failure that fails the request as
/// a whole; every downstream problem degrades inside the dispatcher.
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Response {
    let text = params
        .query
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty());
    let Some(text) = text else {
        return error_response(StatusCode::BAD_REQUEST, "query must not be empty");
    };

    // Forwarded unchanged to every downstream call
    let auth_token = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    let limit = params
        .limit
        .filter(|l| *l > 0)
        .map(|l| l as usize)
        .unwrap_or(state.default_limit);

    let search_id = Uuid::new_v4();
    tracing::info!(
        "[{}] search {:?} limit={} sections={:?} target={:?}",
        search_id,
        text,
        limit,
        params.sections,
        params.target_id
    );

    let query = SearchQuery::new(text)
        .with_limit(limit)
        .with_sections(parse_sections(params.sections.as_deref()))
        .with_target_id(params.target_id)
        .with_auth_token(auth_token);

    let response = state.dispatcher.dispatch(query).await;

    tracing::info!(
        "[{}] {} result(s) in {}ms",
        search_id,
        response.total_results,
        response.execution_time_ms
    );

    Json(response).into_response()
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
