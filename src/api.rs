use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::fetch::FeedFetcher;
use crate::store::{FeedItem, FeedStore};

/// Shared handler state: the accumulated store plus the fetch capability,
/// both injected at construction so tests can swap in stubs.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FeedStore>,
    pub fetcher: Arc<dyn FeedFetcher>,
}

impl AppState {
    pub fn new(store: Arc<FeedStore>, fetcher: Arc<dyn FeedFetcher>) -> Self {
        Self { store, fetcher }
    }
}

#[derive(serde::Deserialize)]
struct FeedRequest {
    // A missing field decodes as an empty batch, not a client error, while
    // non-object bodies like `[]` still fail to decode and return 400.
    links: Option<Vec<String>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(aggregate))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// The single aggregation endpoint.
///
/// Accepts `{"links": [...]}`, fetches each address in order, appends every
/// successful result to the store, and responds with the entire accumulated
/// collection to date (not just this request's contribution).
async fn aggregate(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if content_type != Some("application/json") {
        return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
    }

    // Decode strictly before any fetch work; a bad batch must not cost a
    // single network call.
    let request: FeedRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    // Fetch in batch order, outside the store lock. A failed address
    // contributes nothing and is otherwise indistinguishable from a source
    // with zero items; one bad address must not fail the whole request.
    let links = request.links.unwrap_or_default();
    let mut contribution: Vec<FeedItem> = Vec::new();
    for link in &links {
        match state.fetcher.fetch(link).await {
            Ok(items) => contribution.extend(items),
            Err(e) => tracing::debug!(error = ?e, url = %link, "feed fetch failed, skipping"),
        }
    }

    // Append and serialize under one lock acquisition: the batch lands
    // atomically and the body is the exact state at that moment.
    match state.store.append_and_serialize(contribution) {
        Ok(json) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
