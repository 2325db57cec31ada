//! Embed route handlers.
//!
//! Handles `GET /embed` (live) and `GET /embed-builder` (builder). Both
//! always answer 200 with a full HTML page; failures show up as an inline
//! banner with placeholder slots.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::mode::Mode;
use crate::render;
use crate::resolve::{self, RequestContext, Resolution};
use crate::state::AppState;

/// Query parameters accepted by the embed routes.
#[derive(Debug, Default, Deserialize)]
pub struct EmbedQuery {
    /// Page identifier used when the referrer carries none.
    pub id: Option<String>,
}

/// `GET /embed`
pub async fn live_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<EmbedQuery>, QueryRejection>,
) -> Response {
    embed(&state, Mode::Live, &headers, query).await
}

/// `GET /embed-builder`
pub async fn builder_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<EmbedQuery>, QueryRejection>,
) -> Response {
    embed(&state, Mode::Builder, &headers, query).await
}

async fn embed(
    state: &AppState,
    mode: Mode,
    headers: &HeaderMap,
    query: Result<Query<EmbedQuery>, QueryRejection>,
) -> Response {
    // A malformed query string is treated as carrying no id.
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "ignoring malformed query string");
            EmbedQuery::default()
        }
    };

    let referrer = referrer(headers);
    let ctx = RequestContext::new(mode, referrer, query.id.as_deref());
    tracing::debug!(mode = %mode, page_id = ?ctx.page_id, "resolving embed");

    let result = resolve::resolve(&state.config, state.source.as_ref(), &ctx).await;
    let payload = Resolution::from_result(result, mode).into_payload();

    let html = render::render_embed(&payload, mode).into_string();
    build_response(html)
}

/// The referring page URL. Some clients send the non-standard `Referrer`.
fn referrer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("referrer")
        .or_else(|| headers.get(header::REFERER))
        .and_then(|v| v.to_str().ok())
}

/// Build an HTTP 200 response with HTML content and cache headers.
fn build_response(html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    // Content follows the latest Notion edit, so revalidate every time.
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, html).into_response()
}
