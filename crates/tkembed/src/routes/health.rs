//! Liveness endpoint for the embed server.

use axum::Json;
use serde::Serialize;

/// Liveness payload for the embed server.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Report that the embed server is up.
///
/// Never queries Notion, so a bad token or database id still reports `ok`;
/// those surface as the inline banner on `/embed` instead.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "tkembed",
        version: env!("CARGO_PKG_VERSION"),
    })
}
