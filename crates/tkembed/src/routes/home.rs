//! Root route.

use axum::response::IntoResponse;

/// Plain-text pointer to the embed routes.
pub async fn home() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "tkAuto Embed App - Use /embed or /embed-builder",
    )
}
