//! Route definitions for the embed service.
//!
//! ## Routes
//!
//! - `GET /` - Plain-text landing
//! - `GET /health` - Health check (JSON)
//! - `GET /embed` - Live tile/modal embed
//! - `GET /embed-builder` - Builder tile/modal embed

mod embed;
mod health;
mod home;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete embed service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health_check))
        .route("/embed", get(embed::live_handler))
        .route("/embed-builder", get(embed::builder_handler))
        .with_state(state)
}
