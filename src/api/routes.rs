//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`             - Create a short URL
/// - `GET  /stats/{shortened}`   - Statistics for a short URL
/// - `GET  /health`              - Store and cache health
///
/// Aliases may not start with `api/`, so these paths can never be shadowed
/// by a short code.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{shortened}", get(stats_handler))
        .route("/health", get(health_handler))
}
