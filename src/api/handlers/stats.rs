//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a short URL.
///
/// # Endpoint
///
/// `GET /api/stats/{shortened}`
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://www.google.com",
///   "short_url": "ac6bb669",
///   "click_count": 10,
///   "created_at": "2024-06-01T12:00:00Z",
///   "updated_at": "2024-06-02T08:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the short code is empty
/// - 404 Not Found if the short code doesn't exist
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortened): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    if shortened.is_empty() {
        return Err(AppError::bad_request("Shortened URL is required", json!({})));
    }

    let stats = state.url_service.get_short_url_stats(&shortened).await?;

    Ok(Json(stats.into()))
}
