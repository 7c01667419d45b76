//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{shortened}`
///
/// Resolution reads through the cache; click counting happens in the
/// background after the response is produced (see
/// [`crate::application::services::UrlService::resolve_short_url`]).
///
/// # Errors
///
/// - 400 Bad Request if the short code is empty
/// - 404 Not Found if the short code doesn't exist
/// - 500 Internal Server Error if the stored URL is not a valid `Location`
pub async fn redirect_handler(
    Path(shortened): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if shortened.is_empty() {
        return Err(AppError::bad_request("Shortened URL is required", json!({})));
    }

    let original_url = state.url_service.resolve_short_url(&shortened).await?;

    let location = HeaderValue::try_from(original_url.as_str()).map_err(|e| {
        error!(shortened = %shortened, error = %e, "Stored URL is not a valid Location header");
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "short_url": shortened }),
        )
    })?;

    info!(shortened = %shortened, original_url = %original_url, "Redirecting to original URL");
    Ok((StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, location)]).into_response())
}
