//! Handler for URL shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL, optionally under a custom alias.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.google.com", "alias": "my-google" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "my-google" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: malformed JSON, empty `url`, invalid or reserved alias
/// - 409 Conflict: the short code is already bound
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let short_url = state
        .url_service
        .create_short_url(&payload.url, payload.alias.as_deref())
        .await?;

    Ok(Json(ShortenResponse { short_url }))
}
