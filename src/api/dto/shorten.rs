//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. A missing scheme is filled in by the service.
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,

    /// Optional custom alias used verbatim as the short code.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Response carrying the bound short code.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
