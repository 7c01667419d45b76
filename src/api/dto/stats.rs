//! DTOs for the statistics endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortUrl;

/// Statistics for a single short URL.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub original_url: String,
    pub short_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShortUrl> for StatsResponse {
    fn from(url: ShortUrl) -> Self {
        Self {
            original_url: url.original_url,
            short_url: url.short_url,
            click_count: url.click_count,
            created_at: url.created_at,
            updated_at: url.updated_at,
        }
    }
}
