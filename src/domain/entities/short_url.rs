//! Short URL entity representing a persisted URL mapping.

use chrono::{DateTime, Utc};

/// A mapping from a short code to its original URL, with click tracking.
///
/// `short_url` is either the 8-character hash prefix derived from
/// `original_url` or a user-chosen alias. It is unique across all mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_url: String,
        click_count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_url,
            click_count,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// Timestamps and the click counter are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_url: String,
}

impl NewShortUrl {
    pub fn new(original_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_url: short_url.into(),
        }
    }
}
