//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::error::UrlError;
use async_trait::async_trait;

/// Repository interface for persisted URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::AlreadyExists`] if `short_url` is already bound.
    /// Concurrent inserts of the same code are settled by the store's
    /// uniqueness constraint and surface the same error.
    ///
    /// Returns [`UrlError::Database`] on database errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, UrlError>;

    /// Looks up a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if no mapping exists.
    /// Returns [`UrlError::Database`] on database errors.
    async fn get_by_short_url(&self, short_url: &str) -> Result<ShortUrl, UrlError>;

    /// Increments the click counter and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if no mapping exists.
    /// Returns [`UrlError::Database`] on database errors.
    async fn increment_click_count(&self, short_url: &str) -> Result<(), UrlError>;

    /// Checks store connectivity.
    async fn ping(&self) -> Result<(), UrlError>;
}
