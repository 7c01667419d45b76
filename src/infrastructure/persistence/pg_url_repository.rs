//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::error::UrlError;
use crate::domain::repositories::UrlRepository;
use crate::utils::db_error::is_unique_violation_on_short_url;

/// Row shape of the `urls` table.
#[derive(Debug, FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_url: String,
    click_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UrlRow> for ShortUrl {
    fn from(row: UrlRow) -> Self {
        ShortUrl::new(
            row.id,
            row.original_url,
            row.short_url,
            row.click_count,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL repository for URL mappings.
///
/// Uses bound parameters for every query. Uniqueness of `short_url` is
/// enforced by the `urls_short_url_key` constraint rather than a
/// check-then-insert, so concurrent creations cannot both succeed.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, UrlError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_url)
            VALUES ($1, $2)
            RETURNING id, original_url, short_url, click_count, created_at, updated_at
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.short_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_short_url(&e) {
                UrlError::already_exists(&new_url.short_url)
            } else {
                UrlError::Database(e)
            }
        })?;

        Ok(row.into())
    }

    async fn get_by_short_url(&self, short_url: &str) -> Result<ShortUrl, UrlError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_url, click_count, created_at, updated_at
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(ShortUrl::from)
            .ok_or_else(|| UrlError::not_found(short_url))
    }

    async fn increment_click_count(&self, short_url: &str) -> Result<(), UrlError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET click_count = click_count + 1, updated_at = NOW()
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(UrlError::not_found(short_url));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), UrlError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
