//! Short URL creation, resolution and statistics service.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, info_span, instrument, warn};

use crate::application::background::spawn_detached;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::error::UrlError;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::{hash_code, validate_alias};
use crate::utils::url_normalizer::{is_redirect_safe, normalize_url};

/// Expiration applied when a store hit is written back to the cache.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Service type used by the HTTP layer, with the adapters behind trait objects.
pub type SharedUrlService = UrlService<dyn UrlRepository, dyn CacheService>;

/// Orchestrates the store and the cache to create, resolve and describe short URLs.
///
/// Resolution reads through the cache. Click counting and cache population
/// run as detached background tasks, so a resolve returns as soon as the
/// original URL is known and a freshly recorded click may not yet be
/// visible to [`Self::get_short_url_stats`].
pub struct UrlService<R: ?Sized, C: ?Sized> {
    repository: Arc<R>,
    cache: Arc<C>,
    cache_ttl: Duration,
}

impl<R, C> UrlService<R, C>
where
    R: UrlRepository + ?Sized + 'static,
    C: CacheService + ?Sized + 'static,
{
    /// Creates a new service using [`DEFAULT_CACHE_TTL`].
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self {
            repository,
            cache,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Overrides the expiration used when populating the cache.
    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// Creates a short URL and returns the bound short code.
    ///
    /// # Code Selection
    ///
    /// - The URL gets `http://` prepended if it has no `http(s)://` scheme
    /// - A non-empty `alias` is validated and used verbatim
    /// - Otherwise the code is the first 8 hex characters of the SHA-256
    ///   digest of the normalized URL, so resubmitting a URL yields the
    ///   same code (and therefore [`UrlError::AlreadyExists`])
    ///
    /// # Errors
    ///
    /// - [`UrlError::InvalidUrl`] if the URL contains control characters
    /// - [`UrlError::AliasReserved`] if the alias starts with `api/`
    /// - [`UrlError::InvalidAliasFormat`] if the alias is not 4-20 characters
    /// - [`UrlError::AlreadyExists`] if the code is already bound
    /// - [`UrlError::Database`] on store failures
    #[instrument(skip(self))]
    pub async fn create_short_url(
        &self,
        original_url: &str,
        alias: Option<&str>,
    ) -> Result<String, UrlError> {
        let normalized_url = normalize_url(original_url);
        if !is_redirect_safe(&normalized_url) {
            return Err(UrlError::InvalidUrl {
                url: normalized_url,
            });
        }

        let short_url = match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                validate_alias(alias)?;
                alias.to_string()
            }
            None => hash_code(&normalized_url),
        };

        let created = self
            .repository
            .create(NewShortUrl::new(normalized_url, short_url))
            .await?;

        info!(short_url = %created.short_url, "Short URL created");
        Ok(created.short_url)
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Request Flow
    ///
    /// 1. Cache hit: return immediately, schedule a click increment
    /// 2. Cache miss (or cache error): look the code up in the store
    /// 3. Store hit: return, schedule a click increment and a cache write
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if the code is unknown; no background
    /// work is scheduled in that case. Returns [`UrlError::Database`] on
    /// store failures.
    #[instrument(skip(self))]
    pub async fn resolve_short_url(&self, short_url: &str) -> Result<String, UrlError> {
        match self.cache.get_url(short_url).await {
            Ok(Some(original_url)) => {
                debug!("Resolved from cache");
                self.spawn_click_increment(short_url);
                return Ok(original_url);
            }
            Ok(None) => debug!("Not cached"),
            Err(e) => warn!(error = %e, "Cache lookup failed, falling back to store"),
        }

        let url = self.repository.get_by_short_url(short_url).await?;
        debug!("Resolved from store");

        self.spawn_click_increment(short_url);
        self.spawn_cache_population(short_url, &url.original_url);

        Ok(url.original_url)
    }

    /// Returns the stored mapping, including its click count and timestamps.
    ///
    /// Always reads the store directly so the counter is as fresh as possible.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if the code is unknown.
    #[instrument(skip(self))]
    pub async fn get_short_url_stats(&self, short_url: &str) -> Result<ShortUrl, UrlError> {
        self.repository.get_by_short_url(short_url).await
    }

    /// Checks store connectivity.
    pub async fn check_store(&self) -> Result<(), UrlError> {
        self.repository.ping().await
    }

    /// Checks cache connectivity.
    pub async fn check_cache(&self) -> bool {
        self.cache.health_check().await
    }

    fn spawn_click_increment(&self, short_url: &str) {
        let repository = Arc::clone(&self.repository);
        let short_url = short_url.to_string();
        let span = info_span!("increment_click_count", short_url = %short_url);

        spawn_detached("increment_click_count", span, async move {
            repository.increment_click_count(&short_url).await
        });
    }

    fn spawn_cache_population(&self, short_url: &str, original_url: &str) {
        let cache = Arc::clone(&self.cache);
        let short_url = short_url.to_string();
        let original_url = original_url.to_string();
        let ttl = self.cache_ttl;
        let span = info_span!("populate_cache", short_url = %short_url);

        spawn_detached("populate_cache", span, async move {
            cache.set_url(&short_url, &original_url, ttl).await
        });
    }
}
