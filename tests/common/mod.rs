#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use short_url_service::application::services::{SharedUrlService, UrlService};
use short_url_service::domain::entities::{NewShortUrl, ShortUrl};
use short_url_service::domain::error::UrlError;
use short_url_service::domain::repositories::UrlRepository;
use short_url_service::infrastructure::cache::{CacheError, CacheResult, CacheService};
use short_url_service::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Store fake backed by a map, enforcing short code uniqueness.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    urls: Mutex<HashMap<String, ShortUrl>>,
    next_id: AtomicUsize,
    pub lookups: AtomicUsize,
    pub increments: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryUrlRepository {
    pub fn insert(&self, short_url: &str, original_url: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let now = Utc::now();
        let url = ShortUrl::new(
            id,
            original_url.to_string(),
            short_url.to_string(),
            0,
            now,
            now,
        );
        self.urls.lock().unwrap().insert(short_url.to_string(), url);
    }

    pub fn get(&self, short_url: &str) -> Option<ShortUrl> {
        self.urls.lock().unwrap().get(short_url).cloned()
    }

    pub fn len(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, UrlError> {
        let mut urls = self.urls.lock().unwrap();
        if urls.contains_key(&new_url.short_url) {
            return Err(UrlError::already_exists(new_url.short_url));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let now = Utc::now();
        let url = ShortUrl::new(
            id,
            new_url.original_url,
            new_url.short_url.clone(),
            0,
            now,
            now,
        );
        urls.insert(new_url.short_url, url.clone());
        Ok(url)
    }

    async fn get_by_short_url(&self, short_url: &str) -> Result<ShortUrl, UrlError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.get(short_url)
            .ok_or_else(|| UrlError::not_found(short_url))
    }

    async fn increment_click_count(&self, short_url: &str) -> Result<(), UrlError> {
        self.increments.fetch_add(1, Ordering::SeqCst);
        let mut urls = self.urls.lock().unwrap();
        let url = urls
            .get_mut(short_url)
            .ok_or_else(|| UrlError::not_found(short_url))?;
        url.click_count += 1;
        url.updated_at = Utc::now();
        Ok(())
    }

    async fn ping(&self) -> Result<(), UrlError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(UrlError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

/// Cache fake that records the TTL of every write.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, Duration)>>,
    unavailable: AtomicBool,
}

impl InMemoryCache {
    pub fn get(&self, short_code: &str) -> Option<(String, Duration)> {
        self.entries.lock().unwrap().get(short_code).cloned()
    }

    pub fn put(&self, short_code: &str, original_url: &str) {
        self.entries.lock().unwrap().insert(
            short_code.to_string(),
            (original_url.to_string(), Duration::from_secs(60)),
        );
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CacheError::OperationError("connection refused".to_string()));
        }
        Ok(self.get(short_code).map(|(url, _)| url))
    }

    async fn set_url(
        &self,
        short_code: &str,
        original_url: &str,
        ttl: Duration,
    ) -> CacheResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CacheError::OperationError("connection refused".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(short_code.to_string(), (original_url.to_string(), ttl));
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.unavailable.load(Ordering::SeqCst)
    }
}

pub struct TestContext {
    pub state: AppState,
    pub repo: Arc<InMemoryUrlRepository>,
    pub cache: Arc<InMemoryCache>,
}

pub fn create_test_state() -> TestContext {
    let repo = Arc::new(InMemoryUrlRepository::default());
    let cache = Arc::new(InMemoryCache::default());

    let repository: Arc<dyn UrlRepository> = repo.clone();
    let cache_service: Arc<dyn CacheService> = cache.clone();
    let service: SharedUrlService = UrlService::new(repository, cache_service);

    TestContext {
        state: AppState::new(Arc::new(service)),
        repo,
        cache,
    }
}

/// Polls `condition` until it holds, failing after two seconds.
///
/// Detached background tasks finish at an unspecified point after the
/// response, so their effects are awaited rather than slept for.
pub async fn wait_until(condition: impl Fn() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "background work did not finish in time"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Current click count of a stored mapping.
pub fn clicks(repo: &InMemoryUrlRepository, short_url: &str) -> i64 {
    repo.get(short_url).map(|url| url.click_count).unwrap_or(0)
}
