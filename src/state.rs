//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::SharedUrlService;

/// Application state cloned into each request.
///
/// Holds no mutable in-process data: the service wraps pooled store and
/// cache connections that are safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<SharedUrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<SharedUrlService>) -> Self {
        Self { url_service }
    }
}
