//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository and
//! cache calls, validation, and business rules.
//!
//! - [`services::url_service::UrlService`] - Short URL creation, resolution and statistics
//! - [`background`] - Detached fire-and-forget task spawning

pub mod background;
pub mod services;
