//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Domain error kinds shared by store, cache and service
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits
//! are implemented in `crate::infrastructure`.

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::UrlError;
