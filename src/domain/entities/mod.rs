//! Core domain entities representing the business data model.
//!
//! The service has a single entity, [`ShortUrl`], with a separate
//! [`NewShortUrl`] struct used for creation (store-assigned fields omitted).

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
