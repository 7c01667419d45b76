//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with snake_case field names; request bodies are
//! checked with `validator` for presence only.

pub mod health;
pub mod shorten;
pub mod stats;
