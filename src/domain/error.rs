//! Domain error kinds for URL creation, resolution and statistics.

use thiserror::Error;

/// Minimum accepted custom alias length, in characters.
pub const ALIAS_MIN_LEN: usize = 4;
/// Maximum accepted custom alias length, in characters.
pub const ALIAS_MAX_LEN: usize = 20;
/// Aliases starting with this prefix would shadow API routes.
pub const RESERVED_ALIAS_PREFIX: &str = "api/";

/// Errors produced by the store adapter and the URL service.
///
/// Validation and lookup failures are deterministic; [`UrlError::Database`]
/// wraps opaque connectivity or query failures.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error(
        "Alias must be between {} and {} characters long, got {length}",
        ALIAS_MIN_LEN,
        ALIAS_MAX_LEN
    )]
    InvalidAliasFormat { length: usize },

    #[error("URL contains control characters and cannot be used as a redirect target")]
    InvalidUrl { url: String },

    #[error("Alias '{alias}' is reserved and cannot be used")]
    AliasReserved { alias: String },

    #[error("Short URL '{short_url}' already exists")]
    AlreadyExists { short_url: String },

    #[error("Short URL '{short_url}' not found")]
    NotFound { short_url: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UrlError {
    pub fn not_found(short_url: impl Into<String>) -> Self {
        Self::NotFound {
            short_url: short_url.into(),
        }
    }

    pub fn already_exists(short_url: impl Into<String>) -> Self {
        Self::AlreadyExists {
            short_url: short_url.into(),
        }
    }

    /// Returns true for errors caused by the caller's input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. } | Self::InvalidAliasFormat { .. } | Self::AliasReserved { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UrlError::InvalidAliasFormat { length: 2 }.to_string(),
            "Alias must be between 4 and 20 characters long, got 2"
        );
        assert_eq!(
            UrlError::not_found("abcd1234").to_string(),
            "Short URL 'abcd1234' not found"
        );
        assert_eq!(
            UrlError::already_exists("my-alias").to_string(),
            "Short URL 'my-alias' already exists"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(UrlError::InvalidAliasFormat { length: 30 }.is_validation());
        assert!(
            UrlError::AliasReserved {
                alias: "api/x".to_string()
            }
            .is_validation()
        );
        assert!(
            UrlError::InvalidUrl {
                url: "http://a\nb".to_string()
            }
            .is_validation()
        );
        assert!(!UrlError::not_found("x").is_validation());
        assert!(!UrlError::already_exists("x").is_validation());
    }
}
