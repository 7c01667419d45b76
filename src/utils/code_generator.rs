//! Short code derivation and custom alias validation.
//!
//! Codes derived from a URL are the first [`HASH_CODE_LENGTH`] hex characters
//! of its SHA-256 digest, so the same URL always maps to the same code.

use crate::domain::error::{ALIAS_MAX_LEN, ALIAS_MIN_LEN, RESERVED_ALIAS_PREFIX, UrlError};
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const HASH_CODE_LENGTH: usize = 8;

/// Derives a short code from an already normalized URL.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(hash_code("https://www.google.com"), "ac6bb669");
/// ```
pub fn hash_code(normalized_url: &str) -> String {
    let digest = Sha256::digest(normalized_url.as_bytes());
    let mut code = hex::encode(digest);
    code.truncate(HASH_CODE_LENGTH);
    code
}

/// Validates a user-provided alias.
///
/// # Rules
///
/// - Cannot start with the reserved `api/` prefix, whatever its length
/// - Length: 4-20 characters
///
/// # Errors
///
/// Returns [`UrlError::AliasReserved`] or [`UrlError::InvalidAliasFormat`].
pub fn validate_alias(alias: &str) -> Result<(), UrlError> {
    if alias.starts_with(RESERVED_ALIAS_PREFIX) {
        return Err(UrlError::AliasReserved {
            alias: alias.to_string(),
        });
    }

    let length = alias.chars().count();
    if !(ALIAS_MIN_LEN..=ALIAS_MAX_LEN).contains(&length) {
        return Err(UrlError::InvalidAliasFormat { length });
    }

    Ok(())
}
