//! URL normalization applied before hashing and storing.

/// Schemes accepted as-is. Anything else gets [`DEFAULT_SCHEME`] prepended.
const ALLOWED_SCHEMES: &[&str] = &["http://", "https://"];

/// Scheme assumed for URLs submitted without one.
pub const DEFAULT_SCHEME: &str = "http://";

/// Normalizes a URL to the form that is hashed and stored.
///
/// If the URL does not start with `http://` or `https://`, `http://` is
/// prepended. Nothing else about the URL is changed, so derived short codes
/// stay stable for a given input.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com"), "http://example.com");
/// assert_eq!(normalize_url("https://example.com"), "https://example.com");
/// ```
pub fn normalize_url(url: &str) -> String {
    if ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{url}")
    }
}

/// Returns true if `url` can be sent back verbatim in a `Location` header.
///
/// Header values may not contain control characters other than horizontal
/// tab. Non-ASCII text is left to the client.
pub fn is_redirect_safe(url: &str) -> bool {
    url.bytes().all(|b| b == b'\t' || (b >= 0x20 && b != 0x7f))
}
