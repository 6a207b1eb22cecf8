//! URL normalization and validation for the creation form.
//!
//! Normalization only fixes what users commonly leave out (surrounding
//! whitespace and the scheme). Everything else is the backend's business.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Matches an explicit `http://` or `https://` prefix, case-insensitively.
static SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("scheme regex is valid"));

/// Scheme prepended to input that does not carry one.
const DEFAULT_SCHEME: &str = "https://";

/// Errors that can occur while validating a normalized URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("invalid URL: {0}")]
    InvalidFormat(String),
}

/// Normalizes raw user input into a URL candidate.
///
/// Trims surrounding whitespace and prepends `https://` unless the input
/// already starts with `http://` or `https://` (in any case).
///
/// The function is idempotent: `normalize(&normalize(x)) == normalize(x)`.
///
/// # Examples
///
/// ```
/// use shortlink_client::utils::url_normalizer::normalize;
///
/// assert_eq!(normalize("  example.com/path "), "https://example.com/path");
/// assert_eq!(normalize("HTTP://Example.com"), "HTTP://Example.com");
/// ```
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if SCHEME_REGEX.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    }
}

/// Parses a normalized candidate as an absolute URL.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] if the string is not a
/// well-formed absolute URL.
pub fn parse_normalized(normalized: &str) -> Result<Url, UrlValidationError> {
    Url::parse(normalized).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))
}

/// Returns true if the normalized candidate is a well-formed absolute URL.
pub fn validate(normalized: &str) -> bool {
    parse_normalized(normalized).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prepends_https() {
        assert_eq!(normalize("example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  \texample.com/a?b=c \n"), "https://example.com/a?b=c");
    }

    #[test]
    fn test_normalize_keeps_http() {
        assert_eq!(normalize("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_scheme_is_case_insensitive() {
        assert_eq!(normalize("HTTPS://EXAMPLE.COM"), "HTTPS://EXAMPLE.COM");
        assert_eq!(normalize("Http://example.com"), "Http://example.com");
    }

    #[test]
    fn test_normalize_other_schemes_get_prefixed() {
        assert_eq!(normalize("ftp://example.com"), "https://ftp://example.com");
        assert_eq!(normalize("mailto:a@b.c"), "https://mailto:a@b.c");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "example.com",
            "  https://example.com  ",
            "HTTP://x.y",
            "   ",
            "https://",
            "a b c",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_normalize_always_has_explicit_scheme() {
        for input in ["x", "www.rust-lang.org", "  http://a.b  ", "//cdn.example.com"] {
            let normalized = normalize(input).to_ascii_lowercase();
            assert!(
                normalized.starts_with("http://") || normalized.starts_with("https://"),
                "{normalized}"
            );
        }
    }

    #[test]
    fn test_validate_accepts_absolute_urls() {
        assert!(validate("https://example.com"));
        assert!(validate("http://localhost:3000/test"));
        assert!(validate("https://example.com/search?q=rust#top"));
        assert!(validate(&normalize("example.com/path")));
    }

    #[test]
    fn test_validate_rejects_malformed_urls() {
        assert!(!validate(&normalize("")));
        assert!(!validate(&normalize("   ")));
        assert!(!validate(&normalize("exa mple.com")));
        assert!(!validate("https://exa[mple.com"));
        assert!(!validate("not a url"));
    }

    #[test]
    fn test_parse_normalized_reports_invalid_format() {
        let err = parse_normalized("https://").unwrap_err();
        assert!(matches!(err, UrlValidationError::InvalidFormat(_)));
    }
}
