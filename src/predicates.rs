//! Stateless type predicates.
//!
//! Free functions answering "does this string parse as X", independent of
//! any [`FieldValidator`](crate::FieldValidator) chain. Each is a single
//! anchored regex match or literal-set test and always returns an explicit
//! `bool`.

use once_cell::sync::Lazy;
use regex::Regex;

static INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

static FLOAT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap());

static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

static ALPHANUM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^\s/$.?#].[^\s]*$").unwrap());

static URI_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9/_-]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

/// True when the value is a conventional integer literal (optional sign).
pub fn is_int(value: &str) -> bool {
    INT_REGEX.is_match(value)
}

/// True when the value is a conventional float literal (optional sign,
/// decimal point, exponent). Plain integers qualify too.
pub fn is_float(value: &str) -> bool {
    FLOAT_REGEX.is_match(value)
}

/// True when the value is ASCII letters only.
pub fn is_alpha(value: &str) -> bool {
    ALPHA_REGEX.is_match(value)
}

/// True when the value is ASCII letters and digits only.
pub fn is_alphanum(value: &str) -> bool {
    ALPHANUM_REGEX.is_match(value)
}

/// True when the value conforms to a general URL grammar: scheme, `://`,
/// host, optional path and query.
pub fn is_url(value: &str) -> bool {
    URL_REGEX.is_match(value)
}

/// True when the value is a plain URI path segment string.
pub fn is_uri(value: &str) -> bool {
    URI_REGEX.is_match(value)
}

/// True when the value is a recognized boolean literal, whichever truth
/// value it spells: `"1"`, `"true"`, `"on"`, `"yes"`, `"0"`, `"false"`,
/// `"off"`, `"no"`, or the empty string. Matching ignores case and
/// surrounding whitespace.
pub fn is_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes" | "0" | "false" | "off" | "no" | ""
    )
}

/// True when the value conforms to a standard email grammar
/// (local-part `@` domain).
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_int() {
        assert!(is_int("42"));
        assert!(is_int("-42"));
        assert!(is_int("+7"));
        assert!(!is_int("4.2"));
        assert!(!is_int("forty"));
        assert!(!is_int(""));
    }

    #[test]
    fn test_is_float() {
        assert!(is_float("4.2"));
        assert!(is_float("-0.5"));
        assert!(is_float(".5"));
        assert!(is_float("42"));
        assert!(is_float("1e6"));
        assert!(!is_float("4.2.1"));
        assert!(!is_float("abc"));
    }

    #[test]
    fn test_is_alpha() {
        assert!(is_alpha("abcXYZ"));
        assert!(!is_alpha("abc123"));
        assert!(!is_alpha("abc xyz"));
    }

    #[test]
    fn test_is_alphanum() {
        assert!(is_alphanum("abc123"));
        assert!(!is_alphanum("abc-123"));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com"));
        assert!(is_url("http://localhost:8080/path?q=1"));
        assert!(is_url("ftp://files.example.com"));
        assert!(!is_url("not a url"));
        assert!(!is_url("//example.com"));
    }

    #[test]
    fn test_is_uri() {
        assert!(is_uri("blog/posts-2026"));
        assert!(is_uri("a_b"));
        assert!(!is_uri("has space"));
        assert!(!is_uri("q?x=1"));
    }

    #[test]
    fn test_is_bool_reports_parse_not_truth() {
        assert!(is_bool("1"));
        assert!(is_bool("true"));
        assert!(is_bool("on"));
        assert!(is_bool("Yes"));
        assert!(is_bool("0"));
        assert!(is_bool("FALSE"));
        assert!(is_bool("off"));
        assert!(is_bool("no"));
        assert!(is_bool(""));
        assert!(is_bool(" true "));
        assert!(!is_bool("maybe"));
        assert!(!is_bool("2"));
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("a@b.com"));
        assert!(is_email("user+tag@example.co.uk"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
    }
}
