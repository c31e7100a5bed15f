//! Named pattern table.
//!
//! A fixed mapping from semantic type (`"email"`, `"date_ymd"`, `"tel"`,
//! ...) to a compiled regex. Every entry is anchored as `^(<body>)$`, so a
//! match must cover the whole value, and classes like `\p{L}` keep the
//! patterns Unicode-aware. The table is built once on first use and never
//! mutated.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

const PATTERN_BODIES: &[(&str, &str)] = &[
    ("uri", r"[A-Za-z0-9/_?&=-]+"),
    ("url", r"[A-Za-z0-9:./_?&=#-]+"),
    ("alpha", r"\p{L}+"),
    ("words", r"[\p{L}\s]+"),
    ("alphanum", r"[\p{L}0-9]+"),
    ("int", r"[0-9]+"),
    ("float", r"[0-9.,]+"),
    ("tel", r"[0-9+\s()-]+"),
    ("text", r#"[a-zA-Z0-9.\s\d\w\D][^'"]+"#),
    ("file", r"[\p{L}\s0-9_!%&()=\[\]#@,.;+-]+\.[A-Za-z0-9]{2,4}"),
    ("folder", r"[\p{L}\s0-9_!%&()=\[\]#@,.;+-]+"),
    ("address", r"[\p{L}0-9\s.,()°-]+"),
    ("date_dmy", r"[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}"),
    ("date_ymd", r"[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}"),
    ("email", r"[a-zA-Z0-9_.-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+"),
];

static PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    PATTERN_BODIES
        .iter()
        .map(|(name, body)| (*name, anchored(body).unwrap()))
        .collect()
});

/// Compile a pattern body into a full-string anchored, case-sensitive regex.
pub fn anchored(body: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^({body})$"))
}

/// Look up a compiled named pattern.
pub fn lookup(name: &str) -> Option<&'static Regex> {
    PATTERNS.get(name)
}

/// The pattern keys the table knows about.
pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERN_BODIES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_entry_compiles() {
        for name in names() {
            assert!(lookup(name).is_some(), "pattern {name} missing");
        }
        assert_eq!(names().count(), 15);
    }

    #[test]
    fn test_match_is_anchored() {
        let int = lookup("int").unwrap();
        assert!(int.is_match("12345"));
        assert!(!int.is_match("12345x"));
        assert!(!int.is_match("x12345"));
    }

    #[test]
    fn test_email_pattern() {
        let email = lookup("email").unwrap();
        assert!(email.is_match("user@example.com"));
        assert!(email.is_match("first.last-x@mail.example.co.uk"));
        assert!(!email.is_match("not-an-email"));
        assert!(!email.is_match("user@"));
    }

    #[test]
    fn test_date_patterns() {
        let dmy = lookup("date_dmy").unwrap();
        assert!(dmy.is_match("31-12-2026"));
        assert!(dmy.is_match("1-1-2026"));
        assert!(!dmy.is_match("2026-12-31"));

        let ymd = lookup("date_ymd").unwrap();
        assert!(ymd.is_match("2026-12-31"));
        assert!(!ymd.is_match("31-12-2026"));
    }

    #[test]
    fn test_tel_pattern() {
        let tel = lookup("tel").unwrap();
        assert!(tel.is_match("+41 (0)79 555-0199"));
        assert!(!tel.is_match("call me"));
    }

    #[test]
    fn test_unicode_letter_classes() {
        let alpha = lookup("alpha").unwrap();
        assert!(alpha.is_match("Zürich"));
        assert!(!alpha.is_match("Zürich1"));

        let words = lookup("words").unwrap();
        assert!(words.is_match("São Paulo"));
    }

    #[test]
    fn test_file_and_folder_patterns() {
        let file = lookup("file").unwrap();
        assert!(file.is_match("report final.pdf"));
        assert!(file.is_match("photo_2026.jpeg"));
        assert!(!file.is_match("no-extension"));

        let folder = lookup("folder").unwrap();
        assert!(folder.is_match("My Documents"));
    }

    #[test]
    fn test_text_pattern_rejects_quotes() {
        let text = lookup("text").unwrap();
        assert!(text.is_match("Hello, world!"));
        assert!(!text.is_match("it's quoted"));
    }

    #[test]
    fn test_uri_and_url_patterns() {
        let uri = lookup("uri").unwrap();
        assert!(uri.is_match("blog/posts-2026?page=2"));
        assert!(!uri.is_match("has space"));

        let url = lookup("url").unwrap();
        assert!(url.is_match("https://example.com/a?b=c#d"));
    }

    #[test]
    fn test_anchored_rejects_malformed_body() {
        assert!(anchored(r"[A-Z").is_err());
    }
}
