// Validation errors

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error recorded for a single failed check.
///
/// The message is the full rendered text shown to the user; it already
/// embeds the field label, so `Display` emits it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name that failed validation
    pub field: String,

    /// Rendered error message
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FieldError {}

/// Mistakes in how a chain was configured, as opposed to invalid input.
///
/// These abort the chain instead of joining the error list: a typo'd
/// pattern key or a pattern body the regex engine rejects is a programmer
/// error, not a property of the value under test.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Pattern key not present in the pattern table
    #[error("unknown pattern key: {0}")]
    UnknownPattern(String),

    /// Custom pattern body failed to compile
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display_is_message_only() {
        let error = FieldError::new("Email", "Field format Email Invalid.");
        assert_eq!(error.to_string(), "Field format Email Invalid.");
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::UnknownPattern("emial".to_string());
        assert_eq!(error.to_string(), "unknown pattern key: emial");
    }
}
