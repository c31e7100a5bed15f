// Fluent per-field validation chain

use crate::errors::{ConfigError, FieldError};
use crate::patterns;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptor for an uploaded file, as handed over by form-handling code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Original file name, including its extension
    pub name: String,

    /// Size in bytes
    pub size: u64,

    /// Platform upload-status code
    pub error_code: u32,
}

impl UploadedFile {
    /// Upload-status code meaning no file was selected.
    pub const NO_FILE: u32 = 4;

    /// Create a new file descriptor
    pub fn new(name: impl Into<String>, size: u64, error_code: u32) -> Self {
        Self {
            name: name.into(),
            size,
            error_code,
        }
    }

    fn is_absent(&self) -> bool {
        self.error_code == Self::NO_FILE
    }

    /// Extension after the last `.` of the file name, if any.
    fn extension(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, ext)| ext)
    }
}

/// Trait for types that validate themselves as a whole form.
pub trait Validate {
    /// Validate the value and return errors if any
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// Fluent validation chain for one field at a time.
///
/// Setters and checks consume and return the validator. A failed check
/// appends one [`FieldError`] and the chain keeps going, so a single run
/// reports every problem it finds rather than stopping at the first.
/// Re-calling [`name`](Self::name) / [`value`](Self::value) moves the chain
/// on to the next field while keeping the errors already collected.
///
/// The error list only ever grows; it is never cleared or reordered.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    field: String,
    value: Option<Value>,
    file: Option<UploadedFile>,
    errors: Vec<FieldError>,
}

impl FieldValidator {
    /// Create a new validator with no field configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Label used in error messages generated for the current field.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.field = name.into();
        self
    }

    /// Value under test. Strings, numbers, booleans, and arrays all coerce
    /// through [`serde_json::Value`].
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// File descriptor for the file-specific checks.
    pub fn file(mut self, file: UploadedFile) -> Self {
        self.file = Some(file);
        self
    }

    /// Check the value against a named pattern from the table.
    ///
    /// The `"array"` key checks the value's shape instead of matching text.
    /// Empty or absent values always pass; only [`required`](Self::required)
    /// enforces presence. An unknown key aborts the chain with
    /// [`ConfigError::UnknownPattern`].
    pub fn pattern(mut self, key: &str) -> Result<Self, ConfigError> {
        if key == "array" {
            if !matches!(self.value, Some(Value::Array(_))) {
                let message = format!("Field format {} Invalid", self.field);
                self.fail(message);
            }
            return Ok(self);
        }

        let regex =
            patterns::lookup(key).ok_or_else(|| ConfigError::UnknownPattern(key.to_string()))?;
        let message = format!("Field format {} Invalid.", self.field);
        self.check_regex(regex, message);
        Ok(self)
    }

    /// Check the value against a caller-supplied pattern body, anchored the
    /// same way the named patterns are. A body the regex engine rejects
    /// aborts the chain with [`ConfigError::InvalidPattern`].
    pub fn custom_pattern(mut self, body: &str) -> Result<Self, ConfigError> {
        let regex = patterns::anchored(body).map_err(|source| ConfigError::InvalidPattern {
            pattern: body.to_string(),
            source,
        })?;
        let message = format!("Field format {} Invalid", self.field);
        self.check_regex(&regex, message);
        Ok(self)
    }

    /// The field must be present: a selected file and a non-empty value.
    pub fn required(mut self) -> Self {
        let file_missing = self.file.as_ref().is_some_and(UploadedFile::is_absent);
        let value_missing = match self.value.as_ref() {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if file_missing || value_missing {
            let message = format!("{} Required", self.field);
            self.fail(message);
        }
        self
    }

    /// Lower bound: character count for strings, numeric value otherwise.
    /// Null measures 0, booleans 0 or 1, arrays their element count.
    pub fn min(mut self, limit: impl Into<f64>) -> Self {
        if self.measure() < limit.into() {
            let message = format!(" {} less than the minimum value ", self.field);
            self.fail(message);
        }
        self
    }

    /// Upper bound, symmetric to [`min`](Self::min).
    pub fn max(mut self, limit: impl Into<f64>) -> Self {
        if self.measure() > limit.into() {
            let message = format!(" {} higher than the maximum value", self.field);
            self.fail(message);
        }
        self
    }

    /// Loose comparison against another value: both sides are normalized to
    /// their canonical string rendering before comparing, so `5` equals
    /// `"5"`.
    pub fn equal(mut self, other: impl Into<Value>) -> Self {
        if self.rendering() != render(&other.into()) {
            let message = format!(" {} not corresponding.", self.field);
            self.fail(message);
        }
        self
    }

    /// Same comparison as [`equal`](Self::equal) with the
    /// confirmation-field wording.
    pub fn matches(mut self, other: impl Into<Value>) -> Self {
        if self.rendering() != render(&other.into()) {
            let message = format!("{} and confirm password does not match", self.field);
            self.fail(message);
        }
        self
    }

    /// Upper bound on the file size in bytes. Skipped when no file was
    /// selected. The message renders the configured bound in megabytes.
    pub fn max_size(mut self, bytes: u64) -> Self {
        let too_large = self
            .file
            .as_ref()
            .is_some_and(|file| !file.is_absent() && file.size > bytes);
        if too_large {
            let message = format!(
                "The file {} exceeds the maximum size of{:.2} MB.",
                self.field,
                bytes as f64 / 1_048_576.0
            );
            self.fail(message);
        }
        self
    }

    /// The file name must carry the given extension, compared
    /// case-insensitively. Skipped when no file was selected.
    pub fn ext(mut self, extension: &str) -> Self {
        let wrong_ext = self.file.as_ref().is_some_and(|file| {
            !file.is_absent()
                && !file
                    .extension()
                    .unwrap_or("")
                    .eq_ignore_ascii_case(extension)
        });
        if wrong_ext {
            let message = format!("The File {} it's not a {}.", self.field, extension);
            self.fail(message);
        }
        self
    }

    /// True when no check has failed so far.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every error collected so far, in the order the checks ran.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consume the chain, yielding the collected errors.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// JSON rendering of the error list.
    pub fn errors_json(&self) -> Value {
        serde_json::json!({ "errors": &self.errors })
    }

    /// Render the errors as an HTML unordered list.
    ///
    /// Messages are embedded verbatim; run anything untrusted through
    /// [`purify`](crate::purify) before it can reach a message.
    pub fn display_errors(&self) -> String {
        let mut html = String::from("<ul>");
        for error in &self.errors {
            html.push_str("<li>");
            html.push_str(&error.message);
            html.push_str("</li>");
        }
        html.push_str("</ul>");
        html
    }

    fn fail(&mut self, message: String) {
        self.errors.push(FieldError::new(self.field.clone(), message));
    }

    fn check_regex(&mut self, regex: &Regex, message: String) {
        let failed = match self.value.as_ref() {
            // presence is required()'s job
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty() && !regex.is_match(s),
            Some(Value::Number(n)) => !regex.is_match(&n.to_string()),
            Some(Value::Bool(b)) => !regex.is_match(if *b { "true" } else { "false" }),
            // no text form to match against
            Some(Value::Array(_) | Value::Object(_)) => true,
        };
        if failed {
            self.fail(message);
        }
    }

    /// Magnitude compared by [`min`](Self::min) / [`max`](Self::max).
    fn measure(&self) -> f64 {
        match self.value.as_ref() {
            None | Some(Value::Null) => 0.0,
            Some(Value::String(s)) => s.chars().count() as f64,
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::Bool(b)) => f64::from(u8::from(*b)),
            Some(Value::Array(items)) => items.len() as f64,
            Some(Value::Object(map)) => map.len() as f64,
        }
    }

    fn rendering(&self) -> String {
        self.value.as_ref().map(render).unwrap_or_default()
    }
}

/// Canonical string rendering used by the loose comparisons.
fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
