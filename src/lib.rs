//! Fluent form-field validation.
//!
//! Configure a field (name, value, optional file descriptor), run a chain of
//! checks against it, and collect human-readable error messages. Checks do
//! not short-circuit: one pass over a form reports every problem it finds.
//! A second, independent surface provides stateless type predicates
//! (`is_int`, `is_email`, ...) built on the same matching rules.
//!
//! # Examples
//!
//! ## Validating a field
//!
//! ```
//! use fieldcheck::FieldValidator;
//!
//! # fn main() -> Result<(), fieldcheck::ConfigError> {
//! let signup = FieldValidator::new()
//!     .name("Email")
//!     .value("user@example.com")
//!     .required()
//!     .pattern("email")?
//!     .name("Password")
//!     .value("hunter22!")
//!     .min(8)
//!     .matches("hunter22!");
//!
//! assert!(signup.is_success());
//! assert!(signup.errors().is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Collecting errors
//!
//! ```
//! use fieldcheck::FieldValidator;
//!
//! # fn main() -> Result<(), fieldcheck::ConfigError> {
//! let form = FieldValidator::new()
//!     .name("Email")
//!     .value("not-an-email")
//!     .pattern("email")?
//!     .name("Username")
//!     .value("")
//!     .required();
//!
//! assert!(!form.is_success());
//! assert_eq!(form.errors().len(), 2);
//! assert_eq!(form.errors()[0].message, "Field format Email Invalid.");
//! assert_eq!(form.errors()[1].message, "Username Required");
//! # Ok(())
//! # }
//! ```
//!
//! ## File uploads
//!
//! ```
//! use fieldcheck::{FieldValidator, UploadedFile};
//!
//! let upload = FieldValidator::new()
//!     .name("Report")
//!     .file(UploadedFile::new("report.PDF", 120_000, 0))
//!     .ext("pdf")
//!     .max_size(1_048_576);
//!
//! assert!(upload.is_success());
//! ```
//!
//! ## Type predicates
//!
//! ```
//! use fieldcheck::{is_email, is_int, purify};
//!
//! assert!(is_email("a@b.com"));
//! assert!(is_int("42"));
//! assert!(!is_int("4.2"));
//! assert_eq!(purify("<script>"), "&lt;script&gt;");
//! ```

mod errors;
pub mod patterns;
mod predicates;
mod sanitize;
mod validator;

pub use errors::*;
pub use predicates::*;
pub use sanitize::*;
pub use validator::*;
