//! Stateless helpers for validating human-entered fields, plus small
//! arithmetic helpers sharing the same error-return convention.
//!
//! Every rule is an independent pure function: it trims its input, evaluates
//! a single predicate or pattern, and returns `Ok(())` or a
//! [`ValidationError`] carrying a human-readable message. Rules accept an
//! optional custom message that replaces the default failure text verbatim
//! without affecting the outcome. All patterns are compiled once and shared
//! immutably, so every rule is safe for unlimited concurrent use.
//!
//! ```
//! use fieldkit::validation;
//!
//! assert!(validation::is_email("user@example.com", None).is_ok());
//!
//! let err = validation::password_strength("weak", Some("please pick a stronger password"))
//!     .unwrap_err();
//! assert_eq!(err.message(), "please pick a stronger password");
//! ```

mod error;
pub mod math;
pub mod validation;

pub use error::ValidationError;
