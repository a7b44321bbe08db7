//! Compiled-once regular expressions shared by the validation rules.
//!
//! Each pattern is built on first use and never mutated afterwards, so the
//! rules stay safe for unlimited concurrent invocation.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static UPPERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("Failed to compile uppercase regex"));

pub(crate) static LOWERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("Failed to compile lowercase regex"));

pub(crate) static DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("Failed to compile digit regex"));

pub(crate) static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Failed to compile username regex"));

pub(crate) static ALPHANUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("Failed to compile alphanumeric regex"));

// Optional leading `+`, first digit 1-9, then 1 to 14 further digits.
pub(crate) static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("Failed to compile phone regex"));

pub(crate) static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("Failed to compile URL regex")
});

// 8-4-4-4-12 hex groups separated by hyphens.
pub(crate) static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("Failed to compile UUID regex")
});

pub(crate) static OBJECT_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("Failed to compile ObjectID regex"));

// Positive decimal integer, no leading zero.
pub(crate) static NUMERIC_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]\d*$").expect("Failed to compile numeric ID regex"));
