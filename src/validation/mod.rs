//! Root module for the validation rules.
//! Exposes the public API for field validation.

mod format;
mod length;
mod password;
mod patterns;
mod types;

pub use format::{id, is_alphanumeric, is_email, phone_number, url, username};
pub use length::{is_empty, length_range, max_length, min_length};
pub use password::password_strength;
pub use types::{Email, Username};

/// Minimum length for passwords
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Minimum length for usernames
pub const MIN_USERNAME_LENGTH: usize = 3;
