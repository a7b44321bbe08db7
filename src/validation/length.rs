//! Presence and length rules.
//!
//! Every rule trims leading and trailing whitespace before evaluating, and
//! lengths are counted in characters. A non-empty custom message replaces the
//! default failure text verbatim without changing the outcome.

use crate::error::ValidationError;

fn too_short(min_length: usize, actual: usize) -> String {
    format!("string must be at least {min_length} characters long, got {actual}")
}

fn too_long(max_length: usize, actual: usize) -> String {
    format!("string must be at most {max_length} characters long, got {actual}")
}

/// Fails iff the input is empty after trimming whitespace.
pub fn is_empty(s: &str, custom_message: Option<&str>) -> Result<(), ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::or_custom(
            custom_message,
            "string cannot be empty",
        ));
    }
    Ok(())
}

/// Fails if the trimmed input is shorter than `min_length` characters.
pub fn min_length(
    s: &str,
    min_length: usize,
    custom_message: Option<&str>,
) -> Result<(), ValidationError> {
    let length = s.trim().chars().count();
    if length < min_length {
        return Err(ValidationError::or_custom(
            custom_message,
            too_short(min_length, length),
        ));
    }
    Ok(())
}

/// Fails if the trimmed input is longer than `max_length` characters.
pub fn max_length(
    s: &str,
    max_length: usize,
    custom_message: Option<&str>,
) -> Result<(), ValidationError> {
    let length = s.trim().chars().count();
    if length > max_length {
        return Err(ValidationError::or_custom(
            custom_message,
            too_long(max_length, length),
        ));
    }
    Ok(())
}

/// Checks the trimmed input against inclusive `min_length..=max_length`
/// bounds. The minimum is checked first, so an input violating both bounds
/// reports the minimum-length message.
pub fn length_range(
    s: &str,
    min_length: usize,
    max_length: usize,
    custom_message: Option<&str>,
) -> Result<(), ValidationError> {
    let length = s.trim().chars().count();

    if length < min_length {
        return Err(ValidationError::or_custom(
            custom_message,
            too_short(min_length, length),
        ));
    }
    if length > max_length {
        return Err(ValidationError::or_custom(
            custom_message,
            too_long(max_length, length),
        ));
    }
    Ok(())
}
