//! Format rules for common field shapes: email, phone, URL, username, IDs.

use email_address::EmailAddress;

use super::patterns::{
    ALPHANUMERIC_REGEX, NUMERIC_ID_REGEX, OBJECT_ID_REGEX, PHONE_REGEX, URL_REGEX, USERNAME_REGEX,
    UUID_REGEX,
};
use super::MIN_USERNAME_LENGTH;
use crate::error::ValidationError;

/// Validates an email address against the RFC 5322 mailbox grammar.
///
/// An input that is empty after trimming fails before any parsing is
/// attempted.
pub fn is_email(email: &str, custom_message: Option<&str>) -> Result<(), ValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::or_custom(
            custom_message,
            "email cannot be empty",
        ));
    }
    if email.parse::<EmailAddress>().is_err() {
        return Err(ValidationError::or_custom(
            custom_message,
            "invalid email format",
        ));
    }
    Ok(())
}

/// Validates a phone number: optional leading `+`, first digit 1-9, and 2 to
/// 15 digits in total (the sign excluded).
pub fn phone_number(phone: &str, custom_message: Option<&str>) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(phone.trim()) {
        return Err(ValidationError::or_custom(
            custom_message,
            "invalid phone number format",
        ));
    }
    Ok(())
}

/// Validates an `http://` or `https://` URL.
pub fn url(url: &str, custom_message: Option<&str>) -> Result<(), ValidationError> {
    if !URL_REGEX.is_match(url.trim()) {
        return Err(ValidationError::or_custom(
            custom_message,
            "invalid URL format",
        ));
    }
    Ok(())
}

/// Fails unless the trimmed input is one or more ASCII letters or digits.
pub fn is_alphanumeric(s: &str, custom_message: Option<&str>) -> Result<(), ValidationError> {
    if !ALPHANUMERIC_REGEX.is_match(s.trim()) {
        return Err(ValidationError::or_custom(
            custom_message,
            "string must contain only letters and numbers",
        ));
    }
    Ok(())
}

/// Validates a username: at least three characters, then only letters,
/// digits, and underscores. The two checks run in that order and each carries
/// its own default message.
pub fn username(username: &str, custom_message: Option<&str>) -> Result<(), ValidationError> {
    let username = username.trim();

    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::or_custom(
            custom_message,
            "username must be at least 3 characters",
        ));
    }
    if !USERNAME_REGEX.is_match(username) {
        return Err(ValidationError::or_custom(
            custom_message,
            "username can only contain letters, numbers, and underscores",
        ));
    }
    Ok(())
}

/// Validates an identifier, accepting any of three shapes tried in order:
/// UUID (8-4-4-4-12 hex groups), ObjectID (24 hex characters), or a positive
/// decimal integer without a leading zero.
pub fn id(id: &str, custom_message: Option<&str>) -> Result<(), ValidationError> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::or_custom(
            custom_message,
            "ID cannot be empty",
        ));
    }

    if UUID_REGEX.is_match(id) || OBJECT_ID_REGEX.is_match(id) || NUMERIC_ID_REGEX.is_match(id) {
        return Ok(());
    }

    Err(ValidationError::or_custom(
        custom_message,
        "invalid ID format - must be UUID, ObjectID, or numeric",
    ))
}
