//! Error type shared by every validation rule.

use thiserror::Error;

/// A failed validation, carrying a single human-readable message.
///
/// Failures are distinguished only by their message text; there are no
/// structured error codes. Callers decide how to surface the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds the error a failing rule returns: the caller-supplied custom
    /// message when present and non-empty, the rule's default otherwise.
    /// The override never changes whether a rule passes or fails.
    pub(crate) fn or_custom(custom: Option<&str>, default: impl Into<String>) -> Self {
        match custom {
            Some(message) if !message.is_empty() => Self::new(message),
            _ => Self::new(default),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_message_wins() {
        let err = ValidationError::or_custom(Some("field is required"), "string cannot be empty");
        assert_eq!(err.message(), "field is required");
    }

    #[test]
    fn test_empty_custom_message_falls_back_to_default() {
        let err = ValidationError::or_custom(Some(""), "string cannot be empty");
        assert_eq!(err.message(), "string cannot be empty");

        let err = ValidationError::or_custom(None, "string cannot be empty");
        assert_eq!(err.message(), "string cannot be empty");
    }

    #[test]
    fn test_display_matches_message() {
        let err = ValidationError::new("invalid URL format");
        assert_eq!(err.to_string(), "invalid URL format");
    }
}
