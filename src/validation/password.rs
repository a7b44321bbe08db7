//! Password strength rule.

use super::patterns::{DIGIT_REGEX, LOWERCASE_REGEX, UPPERCASE_REGEX};
use super::MIN_PASSWORD_LENGTH;
use crate::error::ValidationError;

/// Checks password strength: at least eight characters, one ASCII uppercase
/// letter, one ASCII lowercase letter, and one ASCII digit.
///
/// The checks run in that fixed order and the rule stops at the first
/// failure, so only one message is ever reported. A custom message overrides
/// whichever check failed. There is no special-character requirement.
pub fn password_strength(
    password: &str,
    custom_message: Option<&str>,
) -> Result<(), ValidationError> {
    let password = password.trim();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::or_custom(
            custom_message,
            "password must be at least 8 characters",
        ));
    }
    if !UPPERCASE_REGEX.is_match(password) {
        return Err(ValidationError::or_custom(
            custom_message,
            "password must contain uppercase letter",
        ));
    }
    if !LOWERCASE_REGEX.is_match(password) {
        return Err(ValidationError::or_custom(
            custom_message,
            "password must contain lowercase letter",
        ));
    }
    if !DIGIT_REGEX.is_match(password) {
        return Err(ValidationError::or_custom(
            custom_message,
            "password must contain number",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_passwords() {
        let valid_cases = vec!["MyPass123", "Abcdefg1", "xXyY1234"];

        for password in valid_cases {
            assert!(
                password_strength(password, None).is_ok(),
                "Strong password {} was rejected !",
                password
            );
        }
    }

    #[test]
    fn test_weak_passwords() {
        let invalid_cases = vec![
            "",
            "MyPass1",     // Too short
            "password",    // No uppercase, no digit
            "PASSWORD123", // No lowercase
            "MyPassword",  // No digit
        ];

        for password in invalid_cases {
            assert!(
                password_strength(password, None).is_err(),
                "Weak password {:?} was accepted !",
                password
            );
        }
    }

    #[test]
    fn test_checks_run_in_order() {
        // Length failure wins even when later checks would also fail
        let err = password_strength("abc", None).unwrap_err();
        assert_eq!(err.message(), "password must be at least 8 characters");

        let err = password_strength("alllowercase1", None).unwrap_err();
        assert_eq!(err.message(), "password must contain uppercase letter");

        let err = password_strength("ALLUPPERCASE1", None).unwrap_err();
        assert_eq!(err.message(), "password must contain lowercase letter");

        let err = password_strength("NoDigitsHere", None).unwrap_err();
        assert_eq!(err.message(), "password must contain number");
    }

    #[test]
    fn test_custom_message_covers_every_check() {
        let weak_passwords = vec!["abc", "alllowercase1", "ALLUPPERCASE1", "NoDigitsHere"];

        for password in weak_passwords {
            let err = password_strength(password, Some("password too weak")).unwrap_err();
            assert_eq!(err.message(), "password too weak", "for input {}", password);
        }
    }
}
