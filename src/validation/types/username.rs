//! Wrapper type for a username that has been validated.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::format::username;

/// A username guaranteed to satisfy the username rule.
/// The stored value is the trimmed input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Username(String);

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        username(&value, None)?;
        Ok(Self(value.trim().to_owned()))
    }
}

impl TryFrom<&str> for Username {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        username(value, None)?;
        Ok(Self(value.trim().to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        let valid_cases = vec!["alice123", "Bob_user", "john_doe_42"];

        for name in valid_cases {
            assert!(
                Username::try_from(name).is_ok(),
                "Valid username {} was rejected !",
                name
            );
        }
    }

    #[test]
    fn test_invalid_username() {
        let invalid_cases = vec!["ab", "has space", "special@character", ""];

        for name in invalid_cases {
            assert!(
                Username::try_from(name).is_err(),
                "Invalid username {:?} was accepted !",
                name
            );
        }
    }

    #[test]
    fn test_username_display_and_as_ref() {
        let name = Username::try_from("test_user").unwrap();
        assert_eq!(name.to_string(), "test_user");
        assert_eq!(name.as_ref(), "test_user");
    }
}
