//! Wrapper type for an email address that has been validated.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::format::is_email;

/// An email address guaranteed to satisfy the email rule.
/// The stored value is the trimmed input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        is_email(&email, None)?;
        Ok(Self(email.trim().to_owned()))
    }
}

impl TryFrom<&str> for Email {
    type Error = ValidationError;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        is_email(email, None)?;
        Ok(Self(email.trim().to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
