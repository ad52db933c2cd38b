//! Represents a validated email address.
//!
//! An address is accepted when it has the shape `local-part@domain`: a
//! non-empty local part, exactly one `@`, and a domain made of at least two
//! non-empty labels separated by dots. Whitespace is never allowed, and the
//! address may not exceed 254 bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::utils::error_messages::{ErrorKind, ValidationOutcome};
use crate::utils::validation::MAX_EMAIL_LENGTH;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").expect("Failed to compile email regex")
});

/// A validated email address. This type can only be constructed through
/// validation, so any instance is a well-formed address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailInput {
    // Lowercased form of the validated address
    email: String,
}

impl EmailInput {
    /// Validates `email` and wraps its normalized form.
    ///
    /// Every structural failure yields [`ErrorKind::InvalidEmail`], the caller
    /// cannot tell which rule rejected the address.
    ///
    /// # Example
    /// ```
    /// use credgate::utils::validation::EmailInput;
    ///
    /// assert!(EmailInput::new("user@example.com").is_ok());
    /// assert!(EmailInput::new("email@dominio").is_err());
    /// ```
    pub fn new(email: &str) -> ValidationOutcome<Self> {
        if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
            return Err(ErrorKind::InvalidEmail);
        }

        if !EMAIL_REGEX.is_match(email) {
            return Err(ErrorKind::InvalidEmail);
        }

        Ok(Self {
            email: email.to_lowercase(),
        })
    }

    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for EmailInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

impl AsRef<str> for EmailInput {
    fn as_ref(&self) -> &str {
        &self.email
    }
}
