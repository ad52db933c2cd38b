//! Minimum-security password policy and the validated password wrapper.

use std::fmt;

use crate::utils::error_messages::{ErrorKind, ValidationOutcome};
use crate::utils::validation::{DEFAULT_MAX_PASSWORD_LENGTH, DEFAULT_MIN_PASSWORD_LENGTH};

/// Thresholds a password must satisfy. Lengths are counted in characters,
/// not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub require_letter: bool,
    pub require_digit: bool,
    pub require_symbol: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_length: DEFAULT_MAX_PASSWORD_LENGTH,
            require_letter: true,
            require_digit: true,
            require_symbol: true,
        }
    }
}

impl PasswordPolicy {
    /// Checks `password` against every rule of the policy. The error never
    /// says which rule failed.
    pub fn validate(&self, password: &str) -> ValidationOutcome<PasswordInput> {
        let length = password.chars().count();
        if length < self.min_length || length > self.max_length {
            return Err(ErrorKind::WeakPassword);
        }

        let mut has_letter = false;
        let mut has_digit = false;
        let mut has_symbol = false;
        for c in password.chars() {
            if c.is_alphabetic() {
                has_letter = true;
            } else if c.is_ascii_digit() {
                has_digit = true;
            } else if !c.is_whitespace() {
                has_symbol = true;
            }
        }

        if (self.require_letter && !has_letter)
            || (self.require_digit && !has_digit)
            || (self.require_symbol && !has_symbol)
        {
            return Err(ErrorKind::WeakPassword);
        }

        Ok(PasswordInput(password.to_owned()))
    }
}

/// A password that passed the policy it was checked against.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordInput(String);

impl PasswordInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never leak the password into logs
impl fmt::Debug for PasswordInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordInput(***)")
    }
}
