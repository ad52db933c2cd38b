//! Constants used throughout the validation system

/// Maximum length for an email address, in bytes
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Default minimum password length, in characters
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
/// Default maximum password length, in characters
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 64;
