//! Password validation

use crate::messages::{
    PASSWORD_NO_NUMBER, PASSWORD_NO_SPECIAL, PASSWORD_REQUIRED, PASSWORD_TOO_SHORT,
};

/// Characters that satisfy the special character rule
pub const SPECIAL_CHARACTERS: &str = "!#$%&?";

/// Shortest accepted password, counted in UTF-16 code units like a browser
/// input's `value.length`
pub const PASSWORD_MIN_CHARS: usize = 9;

/// Validates the password field
///
/// Rules are checked in order and the first failure is reported:
/// 1. not empty
/// 2. at least [`PASSWORD_MIN_CHARS`] UTF-16 code units
/// 3. at least one ASCII digit
/// 4. at least one of [`SPECIAL_CHARACTERS`]
pub fn validate_password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(PASSWORD_REQUIRED.to_string());
    }
    if value.encode_utf16().count() < PASSWORD_MIN_CHARS {
        return Err(PASSWORD_TOO_SHORT.to_string());
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(PASSWORD_NO_NUMBER.to_string());
    }
    if !value.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(PASSWORD_NO_SPECIAL.to_string());
    }

    Ok(())
}
