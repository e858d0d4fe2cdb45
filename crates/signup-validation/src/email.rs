//! Email validation

use crate::messages::{EMAIL_INVALID, EMAIL_REQUIRED};

/// Validates the email field
///
/// Only the presence of an `@` is checked. Anything stricter belongs to the
/// server that eventually receives the address.
pub fn validate_email(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(EMAIL_REQUIRED.to_string());
    }

    if !value.contains('@') {
        return Err(EMAIL_INVALID.to_string());
    }

    Ok(())
}
