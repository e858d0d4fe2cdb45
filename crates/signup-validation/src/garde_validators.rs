//! Custom garde validators for the sign-up fields
//!
//! These wrap the plain validators so a `#[derive(garde::Validate)]` struct
//! reports exactly the same messages as the hand-rolled form.
//!
//! # Example
//!
//! ```ignore
//! use garde::Validate;
//!
//! #[derive(Validate)]
//! struct Signup {
//!     #[garde(custom(email))]
//!     email: String,
//! }
//! ```

use crate::{validate_email, validate_first_name, validate_last_name, validate_password};

fn to_garde(result: Result<(), String>) -> garde::Result {
    result.map_err(garde::Error::new)
}

/// Validator: email must be present and contain an `@`
pub fn email(value: &str, _ctx: &()) -> garde::Result {
    to_garde(validate_email(value))
}

/// Validator: first name must be present
pub fn first_name(value: &str, _ctx: &()) -> garde::Result {
    to_garde(validate_first_name(value))
}

/// Validator: last name must be present
pub fn last_name(value: &str, _ctx: &()) -> garde::Result {
    to_garde(validate_last_name(value))
}

/// Validator: password rule chain, first failure wins
pub fn password(value: &str, _ctx: &()) -> garde::Result {
    to_garde(validate_password(value))
}
