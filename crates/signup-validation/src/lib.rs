//! Sign-up validation core
//!
//! Pure per-field validators shared by every form binding. Each validator
//! returns `Ok(())` for a valid value or `Err` carrying the message shown next
//! to the field. Nothing here depends on any other field.

pub mod email;
pub mod messages;
pub mod password;
pub mod string;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export all validators
pub use email::*;
pub use password::*;
pub use string::*;
