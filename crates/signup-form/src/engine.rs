// File: src/engine.rs
// Purpose: Per-field validation engines

use crate::field::FieldName;
use signup_validation::{validate_email, validate_first_name, validate_last_name, validate_password};

/// Derives a field's error from its raw value
///
/// Implementations must be pure: the same field and value always give the
/// same outcome, and no other field is consulted.
pub trait FieldValidationEngine {
    /// `Ok(())` when valid, otherwise the message to display
    fn validate(&self, field: FieldName, value: &str) -> Result<(), String>;
}

impl<E: FieldValidationEngine + ?Sized> FieldValidationEngine for Box<E> {
    fn validate(&self, field: FieldName, value: &str) -> Result<(), String> {
        (**self).validate(field, value)
    }
}

impl<E: FieldValidationEngine + ?Sized> FieldValidationEngine for &E {
    fn validate(&self, field: FieldName, value: &str) -> Result<(), String> {
        (**self).validate(field, value)
    }
}

/// Calls the validator functions directly
#[derive(Debug, Clone, Copy, Default)]
pub struct HandRolledEngine;

impl FieldValidationEngine for HandRolledEngine {
    fn validate(&self, field: FieldName, value: &str) -> Result<(), String> {
        match field {
            FieldName::Email => validate_email(value),
            FieldName::FirstName => validate_first_name(value),
            FieldName::LastName => validate_last_name(value),
            FieldName::Password => validate_password(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_rolled_dispatch() {
        let engine = HandRolledEngine;
        assert_eq!(
            engine.validate(FieldName::Email, "ab"),
            Err("Email must be valid.".to_string())
        );
        assert_eq!(
            engine.validate(FieldName::FirstName, ""),
            Err("First name is required.".to_string())
        );
        assert_eq!(
            engine.validate(FieldName::LastName, ""),
            Err("Last name is required.".to_string())
        );
        assert!(engine.validate(FieldName::Password, "abc12345!").is_ok());
    }

    #[test]
    fn test_boxed_engine() {
        let engine: Box<dyn FieldValidationEngine> = Box::new(HandRolledEngine);
        assert!(engine.validate(FieldName::Email, "a@b").is_ok());
    }
}
