// File: src/field.rs
// Purpose: Validated field names and the per-field value/error/touched record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four fields that carry validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Email,
    #[serde(alias = "first_name")]
    FirstName,
    #[serde(alias = "last_name")]
    LastName,
    Password,
}

impl FieldName {
    /// Every validated field, in form order
    pub const ALL: [FieldName; 4] = [
        FieldName::Email,
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Password,
    ];

    /// Wire name of the field (matches the input's `name` attribute)
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Password => "password",
        }
    }

    /// Human-readable label used in messages
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Email => "Email",
            FieldName::FirstName => signup_validation::messages::FIRST_NAME_LABEL,
            FieldName::LastName => signup_validation::messages::LAST_NAME_LABEL,
            FieldName::Password => "Password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field {0:?}, expected one of email, firstName, lastName, password")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    /// Accepts both the wire name (`firstName`) and the Rust name (`first_name`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(FieldName::Email),
            "firstName" | "first_name" => Ok(FieldName::FirstName),
            "lastName" | "last_name" => Ok(FieldName::LastName),
            "password" => Ok(FieldName::Password),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Raw value, current error and touched flag of one field
///
/// `error` is empty when the value is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    pub error: String,
    pub touched: bool,
}

impl FieldState {
    /// Replace the value and the error derived from it
    pub fn update(&mut self, value: String, outcome: Result<(), String>) {
        self.value = value;
        self.error = outcome.err().unwrap_or_default();
    }

    /// Flip `touched` on. Returns true only the first time.
    pub fn mark_touched(&mut self) -> bool {
        let first = !self.touched;
        self.touched = true;
        first
    }

    pub fn is_satisfied(&self) -> bool {
        is_field_satisfied(&self.value, &self.error, self.touched)
    }

    /// Error to display: only once the field has been touched
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched && !self.error.is_empty() {
            Some(&self.error)
        } else {
            None
        }
    }
}

/// A field is satisfied when it is filled in, error-free and touched
pub fn is_field_satisfied(value: &str, error: &str, touched: bool) -> bool {
    !value.is_empty() && error.is_empty() && touched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
        assert_eq!("first_name".parse::<FieldName>(), Ok(FieldName::FirstName));
        assert!("middleName".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_field_name_serde() {
        let json = serde_json::to_string(&FieldName::LastName).unwrap();
        assert_eq!(json, r#""lastName""#);
        let parsed: FieldName = serde_json::from_str(r#""last_name""#).unwrap();
        assert_eq!(parsed, FieldName::LastName);
    }

    #[test]
    fn test_is_field_satisfied() {
        assert!(is_field_satisfied("Ann", "", true));
        assert!(!is_field_satisfied("", "", true));
        assert!(!is_field_satisfied("Ann", "bad", true));
        assert!(!is_field_satisfied("Ann", "", false));
    }

    #[test]
    fn test_mark_touched_is_idempotent() {
        let mut once = FieldState::default();
        assert!(once.mark_touched());

        let mut twice = FieldState::default();
        twice.mark_touched();
        assert!(!twice.mark_touched());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_visible_error_requires_touch() {
        let mut state = FieldState::default();
        state.update(String::new(), Err("Email is required.".to_string()));
        assert_eq!(state.visible_error(), None);

        state.mark_touched();
        assert_eq!(state.visible_error(), Some("Email is required."));

        state.update("a@b".to_string(), Ok(()));
        assert_eq!(state.visible_error(), None);
    }
}
