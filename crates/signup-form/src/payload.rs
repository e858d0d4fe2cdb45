// File: src/payload.rs
// Purpose: Submission snapshot and the library-driven whole-form check

use crate::field::FieldName;
use garde::Validate;
use serde::{Deserialize, Serialize};
use signup_validation::garde_validators;
use std::collections::BTreeMap;
use std::fmt;

/// Answer to "Where did you hear about us?"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HearAbout {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Brandfolder,
    Smartsheet,
}

impl HearAbout {
    pub fn as_str(self) -> &'static str {
        match self {
            HearAbout::Unspecified => "",
            HearAbout::Brandfolder => "Brandfolder",
            HearAbout::Smartsheet => "Smartsheet",
        }
    }
}

impl fmt::Display for HearAbout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of every form value, handed to a sink on submit
///
/// Serializes to exactly six keys: `email`, `firstName`, `lastName`,
/// `password`, `hearAbout` and `optin`.
///
/// The garde rules delegate to the same validators the hand-rolled form uses,
/// so a payload can be checked as a whole without a [`crate::SignupForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[garde(custom(garde_validators::email))]
    pub email: String,

    #[garde(custom(garde_validators::first_name))]
    pub first_name: String,

    #[garde(custom(garde_validators::last_name))]
    pub last_name: String,

    #[garde(custom(garde_validators::password))]
    pub password: String,

    #[serde(default)]
    #[garde(skip)]
    pub hear_about: HearAbout,

    #[serde(default)]
    #[garde(skip)]
    pub optin: bool,
}

impl SubmissionPayload {
    /// Value of a validated field
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Email => &self.email,
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Password => &self.password,
        }
    }

    /// Error message of every failing field, keyed by field
    ///
    /// Empty when the payload is valid.
    pub fn field_errors(&self) -> BTreeMap<FieldName, String> {
        let mut errors = BTreeMap::new();

        if let Err(report) = self.validate() {
            for (path, error) in report.iter() {
                match path.to_string().parse::<FieldName>() {
                    Ok(field) => {
                        errors
                            .entry(field)
                            .or_insert_with(|| error.message().to_string());
                    }
                    Err(_) => {
                        tracing::warn!(path = %path, "validation error on unknown path");
                    }
                }
            }
        }

        errors
    }
}
