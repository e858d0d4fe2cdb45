// File: src/schema.rs
// Purpose: Declarative rule table and the engine that evaluates it

use crate::engine::FieldValidationEngine;
use crate::field::FieldName;
use regex::Regex;
use serde::{Deserialize, Serialize};
use signup_validation::messages;
use signup_validation::password::{PASSWORD_MIN_CHARS, SPECIAL_CHARACTERS};

/// One validation rule
///
/// Rules of a field run in order and the first failure is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// Value must not be empty
    Required { message: String },
    /// Value must contain `needle`
    Contains { needle: String, message: String },
    /// Value must have at least `min` UTF-16 code units
    MinLength { min: usize, message: String },
    /// Value must match the regex somewhere
    Pattern { pattern: String, message: String },
    /// Value must be one of `allowed`
    OneOf { allowed: Vec<String>, message: String },
}

/// Rule table for the four validated fields
///
/// Fields left out of a config file keep their sign-up rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default = "email_rules")]
    pub email: Vec<Rule>,

    #[serde(default = "first_name_rules", alias = "firstName")]
    pub first_name: Vec<Rule>,

    #[serde(default = "last_name_rules", alias = "lastName")]
    pub last_name: Vec<Rule>,

    #[serde(default = "password_rules")]
    pub password: Vec<Rule>,
}

fn email_rules() -> Vec<Rule> {
    vec![
        Rule::Required {
            message: messages::EMAIL_REQUIRED.to_string(),
        },
        Rule::Contains {
            needle: "@".to_string(),
            message: messages::EMAIL_INVALID.to_string(),
        },
    ]
}

fn first_name_rules() -> Vec<Rule> {
    vec![Rule::Required {
        message: messages::required(messages::FIRST_NAME_LABEL),
    }]
}

fn last_name_rules() -> Vec<Rule> {
    vec![Rule::Required {
        message: messages::required(messages::LAST_NAME_LABEL),
    }]
}

fn password_rules() -> Vec<Rule> {
    vec![
        Rule::Required {
            message: messages::PASSWORD_REQUIRED.to_string(),
        },
        Rule::MinLength {
            min: PASSWORD_MIN_CHARS,
            message: messages::PASSWORD_TOO_SHORT.to_string(),
        },
        Rule::Pattern {
            pattern: "[0-9]".to_string(),
            message: messages::PASSWORD_NO_NUMBER.to_string(),
        },
        Rule::Pattern {
            pattern: format!("[{}]", regex::escape(SPECIAL_CHARACTERS)),
            message: messages::PASSWORD_NO_SPECIAL.to_string(),
        },
    ]
}

impl Default for Schema {
    fn default() -> Self {
        Self::signup()
    }
}

impl Schema {
    /// The sign-up form's rules, identical to the hand-rolled validators
    pub fn signup() -> Self {
        Self {
            email: email_rules(),
            first_name: first_name_rules(),
            last_name: last_name_rules(),
            password: password_rules(),
        }
    }

    pub fn rules(&self, field: FieldName) -> &[Rule] {
        match field {
            FieldName::Email => &self.email,
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Password => &self.password,
        }
    }

    /// Compile every pattern and build an engine
    pub fn compile(&self) -> Result<SchemaEngine, SchemaError> {
        let compile_field = |field: FieldName| -> Result<Vec<CompiledRule>, SchemaError> {
            self.rules(field)
                .iter()
                .map(|rule| CompiledRule::compile(field, rule))
                .collect()
        };

        Ok(SchemaEngine {
            email: compile_field(FieldName::Email)?,
            first_name: compile_field(FieldName::FirstName)?,
            last_name: compile_field(FieldName::LastName)?,
            password: compile_field(FieldName::Password)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid pattern {pattern:?} for field {field}")]
    InvalidPattern {
        field: FieldName,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
enum CompiledRule {
    Required { message: String },
    Contains { needle: String, message: String },
    MinLength { min: usize, message: String },
    Pattern { regex: Regex, message: String },
    OneOf { allowed: Vec<String>, message: String },
}

impl CompiledRule {
    fn compile(field: FieldName, rule: &Rule) -> Result<Self, SchemaError> {
        Ok(match rule.clone() {
            Rule::Required { message } => CompiledRule::Required { message },
            Rule::Contains { needle, message } => CompiledRule::Contains { needle, message },
            Rule::MinLength { min, message } => CompiledRule::MinLength { min, message },
            Rule::Pattern { pattern, message } => {
                let regex = Regex::new(&pattern).map_err(|source| SchemaError::InvalidPattern {
                    field,
                    pattern: pattern.clone(),
                    source,
                })?;
                CompiledRule::Pattern { regex, message }
            }
            Rule::OneOf { allowed, message } => CompiledRule::OneOf { allowed, message },
        })
    }

    fn check(&self, value: &str) -> Result<(), String> {
        let (passed, message) = match self {
            CompiledRule::Required { message } => (!value.is_empty(), message),
            CompiledRule::Contains { needle, message } => (value.contains(needle.as_str()), message),
            CompiledRule::MinLength { min, message } => (value.encode_utf16().count() >= *min, message),
            CompiledRule::Pattern { regex, message } => (regex.is_match(value), message),
            CompiledRule::OneOf { allowed, message } => {
                (allowed.iter().any(|a| a == value), message)
            }
        };

        if passed {
            Ok(())
        } else {
            Err(message.clone())
        }
    }
}

/// Evaluates a compiled [`Schema`]
#[derive(Debug, Clone)]
pub struct SchemaEngine {
    email: Vec<CompiledRule>,
    first_name: Vec<CompiledRule>,
    last_name: Vec<CompiledRule>,
    password: Vec<CompiledRule>,
}

impl FieldValidationEngine for SchemaEngine {
    fn validate(&self, field: FieldName, value: &str) -> Result<(), String> {
        let rules = match field {
            FieldName::Email => &self.email,
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Password => &self.password,
        };
        rules.iter().try_for_each(|rule| rule.check(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HandRolledEngine;
    use pretty_assertions::assert_eq;

    const SAMPLES: &[&str] = &[
        "",
        " ",
        "a",
        "ab",
        "a@b",
        "ann@lee.com",
        "Ann",
        "abcd123!",
        "abcd1234!",
        "abcdefgh!",
        "abcdefgh1",
        "abcdefg1@",
        "abc12345!",
        "ééééééé1!",
        "😀😀😀😀1!",
        "😀😀😀1!",
        "pass word 1 & more",
    ];

    #[test]
    fn test_signup_schema_matches_hand_rolled() {
        let schema = Schema::signup().compile().unwrap();
        let hand_rolled = HandRolledEngine;

        for field in FieldName::ALL {
            for sample in SAMPLES {
                assert_eq!(
                    schema.validate(field, sample),
                    hand_rolled.validate(field, sample),
                    "field {} value {:?}",
                    field,
                    sample
                );
            }
        }
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let mut schema = Schema::signup();
        schema.password.push(Rule::Pattern {
            pattern: "[".to_string(),
            message: "never".to_string(),
        });

        match schema.compile() {
            Err(SchemaError::InvalidPattern { field, pattern, .. }) => {
                assert_eq!(field, FieldName::Password);
                assert_eq!(pattern, "[");
            }
            Ok(_) => panic!("expected an invalid pattern error"),
        }
    }

    #[test]
    fn test_one_of_rule() {
        let schema = Schema {
            first_name: vec![Rule::OneOf {
                allowed: vec!["Ann".to_string(), "Bob".to_string()],
                message: "Unknown name.".to_string(),
            }],
            ..Schema::signup()
        };
        let engine = schema.compile().unwrap();
        assert!(engine.validate(FieldName::FirstName, "Bob").is_ok());
        assert_eq!(
            engine.validate(FieldName::FirstName, "Eve"),
            Err("Unknown name.".to_string())
        );
    }

    #[test]
    fn test_partial_toml_override_keeps_other_fields() {
        let toml = r#"
            [[password]]
            rule = "required"
            message = "Pick a password."

            [[password]]
            rule = "min_length"
            min = 12
            message = "Too short."
        "#;
        let schema: Schema = toml::from_str(toml).unwrap();
        assert_eq!(schema.email, Schema::signup().email);
        assert_eq!(schema.password.len(), 2);

        let engine = schema.compile().unwrap();
        assert_eq!(
            engine.validate(FieldName::Password, ""),
            Err("Pick a password.".to_string())
        );
        assert_eq!(
            engine.validate(FieldName::Password, "abc12345!"),
            Err("Too short.".to_string())
        );
    }

    #[test]
    fn test_schema_survives_toml() {
        let text = toml::to_string(&Schema::signup()).unwrap();
        let parsed: Schema = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Schema::signup());
    }
}
