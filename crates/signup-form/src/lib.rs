// Sign-up form
// Field-level validation, touched tracking and gated submission for a sign-up form

pub mod config;
pub mod engine;
pub mod event;
pub mod field;
pub mod form;
pub mod payload;
pub mod schema;
pub mod submission;

// Re-export form types
pub use engine::{FieldValidationEngine, HandRolledEngine};
pub use event::FormEvent;
pub use field::{is_field_satisfied, FieldName, FieldState, UnknownField};
pub use form::{FormState, SignupForm};
pub use payload::{HearAbout, SubmissionPayload};
pub use schema::{Rule, Schema, SchemaEngine, SchemaError};
pub use submission::{JsonLinesSink, LogSink, SubmissionSink, SubmitError};

// Re-export framework types
pub use config::{Config, EngineKind};

// Re-export the validator functions
pub use signup_validation as validation;
