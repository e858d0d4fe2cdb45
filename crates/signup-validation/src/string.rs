//! Required text validation

use crate::messages;

/// Validates a free-text field that only has to be filled in
///
/// `label` is the human-readable field name, e.g. "First name".
pub fn validate_required_text(value: &str, label: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(messages::required(label))
    } else {
        Ok(())
    }
}

pub fn validate_first_name(value: &str) -> Result<(), String> {
    validate_required_text(value, messages::FIRST_NAME_LABEL)
}

pub fn validate_last_name(value: &str) -> Result<(), String> {
    validate_required_text(value, messages::LAST_NAME_LABEL)
}
