// File: src/event.rs
// Purpose: Input events delivered to a form by the presentation layer

use crate::field::FieldName;
use crate::payload::HearAbout;
use serde::{Deserialize, Serialize};

/// One user interaction
///
/// Serialized with a `type` tag, one event per line in replay scripts:
///
/// ```text
/// {"type":"input","field":"email","value":"ann@lee.com"}
/// {"type":"blur","field":"email"}
/// {"type":"optin","checked":true}
/// {"type":"hear_about","value":"Brandfolder"}
/// {"type":"submit"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// Keystroke in a validated field, carrying the whole new value
    Input { field: FieldName, value: String },
    /// Field lost focus
    Blur { field: FieldName },
    /// Opt-in checkbox toggled
    Optin { checked: bool },
    /// Radio selection
    HearAbout { value: HearAbout },
    /// Submit button pressed
    Submit,
}
