use super::open_input;
use anyhow::{bail, Context, Result};
use signup_form::{FieldName, SubmissionPayload};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Whole-payload check, the way a schema-driven form reports every field at once
pub fn run(path: Option<&Path>) -> Result<()> {
    let mut input = String::new();
    open_input(path)?
        .read_to_string(&mut input)
        .context("Failed to read payload")?;

    let errors = check_payload(&input)?;
    if errors.is_empty() {
        println!("payload is valid");
        return Ok(());
    }

    print!("{}", render(&errors));
    bail!("{} invalid field(s)", errors.len())
}

/// Parse a JSON payload and collect the message of every failing field
pub fn check_payload(input: &str) -> Result<BTreeMap<FieldName, String>> {
    let payload: SubmissionPayload =
        serde_json::from_str(input).context("Failed to parse payload")?;
    Ok(payload.field_errors())
}

fn render(errors: &BTreeMap<FieldName, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{:<10} {}\n", field.as_str(), message))
        .collect()
}
