use anyhow::{bail, Result};
use signup_form::{Config, FieldName, FieldValidationEngine};

pub fn run(config: &Config, field: FieldName, value: &str) -> Result<()> {
    let engine = config.engine()?;

    match engine.validate(field, value) {
        Ok(()) => {
            println!("{}: ok", field);
            Ok(())
        }
        Err(message) => bail!("{}: {}", field, message),
    }
}
