use anyhow::{Context, Result};
use signup_form::Config;

pub fn run(config: &Config) -> Result<()> {
    print!("{}", render(config)?);
    Ok(())
}

/// The configured rule table as TOML
pub fn render(config: &Config) -> Result<String> {
    // Fail early on a pattern the engine could not compile
    config.schema.compile()?;

    toml::to_string_pretty(&config.schema).context("Failed to render schema")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use signup_form::{Rule, Schema};

    #[test]
    fn test_rendered_schema_reads_back() {
        let config = Config::default();

        let text = render(&config).unwrap();
        assert!(text.contains("rule = \"min_length\""));

        let parsed: Schema = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config.schema);
    }

    #[test]
    fn test_invalid_pattern_is_not_rendered() {
        let mut config = Config::default();
        config.schema.email.push(Rule::Pattern {
            pattern: "(".to_string(),
            message: "never".to_string(),
        });

        let err = render(&config).unwrap_err();
        assert!(err.to_string().starts_with("invalid pattern \"(\" for field email"));
    }
}
