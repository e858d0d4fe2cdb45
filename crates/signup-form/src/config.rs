// File: src/config.rs
// Purpose: Configuration parsing from signup.toml

use crate::engine::{FieldValidationEngine, HandRolledEngine};
use crate::form::SignupForm;
use crate::schema::{Schema, SchemaError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Rule table used by the schema engine
    #[serde(default)]
    pub schema: Schema,
}

/// Form behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub engine: EngineKind,

    /// Re-check every field inside `submit` instead of trusting the gate
    #[serde(default = "default_true")]
    pub revalidate_on_submit: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by RUST_LOG
    #[serde(default = "default_filter")]
    pub filter: String,
}

/// Which engine derives field errors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    /// Validator functions called directly
    #[default]
    HandRolled,
    /// Declarative rule table from `[schema]`
    Schema,
}

impl EngineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineKind::HandRolled => "hand-rolled",
            EngineKind::Schema => "schema",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hand-rolled" | "hand_rolled" => Ok(EngineKind::HandRolled),
            "schema" => Ok(EngineKind::Schema),
            other => Err(format!(
                "unknown engine {:?}, expected hand-rolled or schema",
                other
            )),
        }
    }
}

// Default values
fn default_true() -> bool {
    true
}

fn default_filter() -> String {
    "signup_form=info,signup_cli=info".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            revalidate_on_submit: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    /// Load a configuration file the user named explicitly
    ///
    /// Unlike `load`, a missing file is an error.
    pub fn load_required(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            anyhow::bail!("Config file not found: {:?}", path);
        }

        Self::load(path)
    }

    /// Build the configured engine
    pub fn engine(&self) -> std::result::Result<Box<dyn FieldValidationEngine>, SchemaError> {
        let engine: Box<dyn FieldValidationEngine> = match self.form.engine {
            EngineKind::HandRolled => Box::new(HandRolledEngine),
            EngineKind::Schema => Box::new(self.schema.compile()?),
        };
        Ok(engine)
    }

    /// A fresh form wired to the configured engine and submit policy
    pub fn build_form(&self) -> Result<SignupForm<Box<dyn FieldValidationEngine>>> {
        let engine = self
            .engine()
            .context("Failed to build validation engine")?;
        Ok(SignupForm::with_engine(engine).revalidate_on_submit(self.form.revalidate_on_submit))
    }
}
