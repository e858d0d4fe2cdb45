mod commands;

use clap::{Parser, Subcommand};
use signup_form::{Config, EngineKind, FieldName};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "signup", about = "Sign-up form validation tool")]
struct Cli {
    /// Configuration file [default: signup.toml, skipped when absent]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Validation engine (hand-rolled or schema), overrides the config file
    #[arg(long, global = true)]
    engine: Option<EngineKind>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a JSON-lines script of form events and report submissions
    Replay {
        /// Event script, read from stdin when omitted
        events: Option<PathBuf>,
        /// Write accepted submissions as JSON lines instead of logging them
        #[arg(long)]
        output: Option<PathBuf>,
        /// Do not re-check fields on submit
        #[arg(long)]
        trust_gate: bool,
    },
    /// Validate a single field value
    Check {
        /// Field name (email, firstName, lastName, password)
        field: FieldName,
        /// Raw value
        value: String,
    },
    /// Validate a whole submission payload (JSON)
    Validate {
        /// Payload file, read from stdin when omitted
        payload: Option<PathBuf>,
    },
    /// Print the effective rule table as TOML
    Schema,
}

fn init_logging(filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_required(path),
        None => Config::load_default(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };
    if let Some(engine) = cli.engine {
        config.form.engine = engine;
    }

    init_logging(&config.logging.filter);
    debug!(engine = %config.form.engine, "configuration loaded");

    let result = match cli.command {
        Commands::Replay {
            events,
            output,
            trust_gate,
        } => {
            if trust_gate {
                config.form.revalidate_on_submit = false;
            }
            commands::replay::run(&config, events.as_deref(), output.as_deref())
        }
        Commands::Check { field, value } => commands::check::run(&config, field, &value),
        Commands::Validate { payload } => commands::validate::run(payload.as_deref()),
        Commands::Schema => commands::schema::run(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
