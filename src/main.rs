//! Objective Weights CLI
//!
//! Runs one weight engine operation over a sibling set read from stdin.
//!
//! # Commands
//!
//! - `total`: sum of all weights
//! - `check`: whether the set is balanced
//! - `describe`: balance report with a display message
//! - `auto-balance`: equal split of the unlocked remainder
//! - `normalize`: proportional rescale to exactly 100
//! - `suggest`: per-item preview of what `normalize` would change
//!
//! Input is a JSON array of `{"id", "weight", "isWeightLocked"}` objects.
//! Results go to stdout as JSON; logs go to stderr.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

use objective_weights::config::{AppConfig, ConfigError, LoggingConfig};
use objective_weights::domain::foundation::ValidationError as InputError;
use objective_weights::domain::weighting::{Tolerance, WeightEngine, WeightedItem};

/// Objective Weights - balance and normalize key result weights
#[derive(Parser)]
#[command(name = "objective-weights")]
#[command(version)]
#[command(about = "Balance and normalize the weights of an objective's key results")]
#[command(propagate_version = true)]
struct Cli {
    /// Balance tolerance, overriding OBJECTIVE_WEIGHTS__ENGINE__TOLERANCE
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Print the total of all weights
    Total,
    /// Print whether the weights total 100 within tolerance
    Check,
    /// Print the balance report
    Describe,
    /// Split the unlocked remainder equally
    AutoBalance,
    /// Rescale unlocked weights proportionally to total exactly 100
    Normalize,
    /// Preview the per-item changes normalize would make
    Suggest,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid --tolerance: {0}")]
    Tolerance(#[from] InputError),

    #[error("Failed to read or write: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("objective-weights: {}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("objective-weights: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over config.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.log_level));

    if logging.json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<(), CliError> {
    let engine = match cli.tolerance {
        Some(value) => WeightEngine::with_tolerance(Tolerance::try_new(value)?),
        None => config.engine.engine().map_err(ConfigError::from)?,
    };

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let items: Vec<WeightedItem> = serde_json::from_str(&input)?;

    debug!(
        command = ?cli.command,
        items = items.len(),
        tolerance = %engine.tolerance(),
        "running weight operation"
    );

    match cli.command {
        Commands::Total => emit(&WeightEngine::total_weight(&items), cli.pretty),
        Commands::Check => emit(&engine.is_balanced(&items), cli.pretty),
        Commands::Describe => emit(&engine.describe_balance(&items), cli.pretty),
        Commands::AutoBalance => emit(&WeightEngine::auto_balance(&items), cli.pretty),
        Commands::Normalize => emit(&engine.normalize(&items), cli.pretty),
        Commands::Suggest => emit(&engine.suggested_adjustments(&items), cli.pretty),
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_kebab_case_subcommands_and_tolerance() {
        let cli = Cli::try_parse_from(["objective-weights", "auto-balance", "--tolerance", "0.5"])
            .unwrap();
        assert!(matches!(cli.command, Commands::AutoBalance));
        assert_eq!(cli.tolerance, Some(0.5));
        assert!(!cli.pretty);
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["objective-weights", "shuffle"]).is_err());
    }
}
