//! linecfg: format-preserving settings file editor
//!
//! Entry point for the linecfg application.

use linecfg::config::{Cli, ValidatedConfig};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};
use run::{Outcome, RunError};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    match run::execute(&cli.command, &config) {
        Ok(outcome) => {
            report(&outcome);
            exit_code::SUCCESS
        }
        Err(RunError::Init(e)) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}

/// Prints the result of a command.
fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Value(value) => println!("{value}"),
        Outcome::Saved { name } => println!("Saved '{name}'"),
        Outcome::Deleted { name, removed: true } => println!("Deleted '{name}'"),
        Outcome::Deleted {
            name,
            removed: false,
        } => println!("'{name}' not present, nothing deleted"),
        Outcome::Checked { settings } => println!("OK: {settings} setting(s)"),
        Outcome::Initialized { path } => {
            println!("Syntax profile written to: {}", path.display());
        }
    }
}
