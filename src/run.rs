//! Command execution.
//!
//! Opens the settings file named by the command, runs one settings
//! operation against it, and reports what happened. The file handle is
//! owned here; the settings engine only borrows it.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use thiserror::Error;

use linecfg::config::{Command, ConfigError, ValidatedConfig, write_default_config};
use linecfg::settings::{Settings, SettingsError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to open the settings file.
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A settings operation failed.
    #[error("{}: {source}", path.display())]
    Settings {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying settings error
        #[source]
        source: SettingsError,
    },

    /// Failed to write the syntax profile.
    #[error(transparent)]
    Init(#[from] ConfigError),
}

/// What a successful command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value of the requested setting.
    Value(String),
    /// The setting was stored and the file saved.
    Saved {
        /// Setting name
        name: String,
    },
    /// The delete ran; `removed` is false if the setting was not present.
    Deleted {
        /// Setting name
        name: String,
        /// Whether anything was removed
        removed: bool,
    },
    /// The file parsed cleanly.
    Checked {
        /// Number of distinct settings
        settings: usize,
    },
    /// A syntax profile template was written.
    Initialized {
        /// Where the template was written
        path: PathBuf,
    },
}

/// Executes one command.
///
/// # Errors
///
/// Returns an error if:
/// - The settings file cannot be opened
/// - The file contains a malformed line
/// - The setting name is invalid, or missing for `get`
/// - Reading or rewriting the file fails
pub fn execute(command: &Command, config: &ValidatedConfig) -> Result<Outcome, RunError> {
    match command {
        Command::Get { file, name } => {
            let mut handle = open(file, Access::Read)?;
            let settings = load(file, &mut handle, config)?;
            let value = settings.get(name).map_err(|e| settings_error(file, e))?;
            Ok(Outcome::Value(value.to_string()))
        }
        Command::Set { file, name, value } => {
            // Reject the name before a missing file gets created.
            Settings::with_syntax(config.syntax.clone())
                .check_name(name)
                .map_err(|e| settings_error(file, e))?;
            let mut handle = open(file, Access::Create)?;
            let mut settings = load(file, &mut handle, config)?;
            settings
                .set(name, value)
                .and_then(|()| settings.save(&mut handle))
                .map_err(|e| settings_error(file, e))?;
            tracing::info!("Saved '{name}' to {}", file.display());
            Ok(Outcome::Saved { name: name.clone() })
        }
        Command::Delete { file, name } => {
            let mut handle = open(file, Access::Write)?;
            let mut settings = load(file, &mut handle, config)?;
            let removed = settings
                .delete(name, &mut handle)
                .map_err(|e| settings_error(file, e))?;
            if removed {
                tracing::info!("Deleted '{name}' from {}", file.display());
            }
            Ok(Outcome::Deleted {
                name: name.clone(),
                removed,
            })
        }
        Command::Check { file } => {
            let mut handle = open(file, Access::Read)?;
            let settings = load(file, &mut handle, config)?;
            Ok(Outcome::Checked {
                settings: settings.len(),
            })
        }
        Command::Init { output } => {
            write_default_config(output)?;
            Ok(Outcome::Initialized {
                path: output.clone(),
            })
        }
    }
}

/// How a settings file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Read,
    Write,
    Create,
}

fn open(path: &Path, access: Access) -> Result<File, RunError> {
    let mut options = OpenOptions::new();
    options.read(true);
    match access {
        Access::Read => {}
        Access::Write => {
            options.write(true);
        }
        Access::Create => {
            options.write(true).create(true).truncate(false);
        }
    }

    options.open(path).map_err(|e| RunError::Open {
        path: path.to_path_buf(),
        source: e,
    })
}

fn load(path: &Path, handle: &mut File, config: &ValidatedConfig) -> Result<Settings, RunError> {
    let mut settings = Settings::with_syntax(config.syntax.clone());
    settings
        .load(handle)
        .map_err(|e| settings_error(path, e))?;
    tracing::debug!("Loaded {} setting(s) from {}", settings.len(), path.display());
    Ok(settings)
}

fn settings_error(path: &Path, source: SettingsError) -> RunError {
    RunError::Settings {
        path: path.to_path_buf(),
        source,
    }
}
