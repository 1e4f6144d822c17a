//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// linecfg: format-preserving settings file editor
///
/// Reads and edits `name = value # comment` files, touching only the
/// lines that actually change.
#[derive(Debug, Parser)]
#[command(name = "linecfg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to a syntax profile (TOML)
    #[arg(long, short, global = true)]
    pub profile: Option<PathBuf>,

    /// Comment character
    #[arg(long = "comment-char", value_name = "CHAR", global = true)]
    pub comment_char: Option<char>,

    /// Separator between name and value
    #[arg(long, value_name = "CHAR", global = true)]
    pub separator: Option<char>,

    /// Regex pattern each setting name character must match
    #[arg(long = "name-chars", value_name = "PATTERN", global = true)]
    pub name_chars: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for linecfg
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the value of a setting
    Get {
        /// Settings file
        file: PathBuf,
        /// Setting name
        name: String,
    },

    /// Set a setting and save the file (created if missing)
    Set {
        /// Settings file
        file: PathBuf,
        /// Setting name
        name: String,
        /// New value
        value: String,
    },

    /// Remove a setting from the file
    Delete {
        /// Settings file
        file: PathBuf,
        /// Setting name
        name: String,
    },

    /// Parse the file and report the first malformed line, if any
    Check {
        /// Settings file
        file: PathBuf,
    },

    /// Generate a default syntax profile
    Init {
        /// Output path for the profile
        #[arg(long, short, default_value = "linecfg.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
