//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::settings::SettingsError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the profile file.
    #[error("Failed to read profile '{}': {source}", path.display())]
    FileRead {
        /// Path to the profile
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML profile.
    #[error("Failed to parse TOML profile: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write the profile file (for init command).
    #[error("Failed to write profile '{}': {source}", path.display())]
    FileWrite {
        /// Path to the profile
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A single-character field does not hold exactly one character.
    #[error("Invalid {field} '{value}': expected exactly one character")]
    InvalidChar {
        /// Name of the field
        field: &'static str,
        /// The invalid value provided
        value: String,
    },

    /// Invalid regex pattern for name characters.
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        /// The invalid pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The comment/separator combination is unusable.
    #[error("{0}")]
    InvalidSyntax(#[source] SettingsError),
}

/// Well-known field names for `InvalidChar` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The comment character field.
    pub const COMMENT: &str = "comment";
    /// The separator character field.
    pub const SEPARATOR: &str = "separator";
}
