//! TOML syntax profile parsing.
//!
//! Defines the structure of the profile file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root structure of a syntax profile.
///
/// All fields are optional to allow partial profiles
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Syntax section
    #[serde(default)]
    pub syntax: SyntaxSection,
}

/// Syntax section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyntaxSection {
    /// Comment character (a one-character string)
    pub comment: Option<String>,

    /// Separator character (a one-character string)
    pub separator: Option<String>,

    /// Regex pattern each name character must match
    pub name_chars: Option<String>,
}

impl TomlConfig {
    /// Loads a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses a profile from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default syntax profile with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# linecfg syntax profile
# Values given on the command line override the ones below.

[syntax]
# Character starting a comment, on its own line or after a value (default: "#")
comment = "#"

# Character between a setting name and its value (default: "=")
separator = "="

# Regex pattern each character of a setting name must match
# Default (when unset): letters, digits and underscore
# name_chars = "[A-Za-z0-9_.-]"
"##
    .to_string()
}
