//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::settings::{NameChars, Syntax};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML profile.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Syntax used to read and write settings files
    pub syntax: Syntax,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_chars = match self.syntax.name_chars() {
            NameChars::Word => "word".to_string(),
            NameChars::Pattern(regex) => regex.as_str().to_string(),
            NameChars::Custom(_) => "custom".to_string(),
        };

        write!(
            f,
            "Config {{ comment: '{}', separator: '{}', name_chars: {} }}",
            self.syntax.comment(),
            self.syntax.separator(),
            name_chars,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML profile.
    ///
    /// CLI arguments take precedence over profile values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A character field is not exactly one character
    /// - The comment and separator characters are whitespace or identical
    /// - The name pattern is not a valid regex
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let comment = Self::resolve_comment(cli, toml)?;
        let separator = Self::resolve_separator(cli, toml)?;
        let name_chars = Self::resolve_name_chars(cli, toml)?;

        let syntax = Syntax::new(comment, separator)
            .map_err(ConfigError::InvalidSyntax)?
            .with_name_chars(name_chars);

        Ok(Self {
            syntax,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional profile.
    ///
    /// If `cli.profile` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The profile cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.profile {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_comment(cli: &Cli, toml: Option<&TomlConfig>) -> Result<char, ConfigError> {
        // CLI takes precedence
        if let Some(c) = cli.comment_char {
            return Ok(c);
        }

        toml.and_then(|t| t.syntax.comment.as_deref())
            .map_or(Ok(defaults::COMMENT), |s| parse_char(field::COMMENT, s))
    }

    fn resolve_separator(cli: &Cli, toml: Option<&TomlConfig>) -> Result<char, ConfigError> {
        // CLI takes precedence
        if let Some(c) = cli.separator {
            return Ok(c);
        }

        toml.and_then(|t| t.syntax.separator.as_deref())
            .map_or(Ok(defaults::SEPARATOR), |s| parse_char(field::SEPARATOR, s))
    }

    fn resolve_name_chars(cli: &Cli, toml: Option<&TomlConfig>) -> Result<NameChars, ConfigError> {
        let pattern = cli
            .name_chars
            .as_deref()
            .or_else(|| toml.and_then(|t| t.syntax.name_chars.as_deref()));

        let Some(pattern) = pattern else {
            return Ok(NameChars::Word);
        };

        NameChars::pattern(pattern).map_err(|e| ConfigError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })
    }
}

/// Writes the default profile template to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_char(field: &'static str, s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidChar {
            field,
            value: s.to_string(),
        }),
    }
}
