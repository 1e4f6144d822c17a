//! Error types for settings operations.

use thiserror::Error;

use super::{Malformation, NameViolation};

/// Error type for settings operations.
///
/// Covers invalid names supplied by callers, malformed lines found while
/// loading, lookups of missing settings, and I/O failures of the backing
/// storage.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The setting name is missing (empty).
    #[error("Invalid argument: setting name must not be empty")]
    InvalidArgument,

    /// A setting name supplied by the caller violates the name rules.
    #[error("Invalid setting name '{name}': {reason}")]
    FormatViolation {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: NameViolation,
    },

    /// A line of the document could not be parsed.
    #[error("Malformed line {line}: {reason}: '{content}'")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// The offending line, without its line ending
        content: String,
        /// Why it could not be parsed
        reason: Malformation,
    },

    /// No setting with this name is stored.
    #[error("Setting '{0}' not found")]
    NotFound(String),

    /// The comment/separator configuration is unusable.
    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),

    /// The backing storage failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SettingsError {
    /// Returns `true` for errors caused by text that breaks the format,
    /// whether it came from the caller or from the document.
    #[must_use]
    pub const fn is_format_violation(&self) -> bool {
        matches!(self, Self::FormatViolation { .. } | Self::Malformed { .. })
    }

    /// Maps a name validation failure to the matching error.
    pub(crate) fn from_violation(name: &str, reason: NameViolation) -> Self {
        match reason {
            NameViolation::Empty => Self::InvalidArgument,
            reason => Self::FormatViolation {
                name: name.to_string(),
                reason,
            },
        }
    }
}
