//! Syntax rules for a settings document.
//!
//! A [`Syntax`] bundles the characters that give a line its structure:
//! the comment character, the separator between name and value, and the
//! predicate deciding which characters may appear in a setting name.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::SettingsError;

/// Default comment character.
pub const DEFAULT_COMMENT: char = '#';

/// Default separator between a setting name and its value.
pub const DEFAULT_SEPARATOR: char = '=';

/// Policy deciding which characters are accepted in a setting name.
///
/// Whitespace, the comment character and the separator are never accepted,
/// whatever the policy says; the policy only narrows the remaining set.
#[derive(Clone, Default)]
pub enum NameChars {
    /// Letters, digits and underscore.
    #[default]
    Word,

    /// Characters matching a regex pattern (evaluated against each character alone).
    Pattern(Regex),

    /// Characters accepted by a custom function.
    Custom(Arc<dyn Fn(char) -> bool + Send + Sync>),
}

impl NameChars {
    /// Creates a pattern-based policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Creates a policy backed by a custom predicate.
    #[must_use]
    pub fn custom(predicate: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(predicate))
    }

    /// Returns `true` if the policy accepts `c`.
    #[must_use]
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Self::Word => c.is_alphanumeric() || c == '_',
            Self::Pattern(regex) => {
                let mut buf = [0u8; 4];
                regex.is_match(c.encode_utf8(&mut buf))
            }
            Self::Custom(predicate) => predicate(c),
        }
    }
}

impl fmt::Debug for NameChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word => f.write_str("Word"),
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The structural characters of a settings document.
///
/// # Examples
///
/// ```
/// use linecfg::settings::{NameChars, Syntax};
///
/// let syntax = Syntax::new(';', ':')
///     .unwrap()
///     .with_name_chars(NameChars::pattern("[a-z.]").unwrap());
///
/// assert_eq!(syntax.comment(), ';');
/// assert_eq!(syntax.separator(), ':');
/// assert!(syntax.accepts_in_name('.'));
/// assert!(!syntax.accepts_in_name(':'));
/// ```
#[derive(Debug, Clone)]
pub struct Syntax {
    comment: char,
    separator: char,
    name_chars: NameChars,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            comment: DEFAULT_COMMENT,
            separator: DEFAULT_SEPARATOR,
            name_chars: NameChars::Word,
        }
    }
}

impl Syntax {
    /// Creates a syntax with the given comment and separator characters
    /// and the default name policy.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidSyntax`] if either character is
    /// whitespace or both are the same character.
    pub fn new(comment: char, separator: char) -> Result<Self, SettingsError> {
        if comment.is_whitespace() {
            return Err(SettingsError::InvalidSyntax(
                "comment character must not be whitespace".to_string(),
            ));
        }
        if separator.is_whitespace() {
            return Err(SettingsError::InvalidSyntax(
                "separator character must not be whitespace".to_string(),
            ));
        }
        if comment == separator {
            return Err(SettingsError::InvalidSyntax(format!(
                "comment and separator must differ (both are '{comment}')"
            )));
        }

        Ok(Self {
            comment,
            separator,
            name_chars: NameChars::Word,
        })
    }

    /// Replaces the name character policy.
    #[must_use]
    pub fn with_name_chars(mut self, name_chars: NameChars) -> Self {
        self.name_chars = name_chars;
        self
    }

    /// Returns the comment character.
    #[must_use]
    pub const fn comment(&self) -> char {
        self.comment
    }

    /// Returns the separator character.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Returns the name character policy.
    #[must_use]
    pub const fn name_chars(&self) -> &NameChars {
        &self.name_chars
    }

    /// Returns `true` if `c` may appear in a setting name.
    #[must_use]
    pub fn accepts_in_name(&self, c: char) -> bool {
        !c.is_whitespace() && c != self.comment && c != self.separator && self.name_chars.accepts(c)
    }
}
