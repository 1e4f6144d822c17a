//! Setting name validation.

use thiserror::Error;

use super::Syntax;

/// Reason a candidate setting name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameViolation {
    /// The name is empty.
    #[error("name is empty")]
    Empty,

    /// The name contains a whitespace character.
    #[error("name contains whitespace")]
    Whitespace,

    /// The name contains the comment character.
    #[error("name contains the comment character '{0}'")]
    CommentChar(char),

    /// The name contains the separator character.
    #[error("name contains the separator character '{0}'")]
    SeparatorChar(char),

    /// The name contains a character the name policy does not accept.
    #[error("illegal character '{0}' in name")]
    IllegalChar(char),
}

/// Checks a candidate setting name against `syntax`.
///
/// Rejects exactly the names the line classifier could not read back,
/// so a name that passes here can always be located and rewritten later.
///
/// # Errors
///
/// Returns the first [`NameViolation`] found, scanning left to right.
pub fn validate_name(name: &str, syntax: &Syntax) -> Result<(), NameViolation> {
    if name.is_empty() {
        return Err(NameViolation::Empty);
    }

    for c in name.chars() {
        if c.is_whitespace() {
            return Err(NameViolation::Whitespace);
        }
        if c == syntax.comment() {
            return Err(NameViolation::CommentChar(c));
        }
        if c == syntax.separator() {
            return Err(NameViolation::SeparatorChar(c));
        }
        if !syntax.name_chars().accepts(c) {
            return Err(NameViolation::IllegalChar(c));
        }
    }

    Ok(())
}
