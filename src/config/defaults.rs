//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use crate::settings::{DEFAULT_COMMENT, DEFAULT_SEPARATOR};

/// Default comment character.
pub const COMMENT: char = DEFAULT_COMMENT;

/// Default separator character.
pub const SEPARATOR: char = DEFAULT_SEPARATOR;

/// Default output path for `init`.
pub const PROFILE_FILE: &str = "linecfg.toml";
