//! Configuration layer for the linecfg binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML syntax profile parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Profile generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Syntax settings are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - `--comment-char`, `--separator`, `--name-chars`
//! 2. **TOML profile** - the `[syntax]` section of `--profile`
//! 3. **Built-in defaults** - `#`, `=`, letters/digits/underscore
//!
//! Each field is resolved independently, so a profile can set the
//! separator while the command line overrides only the comment character.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{SyntaxSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
