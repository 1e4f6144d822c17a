//! Settings documents: `name = value # comment` lines.
//!
//! This module provides:
//! - Syntax rules ([`Syntax`], [`NameChars`])
//! - Line classification ([`classify`], [`LineKind`])
//! - Name validation ([`validate_name`]) and value normalization ([`normalize_value`])
//! - The format-preserving rewrite engine ([`rewrite_document`], [`rewrite_line`])
//! - The in-memory store and its operations ([`Settings`])
//!
//! # Rewrite Discipline
//!
//! Saving never regenerates a document. Each line is either copied
//! verbatim, has only its value replaced (indentation, separator spacing,
//! trailing whitespace and comment are kept), or is dropped by a delete.
//! Settings missing from the document are appended at the end.
//!
//! # Cursor Positions
//!
//! | Operation | Cursor on return |
//! |-----------|------------------|
//! | [`Settings::load`] success | restored to where it was on entry |
//! | [`Settings::load`] malformed line | just past the offending line |
//! | [`Settings::save`] | offset 0 |
//! | [`Settings::delete`] | offset 0 |
//!
//! I/O errors leave the cursor wherever the failing call left it.

mod error;
mod line;
mod name;
mod rewrite;
mod syntax;
mod value;

#[cfg(test)]
mod name_tests;
#[cfg(test)]
mod value_tests;

pub use error::SettingsError;
pub use line::{
    BYTE_ORDER_MARK, LineKind, Malformation, PhysicalLine, SettingSpan, classify, physical_lines,
    split_byte_order_mark,
};
pub use name::{NameViolation, validate_name};
pub use rewrite::{LineRewrite, Mode, Rewrite, rewrite_document, rewrite_line};
pub use syntax::{DEFAULT_COMMENT, DEFAULT_SEPARATOR, NameChars, Syntax};
pub use value::normalize_value;

use std::collections::BTreeMap;
use std::io::SeekFrom;

use crate::storage::Storage;

/// In-memory settings store bound to a [`Syntax`].
///
/// Holds the current value of every known setting. Changes made through
/// [`Settings::set`] only reach the document on [`Settings::save`].
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use linecfg::settings::Settings;
///
/// let mut doc = Cursor::new(b"pc_health = 50 # start\nzombie_health=35\n".to_vec());
/// let mut settings = Settings::new();
/// settings.load(&mut doc).unwrap();
/// assert_eq!(settings.get("pc_health").unwrap(), "50");
///
/// settings.set("pc_health", "25").unwrap();
/// settings.save(&mut doc).unwrap();
/// assert_eq!(doc.get_ref(), b"pc_health = 25 # start\nzombie_health=35\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Settings {
    syntax: Syntax,
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Creates an empty store using the default syntax.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store using `syntax`.
    #[must_use]
    pub fn with_syntax(syntax: Syntax) -> Self {
        Self {
            syntax,
            values: BTreeMap::new(),
        }
    }

    /// Returns the syntax in use.
    #[must_use]
    pub const fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Returns the number of stored settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no setting is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if a setting with this name is stored.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the stored value of a setting.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::InvalidArgument`] if `name` is empty
    /// - [`SettingsError::FormatViolation`] if `name` breaks the name rules
    /// - [`SettingsError::NotFound`] if no such setting is stored
    pub fn get(&self, name: &str) -> Result<&str, SettingsError> {
        self.check_name(name)?;
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| SettingsError::NotFound(name.to_string()))
    }

    /// Stores a setting, normalizing its value first.
    ///
    /// Surrounding whitespace and any inline comment are stripped from
    /// `value`. The document is untouched until the next [`Settings::save`].
    ///
    /// # Errors
    ///
    /// - [`SettingsError::InvalidArgument`] if `name` is empty
    /// - [`SettingsError::FormatViolation`] if `name` breaks the name rules
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), SettingsError> {
        self.check_name(name)?;
        let value = normalize_value(value, self.syntax.comment());
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Reads every setting of the document into the store.
    ///
    /// Blank and comment lines are skipped. A leading byte-order mark is
    /// not part of the first line. A setting that appears twice keeps its
    /// last value. Settings already in the store and absent from
    /// the document are kept.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::Malformed`] on the first line that cannot be parsed.
    ///   Settings read before that line stay in the store and the cursor is
    ///   left just past the offending line.
    /// - [`SettingsError::Io`] if the storage fails or is not UTF-8.
    pub fn load<S: Storage + ?Sized>(&mut self, storage: &mut S) -> Result<(), SettingsError> {
        let origin = storage.stream_position()?;
        let text = storage.read_document()?;
        let (mark, body) = split_byte_order_mark(&text);
        let mut offset = mark.len() as u64;
        let mut count = 0usize;

        for (index, line) in physical_lines(body).enumerate() {
            offset += line.raw.len() as u64;

            match classify(line.body, &self.syntax) {
                LineKind::Setting(span) => {
                    let name = &line.body[span.name];
                    let value = normalize_value(&line.body[span.value], self.syntax.comment());
                    self.values.insert(name.to_string(), value);
                    count += 1;
                }
                LineKind::Malformed(reason) => {
                    tracing::warn!("Malformed line {}: {reason}", index + 1);
                    storage.seek(SeekFrom::Start(offset))?;
                    return Err(SettingsError::Malformed {
                        line: index + 1,
                        content: line.body.to_string(),
                        reason,
                    });
                }
                LineKind::Blank | LineKind::Comment => {}
            }
        }

        storage.seek(SeekFrom::Start(origin))?;
        tracing::debug!("Loaded {count} setting line(s), {} setting(s) stored", self.len());
        Ok(())
    }

    /// Writes the store back into the document.
    ///
    /// The first line of each stored setting gets the stored value; every
    /// other line is copied unchanged, as is a leading byte-order mark.
    /// Loading and then saving reproduces the document byte for byte unless
    /// a setting appears on more than one line: the first of those lines
    /// then takes the last value.
    ///
    /// Stored settings the document lacks are appended as `name = value`,
    /// each after a blank line. Two cases differ: nothing precedes the first
    /// entry appended to an empty document, and an empty value is written
    /// as `name =` without a trailing space. The cursor ends at offset 0.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if reading or rewriting fails. A failure
    /// while rewriting can leave the document truncated.
    pub fn save<S: Storage + ?Sized>(&self, storage: &mut S) -> Result<(), SettingsError> {
        let text = storage.read_document()?;
        let rewrite = rewrite_document(&text, &self.syntax, Mode::Save(&self.values));
        storage.replace_document(&rewrite.text)?;

        tracing::debug!(
            "Saved settings: {} value(s) replaced, {} appended",
            rewrite.replaced,
            rewrite.appended
        );
        Ok(())
    }

    /// Removes a setting from the store and every line naming it from the document.
    ///
    /// Returns `true` if anything was removed. Deleting an unknown setting
    /// is a no-op that leaves the document untouched and returns `false`.
    /// The cursor ends at offset 0.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::InvalidArgument`] if `name` is empty
    /// - [`SettingsError::FormatViolation`] if `name` breaks the name rules
    /// - [`SettingsError::Io`] if reading or rewriting fails
    pub fn delete<S: Storage + ?Sized>(
        &mut self,
        name: &str,
        storage: &mut S,
    ) -> Result<bool, SettingsError> {
        self.check_name(name)?;

        let text = storage.read_document()?;
        let rewrite = rewrite_document(&text, &self.syntax, Mode::Delete(name));
        if rewrite.removed > 0 {
            storage.replace_document(&rewrite.text)?;
        } else {
            storage.seek(SeekFrom::Start(0))?;
        }

        let stored = self.values.remove(name).is_some();
        tracing::debug!(
            "Deleted '{name}': {} line(s) removed, stored: {stored}",
            rewrite.removed
        );
        Ok(stored || rewrite.removed > 0)
    }

    /// Checks `name` against the name rules of this store's syntax.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::InvalidArgument`] if `name` is empty
    /// - [`SettingsError::FormatViolation`] if `name` breaks the name rules
    pub fn check_name(&self, name: &str) -> Result<(), SettingsError> {
        validate_name(name, &self.syntax)
            .map_err(|reason| SettingsError::from_violation(name, reason))
    }
}
