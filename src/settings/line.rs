//! Line classification.
//!
//! Every physical line of a settings document is exactly one of:
//! - blank (only whitespace)
//! - comment (first non-whitespace character is the comment character)
//! - setting (`name = value`, optionally followed by a comment)
//! - malformed (anything else, with a diagnostic)
//!
//! Classification works on byte offsets into the line so the rewrite
//! engine can splice a new value in without touching anything else.

use std::ops::Range;

use thiserror::Error;

use super::Syntax;

/// Reason a line could not be read as a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformation {
    /// The comment character appears before the separator.
    #[error("comment before separator")]
    CommentBeforeSeparator,

    /// The name contains a character the name policy does not accept.
    #[error("illegal character '{0}' in name")]
    IllegalChar(char),

    /// Whitespace separates two parts of the name.
    #[error("space inside name")]
    SpaceInsideName,

    /// The line has no separator.
    #[error("missing separator")]
    MissingSeparator,

    /// Nothing precedes the separator.
    #[error("empty name")]
    EmptyName,
}

/// Field boundaries of a setting line, as byte offsets into the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingSpan {
    /// The setting name.
    pub name: Range<usize>,
    /// Offset of the separator character.
    pub separator: usize,
    /// The value, with surrounding whitespace excluded.
    pub value: Range<usize>,
    /// Offset of the comment character, if the line carries a trailing comment.
    pub comment: Option<usize>,
}

/// Classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only line.
    Blank,
    /// Whole-line comment.
    Comment,
    /// A `name = value` line.
    Setting(SettingSpan),
    /// A line that is neither blank, comment, nor a valid setting.
    Malformed(Malformation),
}

/// Classifies one line (without its line ending).
#[must_use]
pub fn classify(line: &str, syntax: &Syntax) -> LineKind {
    let start = line.len() - line.trim_start().len();
    let rest = &line[start..];

    match rest.chars().next() {
        None => LineKind::Blank,
        Some(c) if c == syntax.comment() => LineKind::Comment,
        Some(_) => match scan_name(line, start, syntax) {
            Ok((name, separator)) => {
                let after_separator = separator + syntax.separator().len_utf8();
                let (value, comment) = scan_value(line, after_separator, syntax);
                LineKind::Setting(SettingSpan {
                    name,
                    separator,
                    value,
                    comment,
                })
            }
            Err(reason) => LineKind::Malformed(reason),
        },
    }
}

/// Scans the name part starting at `start`, returning the name span and the
/// separator offset.
fn scan_name(
    line: &str,
    start: usize,
    syntax: &Syntax,
) -> Result<(Range<usize>, usize), Malformation> {
    let mut name_end = start;
    let mut gap = false;

    for (i, c) in line[start..].char_indices() {
        let offset = start + i;
        if c == syntax.separator() {
            if name_end == start {
                return Err(Malformation::EmptyName);
            }
            return Ok((start..name_end, offset));
        }
        if c == syntax.comment() {
            return Err(Malformation::CommentBeforeSeparator);
        }
        if c.is_whitespace() {
            gap = true;
        } else if !syntax.name_chars().accepts(c) {
            return Err(Malformation::IllegalChar(c));
        } else if gap {
            return Err(Malformation::SpaceInsideName);
        } else {
            name_end = offset + c.len_utf8();
        }
    }

    Err(Malformation::MissingSeparator)
}

/// Scans the value part starting right after the separator.
fn scan_value(
    line: &str,
    after_separator: usize,
    syntax: &Syntax,
) -> (Range<usize>, Option<usize>) {
    let tail = &line[after_separator..];
    let value_start = after_separator + (tail.len() - tail.trim_start().len());

    let mut boundary = line.len();
    let mut comment = None;
    let mut trailing = 0;

    for (i, c) in line[value_start..].char_indices() {
        if c == syntax.comment() {
            boundary = value_start + i;
            comment = Some(boundary);
            break;
        }
        if c.is_whitespace() {
            trailing += c.len_utf8();
        } else {
            trailing = 0;
        }
    }

    (value_start..boundary - trailing, comment)
}

/// A physical line split from its line ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalLine<'a> {
    /// The full line, ending included.
    pub raw: &'a str,
    /// Line content without the line ending.
    pub body: &'a str,
    /// The line ending (`"\n"`, `"\r\n"`, or `""` for an unterminated last line).
    pub ending: &'a str,
}

/// Splits a document into physical lines, keeping each line's ending.
///
/// Concatenating `body` and `ending` of every line reproduces the input.
pub fn physical_lines(text: &str) -> impl Iterator<Item = PhysicalLine<'_>> {
    text.split_inclusive('\n').map(|raw| {
        let body_len = raw
            .strip_suffix("\r\n")
            .or_else(|| raw.strip_suffix('\n'))
            .map_or(raw.len(), str::len);
        let (body, ending) = raw.split_at(body_len);
        PhysicalLine { raw, body, ending }
    })
}

/// UTF-8 byte-order mark some editors put at the start of a file.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Splits a leading byte-order mark off a document.
///
/// Returns the mark (empty if there is none) and the rest of the text.
/// Lines are classified from the rest; the mark is written back as is.
#[must_use]
pub fn split_byte_order_mark(text: &str) -> (&str, &str) {
    let rest = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    text.split_at(text.len() - rest.len())
}
