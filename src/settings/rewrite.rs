//! Format-preserving rewrite of a settings document.
//!
//! # Design
//!
//! - **Per-line decision**: [`rewrite_line`] is a pure function from one
//!   physical line (plus the store, the mode, and the names already
//!   consumed) to its output: the line unchanged, the line with only its
//!   value replaced, or nothing at all.
//! - **Document pass**: [`rewrite_document`] folds every line through
//!   [`rewrite_line`] into a new buffer, then (in save mode) appends the
//!   store entries that never matched a line.
//!
//! Anything that is not a confident match is copied verbatim, malformed
//! lines included.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

use super::Syntax;
use super::line::{LineKind, PhysicalLine, classify, physical_lines, split_byte_order_mark};

/// What a rewrite pass does with matching lines.
#[derive(Debug, Clone, Copy)]
pub enum Mode<'s> {
    /// Replace the value of every line naming a stored setting and append
    /// stored settings the document lacks.
    Save(&'s BTreeMap<String, String>),

    /// Drop every line naming this setting.
    Delete(&'s str),
}

/// Output of [`rewrite_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRewrite<'l> {
    /// The text to emit (ending included), or `None` to drop the line.
    pub output: Option<Cow<'l, str>>,
    /// The setting name this line was matched to, if any.
    pub consumed: Option<&'l str>,
}

impl<'l> LineRewrite<'l> {
    const fn keep(line: PhysicalLine<'l>) -> Self {
        Self {
            output: Some(Cow::Borrowed(line.raw)),
            consumed: None,
        }
    }
}

/// Decides the output for a single line.
///
/// In save mode a setting line is rewritten only if its name is stored and
/// not yet in `found`; later duplicates of the same name are kept verbatim.
#[must_use]
pub fn rewrite_line<'l>(
    line: PhysicalLine<'l>,
    syntax: &Syntax,
    mode: Mode<'_>,
    found: &HashSet<&str>,
) -> LineRewrite<'l> {
    let LineKind::Setting(span) = classify(line.body, syntax) else {
        return LineRewrite::keep(line);
    };
    let name = &line.body[span.name.clone()];

    match mode {
        Mode::Save(values) => {
            let Some(value) = values.get(name) else {
                return LineRewrite::keep(line);
            };
            if found.contains(name) {
                return LineRewrite::keep(line);
            }
            if line.body[span.value.clone()] == *value {
                return LineRewrite {
                    output: Some(Cow::Borrowed(line.raw)),
                    consumed: Some(name),
                };
            }

            let mut text = String::with_capacity(line.raw.len() + value.len());
            text.push_str(&line.body[..span.value.start]);
            text.push_str(value);
            text.push_str(&line.body[span.value.end..]);
            text.push_str(line.ending);

            LineRewrite {
                output: Some(Cow::Owned(text)),
                consumed: Some(name),
            }
        }
        Mode::Delete(target) if name == target => LineRewrite {
            output: None,
            consumed: Some(name),
        },
        Mode::Delete(_) => LineRewrite::keep(line),
    }
}

/// Result of a full rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    /// The new document.
    pub text: String,
    /// Lines whose value was replaced by a different one.
    pub replaced: usize,
    /// Lines dropped.
    pub removed: usize,
    /// Settings appended at the end.
    pub appended: usize,
}

impl Rewrite {
    /// Returns `true` if the pass produced a different document.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.replaced > 0 || self.removed > 0 || self.appended > 0
    }
}

/// Rewrites a whole document.
///
/// A leading byte-order mark is copied through and never matched.
#[must_use]
pub fn rewrite_document(text: &str, syntax: &Syntax, mode: Mode<'_>) -> Rewrite {
    let (mark, text) = split_byte_order_mark(text);
    let mut out = Rewrite {
        text: String::with_capacity(mark.len() + text.len()),
        ..Rewrite::default()
    };
    out.text.push_str(mark);
    let mut found = HashSet::new();

    for line in physical_lines(text) {
        let LineRewrite { output, consumed } = rewrite_line(line, syntax, mode, &found);
        match output {
            Some(Cow::Borrowed(kept)) => out.text.push_str(kept),
            Some(Cow::Owned(replaced)) => {
                out.text.push_str(&replaced);
                out.replaced += 1;
            }
            None => out.removed += 1,
        }
        if let Some(name) = consumed {
            tracing::trace!("Matched setting '{name}'");
            found.insert(name);
        }
    }

    if let Mode::Save(values) = mode {
        let eol = line_ending_of(text);
        for (name, value) in values.iter().filter(|(name, _)| !found.contains(name.as_str())) {
            let at_start = out.text.len() == mark.len();
            append_setting(&mut out.text, at_start, name, value, syntax.separator(), eol);
            out.appended += 1;
        }
    }

    out
}

/// Appends `name = value` after a blank line, or alone when `at_start`.
fn append_setting(
    text: &mut String,
    at_start: bool,
    name: &str,
    value: &str,
    separator: char,
    eol: &str,
) {
    if !at_start {
        if !text.ends_with('\n') {
            text.push_str(eol);
        }
        text.push_str(eol);
    }

    text.push_str(name);
    text.push(' ');
    text.push(separator);
    if !value.is_empty() {
        text.push(' ');
        text.push_str(value);
    }
    text.push_str(eol);
}

/// Returns the line ending used by the document (first one found, LF by default).
fn line_ending_of(text: &str) -> &str {
    physical_lines(text)
        .map(|line| line.ending)
        .find(|ending| !ending.is_empty())
        .unwrap_or("\n")
}
