//! Value normalization.

/// Produces the canonical stored form of a raw value.
///
/// Leading whitespace is dropped. The value then runs up to the comment
/// character, a line feed, or the end of input, whichever comes first,
/// and the whitespace run immediately before that boundary is excluded.
///
/// Normalization is idempotent.
///
/// # Examples
///
/// ```
/// use linecfg::settings::normalize_value;
///
/// assert_eq!(normalize_value("  50  # health", '#'), "50");
/// assert_eq!(normalize_value("a b  c ", '#'), "a b  c");
/// assert_eq!(normalize_value("", '#'), "");
/// ```
#[must_use]
pub fn normalize_value(raw: &str, comment: char) -> String {
    let raw = raw.trim_start();
    let mut end = 0;
    let mut trailing = 0;

    for (i, c) in raw.char_indices() {
        if c == comment || c == '\n' {
            break;
        }
        end = i + c.len_utf8();
        if c.is_whitespace() {
            trailing += c.len_utf8();
        } else {
            trailing = 0;
        }
    }

    raw[..end - trailing].to_string()
}
