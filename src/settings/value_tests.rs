//! Tests for value normalization.

use super::normalize_value;

#[test]
fn strips_surrounding_whitespace() {
    assert_eq!(normalize_value("  value  ", '#'), "value");
}

#[test]
fn keeps_inner_whitespace() {
    assert_eq!(normalize_value(" a  b\tc ", '#'), "a  b\tc");
}

#[test]
fn strips_inline_comment() {
    assert_eq!(normalize_value("true #flag", '#'), "true");
    assert_eq!(normalize_value("true#flag", '#'), "true");
}

#[test]
fn comment_only_is_empty() {
    assert_eq!(normalize_value("   # nothing", '#'), "");
}

#[test]
fn empty_stays_empty() {
    assert_eq!(normalize_value("", '#'), "");
    assert_eq!(normalize_value("   ", '#'), "");
}

#[test]
fn uses_given_comment_character() {
    assert_eq!(normalize_value("a # b ; c", ';'), "a # b");
}

#[test]
fn cuts_at_line_feed() {
    assert_eq!(normalize_value("first \nsecond", '#'), "first");
}

#[test]
fn keeps_separator_characters() {
    assert_eq!(normalize_value("a=b=c", '#'), "a=b=c");
}

#[test]
fn is_idempotent() {
    for raw in [
        "",
        "  x  ",
        "x # y",
        "\t a b \t# c # d",
        "multi\nline",
        "ünï  cødé ",
    ] {
        let once = normalize_value(raw, '#');
        assert_eq!(normalize_value(&once, '#'), once, "input: {raw:?}");
    }
}
