//! Tests for setting name validation.

use super::{LineKind, NameChars, NameViolation, Syntax, classify, validate_name};

mod default_rules {
    use super::*;

    #[test]
    fn accepts_letters_digits_underscore() {
        let syntax = Syntax::default();

        assert_eq!(validate_name("pc_health", &syntax), Ok(()));
        assert_eq!(validate_name("_x1", &syntax), Ok(()));
        assert_eq!(validate_name("42", &syntax), Ok(()));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            validate_name("", &Syntax::default()),
            Err(NameViolation::Empty)
        );
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        let syntax = Syntax::default();

        assert_eq!(validate_name(" a", &syntax), Err(NameViolation::Whitespace));
        assert_eq!(validate_name("a b", &syntax), Err(NameViolation::Whitespace));
        assert_eq!(validate_name("a\t", &syntax), Err(NameViolation::Whitespace));
    }

    #[test]
    fn rejects_comment_character() {
        assert_eq!(
            validate_name("a#b", &Syntax::default()),
            Err(NameViolation::CommentChar('#'))
        );
    }

    #[test]
    fn rejects_separator_character() {
        assert_eq!(
            validate_name("a=b", &Syntax::default()),
            Err(NameViolation::SeparatorChar('='))
        );
    }

    #[test]
    fn rejects_illegal_character() {
        assert_eq!(
            validate_name("a.b", &Syntax::default()),
            Err(NameViolation::IllegalChar('.'))
        );
    }
}

mod custom_rules {
    use super::*;

    #[test]
    fn pattern_widens_accepted_set() {
        let syntax = Syntax::default().with_name_chars(NameChars::pattern(r"[\w.]").unwrap());

        assert_eq!(validate_name("log.level", &syntax), Ok(()));
    }

    #[test]
    fn policy_cannot_admit_structural_characters() {
        let syntax = Syntax::default().with_name_chars(NameChars::custom(|_| true));

        assert_eq!(validate_name("a b", &syntax), Err(NameViolation::Whitespace));
        assert_eq!(
            validate_name("a#", &syntax),
            Err(NameViolation::CommentChar('#'))
        );
        assert_eq!(
            validate_name("a=", &syntax),
            Err(NameViolation::SeparatorChar('='))
        );
    }

    #[test]
    fn valid_names_reparse_as_themselves() {
        let syntax = Syntax::default().with_name_chars(NameChars::custom(|c| c != '!'));

        for name in ["plain", "dotted.name", "dash-ed", "ünï"] {
            assert_eq!(validate_name(name, &syntax), Ok(()));
            let line = format!("{name} = 1");
            let LineKind::Setting(span) = classify(&line, &syntax) else {
                panic!("Expected {line:?} to parse as a setting");
            };
            assert_eq!(&line[span.name], name);
        }
    }
}
