use super::*;

// === Predicates ===

#[test]
fn ident_chars() {
    for c in ['a', 'z', 'A', 'Z', '0', '9', '_', '.'] {
        assert!(is_ident_char(c), "{c:?} should be an identifier char");
    }
    for c in ['-', ' ', '(', '"', '@', 'é', '/'] {
        assert!(!is_ident_char(c), "{c:?} should not be an identifier char");
    }
}

#[test]
fn period_is_not_ident_start() {
    assert!(is_ident_char('.'));
    assert!(!is_ident_start('.'));
    assert!(is_ident_start('_'));
    assert!(is_ident_start('7'));
}

#[test]
fn trivia_includes_backslash_continuation() {
    for c in [' ', '\t', '\r', '\n', '\\'] {
        assert!(is_trivia(c), "{c:?} should be trivia");
    }
    assert!(!is_trivia('\u{0B}'));
    assert!(!is_trivia('a'));
}

#[test]
fn terminators() {
    for c in ['\n', '[', ']', '{', '}', ':', '&', ';', ','] {
        assert!(is_terminator(c), "{c:?} should terminate");
    }
    for c in ['\r', '(', ')', '=', '"', '@', '/', ' '] {
        assert!(!is_terminator(c), "{c:?} should not terminate");
    }
}

#[test]
fn line_feed_is_trivia_and_terminator() {
    assert!(is_trivia('\n'));
    assert!(is_terminator('\n'));
    assert!(is_line_break('\n'));
    assert!(is_line_break('\r'));
}

#[test]
fn markers_and_operators() {
    assert!(is_quote('"'));
    assert!(!is_quote('\''));
    assert!(is_verbatim_marker('@'));
    for c in ['+', '-', '*', '/'] {
        assert!(is_operator(c));
    }
    assert!(!is_operator('('));
    assert!(!is_operator('%'));
}

#[test]
fn single_char_values() {
    assert!(is_single_char_value('-'));
    assert!(is_single_char_value('('));
    assert!(is_single_char_value('/'));
    assert!(!is_single_char_value('+'));
    assert!(!is_single_char_value('*'));
}

#[test]
fn number_continuations() {
    assert!(is_number_suffix('d'));
    assert!(is_number_suffix('r'));
    assert!(is_number_suffix('%'));
    assert!(!is_number_suffix('x'));
    assert!(is_exponent_marker('e'));
    assert!(is_exponent_marker('E'));
    assert!(is_digit_separator('_'));
}

// === classify ===

#[test]
fn classify_priority_order() {
    assert_eq!(classify('4'), Class::Digit);
    assert_eq!(classify('q'), Class::IdentStart);
    assert_eq!(classify('_'), Class::IdentStart);
    assert_eq!(classify('.'), Class::Period);
    assert_eq!(classify('\n'), Class::Terminator);
    assert_eq!(classify('\r'), Class::Terminator);
    assert_eq!(classify('\t'), Class::Trivia);
    assert_eq!(classify('\\'), Class::Trivia);
    assert_eq!(classify(','), Class::Terminator);
    assert_eq!(classify('&'), Class::Terminator);
    assert_eq!(classify('"'), Class::Quote);
    assert_eq!(classify('@'), Class::Verbatim);
    assert_eq!(classify('('), Class::OpenParen);
    assert_eq!(classify('-'), Class::Operator);
    assert_eq!(classify('\u{7}'), Class::Control);
    assert_eq!(classify('é'), Class::Other);
    assert_eq!(classify(')'), Class::Other);
    assert_eq!(classify('#'), Class::Other);
}

#[test]
fn every_ascii_byte_has_a_class() {
    for b in 0u8..=127 {
        let c = char::from(b);
        let class = classify(c);
        if c.is_ascii_control() && !is_trivia(c) && !is_terminator(c) {
            assert_eq!(class, Class::Control, "{c:?}");
        }
    }
}
