//! Character classification for the bare-string scanner.
//!
//! Every predicate is a pure function of one code point. Only ASCII takes
//! part in identifiers and numbers; everything else is ordinary text.

#[cfg(test)]
mod tests;

/// Letter, digit, underscore or period.
#[inline]
pub const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Identifier character other than `.`.
///
/// A lone `.` can still lead an identifier (`.foo`), but only through the
/// dedicated period state.
#[inline]
pub const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Whitespace and line continuation. Never part of a committed span's tail.
#[inline]
pub const fn is_trivia(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\\')
}

#[inline]
pub const fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Characters that always end the current token: they open or separate a
/// different grammar production.
#[inline]
pub const fn is_terminator(c: char) -> bool {
    matches!(c, '\n' | '[' | ']' | '{' | '}' | ':' | '&' | ';' | ',')
}

#[inline]
pub const fn is_quote(c: char) -> bool {
    c == '"'
}

/// `@`, which opens a verbatim string when followed by `"`.
#[inline]
pub const fn is_verbatim_marker(c: char) -> bool {
    c == '@'
}

/// Arithmetic operators of the expression grammar.
#[inline]
pub const fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Characters that may stand alone as a one-character bare string, but only
/// as the very first character of a scan.
#[inline]
pub const fn is_single_char_value(c: char) -> bool {
    matches!(c, '-' | '(' | '/')
}

/// Unit suffixes accepted directly after a number literal.
#[inline]
pub const fn is_number_suffix(c: char) -> bool {
    matches!(c, 'd' | 'r' | '%')
}

#[inline]
pub const fn is_exponent_marker(c: char) -> bool {
    matches!(c, 'e' | 'E')
}

/// Underscore between digits, as in `1_000`.
#[inline]
pub const fn is_digit_separator(c: char) -> bool {
    c == '_'
}

#[inline]
pub fn is_printable(c: char) -> bool {
    !c.is_control()
}

/// Coarse class of a code point, as seen by the `Start` state.
///
/// Classes are checked in declaration order, except that line breaks are
/// always [`Class::Terminator`] even though they also count as trivia.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Class {
    Digit,
    /// Letter or underscore.
    IdentStart,
    Period,
    Trivia,
    Terminator,
    Quote,
    Verbatim,
    /// `(`, which has no operator meaning but may stand alone.
    OpenParen,
    Operator,
    /// Non-printable, non-trivia control character.
    Control,
    Other,
}

/// Classify `c` in priority order.
pub fn classify(c: char) -> Class {
    if is_digit(c) {
        Class::Digit
    } else if is_ident_start(c) {
        Class::IdentStart
    } else if c == '.' {
        Class::Period
    } else if is_line_break(c) || is_terminator(c) {
        Class::Terminator
    } else if is_trivia(c) {
        Class::Trivia
    } else if is_quote(c) {
        Class::Quote
    } else if is_verbatim_marker(c) {
        Class::Verbatim
    } else if c == '(' {
        Class::OpenParen
    } else if is_operator(c) {
        Class::Operator
    } else if !is_printable(c) {
        Class::Control
    } else {
        Class::Other
    }
}
