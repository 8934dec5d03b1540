use super::*;

// === Basic Navigation ===

#[test]
fn lookahead_returns_first_char() {
    let cursor = SourceCursor::new("abc");
    assert_eq!(cursor.lookahead(), Some('a'));
    assert!(!cursor.is_eof());
}

#[test]
fn advance_moves_forward() {
    let mut cursor = SourceCursor::new("abc");
    cursor.advance(false);
    assert_eq!(cursor.lookahead(), Some('b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = SourceCursor::new("hi");
    cursor.advance(false);
    cursor.advance(false);
    assert!(cursor.is_eof());
    assert_eq!(cursor.lookahead(), None);
}

#[test]
fn advance_at_eof_is_noop() {
    let mut cursor = SourceCursor::new("x");
    cursor.advance(false);
    cursor.advance(false);
    cursor.advance(true);
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.token_start(), 0);
}

#[test]
fn empty_source_is_eof() {
    let cursor = SourceCursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.token_span(), Span::new(0, 0));
}

#[test]
fn advance_steps_whole_code_points() {
    let mut cursor = SourceCursor::new("λ😀x");
    cursor.advance(false);
    assert_eq!(cursor.pos(), 2);
    cursor.advance(false);
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.lookahead(), Some('x'));
}

// === Token Span ===

#[test]
fn skip_moves_token_start() {
    let mut cursor = SourceCursor::new("  ab");
    cursor.advance(true);
    cursor.advance(true);
    assert_eq!(cursor.token_start(), 2);
    cursor.advance(false);
    cursor.advance(false);
    assert_eq!(cursor.token_span(), Span::new(2, 4));
    assert_eq!(cursor.token_text(), "ab");
}

#[test]
fn unmarked_token_ends_at_cursor() {
    let mut cursor = SourceCursor::new("abc");
    cursor.advance(false);
    cursor.advance(false);
    assert_eq!(cursor.marked_end(), None);
    assert_eq!(cursor.token_text(), "ab");
}

#[test]
fn mark_end_excludes_later_advances() {
    let mut cursor = SourceCursor::new("ab  ,");
    cursor.advance(false);
    cursor.advance(false);
    cursor.mark_end();
    cursor.advance(false);
    cursor.advance(false);
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.token_span(), Span::new(0, 2));
    assert_eq!(cursor.token_text(), "ab");
}

#[test]
fn result_symbol_is_recorded() {
    let mut cursor = SourceCursor::new("x");
    assert_eq!(cursor.result_symbol(), None);
    cursor.set_result_symbol(ExternalToken::BareString);
    assert_eq!(cursor.result_symbol(), Some(ExternalToken::BareString));
}

// === Positioning ===

#[test]
fn at_starts_mid_source() {
    let cursor = SourceCursor::at("key = value", 6);
    assert_eq!(cursor.lookahead(), Some('v'));
    assert_eq!(cursor.token_start(), 6);
    assert_eq!(cursor.remaining(), "value");
}

#[test]
fn at_clamps_past_end() {
    let cursor = SourceCursor::at("ab", 10);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
}

#[test]
fn reset_discards_speculative_state() {
    let mut cursor = SourceCursor::new("  abc");
    cursor.advance(true);
    cursor.advance(false);
    cursor.mark_end();
    cursor.set_result_symbol(ExternalToken::BareString);
    cursor.reset_to(0);
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.token_start(), 0);
    assert_eq!(cursor.marked_end(), None);
    assert_eq!(cursor.result_symbol(), None);
}

#[test]
fn copy_is_a_snapshot() {
    let mut cursor = SourceCursor::new("abc");
    let saved = cursor;
    cursor.advance(false);
    assert_eq!(saved.pos(), 0);
    assert_eq!(cursor.pos(), 1);
}

// === Span ===

#[test]
fn span_helpers() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert_eq!(span.range(), 3..7);
    assert_eq!(span.to_string(), "3..7");
    assert!(Span::new(5, 5).is_empty());
}
