//! Host cursor contract and an in-memory implementation.
//!
//! The scanner never owns its input. It sees one code point of look-ahead
//! through [`Lexer`] and can only move forward. The host decides where the
//! token starts and ends from the calls it receives:
//!
//! - `advance(true)` skips a trivia character. The token start moves past it.
//! - `advance(false)` consumes a character as part of the token (or as
//!   look-ahead past a boundary that was already marked).
//! - `mark_end()` fixes the token end at the current position. Without a
//!   mark, the token ends wherever the cursor stopped.
//!
//! On failure the host throws every advance away, so speculative consumption
//! past the mark is free.

use crate::tag::ExternalToken;

#[cfg(test)]
mod tests;

/// Cursor over the host's input stream.
pub trait Lexer {
    /// The current look-ahead code point, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consume the look-ahead. `skip` marks it as trivia to leave out of the
    /// token. No-op at end of input.
    fn advance(&mut self, skip: bool);

    /// Fix the token end at the current position.
    fn mark_end(&mut self);

    /// Record which token was recognized.
    fn set_result_symbol(&mut self, token: ExternalToken);

    /// Returns `true` at end of input.
    #[inline]
    fn is_eof(&self) -> bool {
        self.lookahead().is_none()
    }
}

/// Half-open byte range `start..end` in the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The span as a `usize` range for slicing.
    #[inline]
    pub const fn range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// [`Lexer`] over a borrowed string, with tree-sitter's token-span rules.
///
/// The cursor is [`Copy`]: a host that wants to retry a failed scan keeps
/// the pre-scan value around instead of undoing advances.
#[derive(Clone, Copy, Debug)]
pub struct SourceCursor<'a> {
    source: &'a str,
    pos: u32,
    token_start: u32,
    marked_end: Option<u32>,
    result: Option<ExternalToken>,
}

impl<'a> SourceCursor<'a> {
    /// Cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Cursor at byte offset `pos`, clamped to the source length.
    ///
    /// `pos` must lie on a character boundary; otherwise the cursor reports
    /// end of input.
    pub fn at(source: &'a str, pos: u32) -> Self {
        let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let pos = pos.min(len);
        SourceCursor {
            source,
            pos,
            token_start: pos,
            marked_end: None,
            result: None,
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Where the token starts, after any skipped trivia.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// The last marked end, if any.
    #[inline]
    pub fn marked_end(&self) -> Option<u32> {
        self.marked_end
    }

    #[inline]
    pub fn result_symbol(&self) -> Option<ExternalToken> {
        self.result
    }

    /// The token span as the host would report it.
    pub fn token_span(&self) -> Span {
        Span::new(self.token_start, self.marked_end.unwrap_or(self.pos))
    }

    /// Source text covered by [`token_span`](Self::token_span).
    pub fn token_text(&self) -> &'a str {
        self.source.get(self.token_span().range()).unwrap_or("")
    }

    /// Text from the current position to the end of the source.
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.pos as usize..).unwrap_or("")
    }

    /// Discard everything since `pos`: position, token start, mark and result.
    pub fn reset_to(&mut self, pos: u32) {
        *self = Self::at(self.source, pos);
    }
}

impl Lexer for SourceCursor<'_> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8 is at most 4"
    )]
    fn advance(&mut self, skip: bool) {
        let Some(c) = self.lookahead() else {
            return;
        };
        self.pos += c.len_utf8() as u32;
        if skip {
            self.token_start = self.pos;
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked_end = Some(self.pos);
    }

    #[inline]
    fn set_result_symbol(&mut self, token: ExternalToken) {
        self.result = Some(token);
    }
}
