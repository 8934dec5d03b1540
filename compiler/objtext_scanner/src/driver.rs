//! Whole-document driver.
//!
//! Walks an Object Text document, stopping where the grammar expects a value
//! and running the scanner there, the way the parser would. Value positions
//! are the right-hand side of `=` and each element of a `[...]` list, whether
//! separated by `,`, `;` or a line break.
//! Strings and comments are skipped so delimiters inside them are ignored.
//!
//! This is not a parser: it only finds places a `bare_string` may appear.

use objtext_lexer_core::class::{is_line_break, is_trivia};
use objtext_lexer_core::{Decline, ScanOutcome, SourceBuffer, Span, ValidSymbols};
use tracing::trace;

use crate::scanner::BareStringScanner;


/// Result of scanning one value position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueReport {
    /// Byte offset of the value's first non-trivia character.
    pub offset: u32,
    /// Zero-based line of `offset`.
    pub line: usize,
    /// Zero-based byte column of `offset`.
    pub column: u32,
    pub outcome: ScanOutcome,
    /// Token span when a bare string was accepted.
    pub span: Option<Span>,
}

impl ValueReport {
    #[inline]
    pub fn is_bare_string(&self) -> bool {
        self.outcome.is_accepted()
    }

    /// Returns `true` if the value can be neither a bare string nor any
    /// other literal.
    pub fn is_malformed(&self) -> bool {
        matches!(self.outcome.decline(), Some(Decline::Malformed(_)))
    }
}

/// Iterator over the value positions of a document.
///
/// Positions whose scan found nothing at all (`Decline::Empty`) are skipped.
pub struct ValueScanner<'a> {
    scanner: &'a BareStringScanner,
    source: &'a SourceBuffer,
    pos: u32,
    /// Open `[` / `{` delimiters.
    nesting: Vec<char>,
}

impl<'a> ValueScanner<'a> {
    pub fn new(scanner: &'a BareStringScanner, source: &'a SourceBuffer) -> Self {
        ValueScanner {
            scanner,
            source,
            pos: 0,
            nesting: Vec::new(),
        }
    }

    fn char_at(&self, pos: u32) -> Option<char> {
        self.source.as_str().get(pos as usize..)?.chars().next()
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8 is at most 4"
    )]
    fn bump(&mut self) -> Option<char> {
        let c = self.char_at(self.pos)?;
        self.pos += c.len_utf8() as u32;
        Some(c)
    }

    fn eat_if(&mut self, expected: char) -> bool {
        if self.char_at(self.pos) == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip past the closing `"`, or to the end of the line if unterminated.
    fn skip_quoted(&mut self) {
        while let Some(c) = self.char_at(self.pos) {
            match c {
                '\n' => return,
                '\\' => {
                    self.bump();
                    if self.char_at(self.pos) != Some('\n') {
                        self.bump();
                    }
                }
                '"' => {
                    self.bump();
                    return;
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    /// Skip past the closing `"` of a verbatim string; `""` is an escape.
    fn skip_verbatim(&mut self) {
        while let Some(c) = self.bump() {
            if c == '"' && !self.eat_if('"') {
                return;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.char_at(self.pos) {
            if c == '\n' {
                return;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) {
        while let Some(c) = self.bump() {
            if c == '*' && self.eat_if('/') {
                return;
            }
        }
    }

    fn in_list(&self) -> bool {
        self.nesting.last() == Some(&'[')
    }

    /// First non-trivia offset at or after `pos`, not past the line end.
    fn value_start(&self, mut pos: u32) -> u32 {
        while let Some(c) = self
            .char_at(pos)
            .filter(|&c| is_trivia(c) && !is_line_break(c))
        {
            pos += u32::try_from(c.len_utf8()).unwrap_or(1);
        }
        pos
    }

    /// Run the scanner at `pos`. Accepted values are skipped over.
    fn value_at(&mut self, pos: u32) -> Option<ValueReport> {
        let mut cursor = self.source.cursor_at(pos);
        let outcome = self
            .scanner
            .scan_outcome(&mut cursor, ValidSymbols::BARE_STRING);
        trace!(pos, %outcome, "value position");

        let (offset, span) = match outcome {
            ScanOutcome::Declined(Decline::Empty) => return None,
            ScanOutcome::Accepted => {
                let span = cursor.token_span();
                self.pos = span.end;
                (span.start, Some(span))
            }
            ScanOutcome::Declined(_) => (self.value_start(pos), None),
        };
        let (line, column) = self.source.line_col(offset);
        Some(ValueReport {
            offset,
            line,
            column,
            outcome,
            span,
        })
    }
}

impl Iterator for ValueScanner<'_> {
    type Item = ValueReport;

    fn next(&mut self) -> Option<ValueReport> {
        while let Some(c) = self.bump() {
            let report = match c {
                '"' => {
                    self.skip_quoted();
                    None
                }
                '@' if self.eat_if('"') => {
                    self.skip_verbatim();
                    None
                }
                '/' if self.eat_if('/') => {
                    self.skip_line_comment();
                    None
                }
                '/' if self.eat_if('*') => {
                    self.skip_block_comment();
                    None
                }
                '=' => self.value_at(self.pos),
                '[' => {
                    self.nesting.push('[');
                    self.value_at(self.pos)
                }
                '{' => {
                    self.nesting.push('{');
                    None
                }
                ']' | '}' => {
                    self.nesting.pop();
                    None
                }
                ',' | ';' | '\n' if self.in_list() => self.value_at(self.pos),
                _ => None,
            };
            if report.is_some() {
                return report;
            }
        }
        None
    }
}

/// Scan every value position of `source`.
pub fn scan_values(scanner: &BareStringScanner, source: &SourceBuffer) -> Vec<ValueReport> {
    ValueScanner::new(scanner, source).collect()
}
