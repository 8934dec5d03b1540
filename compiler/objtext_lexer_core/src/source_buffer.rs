//! Document text with a line-start index.
//!
//! The scanner itself only needs a [`SourceCursor`]. Drivers that walk a
//! whole document need to start cursors at arbitrary offsets and turn byte
//! offsets back into line/column pairs for reporting.

use memchr::memchr_iter;

use crate::cursor::{SourceCursor, Span};


/// Owned source text plus the byte offset of every line start.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    text: String,
    /// Offset of each line's first byte. Always starts with `0`.
    line_starts: Vec<u32>,
}

impl SourceBuffer {
    /// Index `source` by line.
    ///
    /// Sources larger than `u32::MAX` bytes saturate their offsets.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            memchr_iter(b'\n', source.as_bytes())
                .map(|nl| u32::try_from(nl + 1).unwrap_or(u32::MAX)),
        );
        SourceBuffer {
            text: source.to_owned(),
            line_starts,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor at byte offset `pos`.
    pub fn cursor_at(&self, pos: u32) -> SourceCursor<'_> {
        SourceCursor::at(&self.text, pos)
    }

    /// Zero-based line index containing `offset`.
    fn line_of(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    /// Zero-based `(line, column)` of `offset`. The column counts bytes.
    pub fn line_col(&self, offset: u32) -> (usize, u32) {
        let line = self.line_of(offset);
        (line, offset - self.line_starts[line])
    }

    /// Byte span of line `line`, excluding its line break.
    pub fn line_span(&self, line: usize) -> Option<Span> {
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(&next) => next - 1,
            None => self.len(),
        };
        let text = self.text.get(start as usize..end as usize)?;
        let end = if text.ends_with('\r') { end - 1 } else { end };
        Some(Span::new(start, end))
    }

    /// Source text covered by `span`.
    pub fn slice(&self, span: Span) -> &str {
        self.text.get(span.range()).unwrap_or("")
    }
}
