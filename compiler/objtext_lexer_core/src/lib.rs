//! Bare-string scanner core for Object Text.
//!
//! Object Text values can be written without quotes. This crate decides, at a
//! value position, whether the upcoming run of characters is such an unquoted
//! "bare string" or one of the other literal shapes the grammar recognizes
//! (quoted and verbatim strings, references, collections, identifiers,
//! numbers, function calls). The decision is a single-pass, non-backtracking
//! state machine driven one code point at a time through a host [`Lexer`].
//!
//! # Layers
//!
//! - [`class`]: pure character predicates.
//! - [`bare_string`]: the scan automaton and its commit policy.
//! - [`cursor`]: the host cursor contract plus [`SourceCursor`], an in-memory
//!   implementation with the same semantics as the tree-sitter lexer.
//! - [`SourceBuffer`]: document text with a line index for drivers.

pub mod bare_string;
pub mod class;
pub mod cursor;
mod source_buffer;
mod tag;

pub use bare_string::{scan_bare_string, Decline, Malformation, ScanOutcome, Shape};
pub use cursor::{Lexer, SourceCursor, Span};
pub use source_buffer::SourceBuffer;
pub use tag::{ExternalToken, ValidSymbols};
