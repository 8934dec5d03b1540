//! Single-pass bare-string recognizer.
//!
//! Decides whether the run of characters at a value position is an unquoted
//! bare string, or one of the literal shapes the grammar already handles
//! (quoted/verbatim strings, references, collections, identifiers, numbers,
//! function calls). The scan is a greedy finite-state automaton over one code
//! point of look-ahead: it never backtracks and never buffers the line.
//!
//! # Design
//!
//! `BareString` is the catch-all. Every other shape has to disqualify it
//! explicitly: a run that ends while the automaton still believes it is an
//! identifier, a number, a call or a string is handed back to the grammar.
//!
//! Each state is a pure function of the look-ahead returning a `Step`.
//! Re-dispatch (`Step::Goto`) re-examines the same character in another
//! state without consuming it, which replaces jumping back into the middle of
//! the loop.
//!
//! # Commit boundary
//!
//! The token end is marked after every content character consumed while the
//! hypothesis is `BareString`, so trailing trivia before the terminator never
//! lands in the span. States that may still decline never mark: a failed
//! scan leaves no boundary behind.

use std::fmt;

use tracing::{debug, trace};

use crate::class::{
    classify, is_digit, is_digit_separator, is_exponent_marker, is_ident_char, is_ident_start,
    is_line_break, is_number_suffix, is_quote, is_single_char_value, is_terminator, is_trivia,
    Class,
};
use crate::cursor::Lexer;
use crate::tag::{ExternalToken, ValidSymbols};


/// Literal shape that belongs to another grammar rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `name`, `.name`, `a.b_c`, optionally followed by blanks only.
    Identifier,
    /// `42`, `1.5e-3`, `1_000`, `90d`, `.5`.
    Number,
    /// `"text"`.
    QuotedString,
    /// `@"text ""quoted"""`.
    VerbatimString,
    /// `name(args)` with nothing after the closing parenthesis.
    FunctionCall,
    /// `&path`.
    Reference,
    /// `[` or `{`.
    Collection,
}

/// Run that started down a path no bare string can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Malformation {
    /// Line break or end of input inside `"..."`.
    UnterminatedString,
    /// End of input inside `@"..."`.
    UnterminatedVerbatim,
    /// `@` not followed by `"`.
    StrayVerbatimMarker,
    /// Operator or parenthesis leading more content, or not at the very
    /// start of the scan.
    LeadingOperator,
    /// Non-printable character where a value should start.
    ControlCharacter,
}

/// Why no bare string was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decline {
    /// The host did not ask for a bare string, or is recovering from an
    /// error. Nothing was consumed.
    Unavailable,
    /// No content before a terminator or end of input.
    Empty,
    /// The run is exactly another literal shape.
    Deferred(Shape),
    /// The run cannot be a bare string.
    Malformed(Malformation),
}

/// Result of one scan.
///
/// The host only ever sees [`ScanOutcome::is_accepted`]; the decline reason
/// exists for tracing and tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanOutcome {
    /// A bare string was recognized and its end marked.
    Accepted,
    Declined(Decline),
}

impl ScanOutcome {
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, ScanOutcome::Accepted)
    }

    /// The decline reason, if the scan failed.
    pub fn decline(self) -> Option<Decline> {
        match self {
            ScanOutcome::Accepted => None,
            ScanOutcome::Declined(reason) => Some(reason),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Identifier => "identifier",
            Shape::Number => "number",
            Shape::QuotedString => "quoted string",
            Shape::VerbatimString => "verbatim string",
            Shape::FunctionCall => "function call",
            Shape::Reference => "reference",
            Shape::Collection => "collection",
        })
    }
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Malformation::UnterminatedString => "unterminated string",
            Malformation::UnterminatedVerbatim => "unterminated verbatim string",
            Malformation::StrayVerbatimMarker => "`@` without a verbatim string",
            Malformation::LeadingOperator => "operator cannot start a bare string",
            Malformation::ControlCharacter => "control character in value",
        })
    }
}

impl fmt::Display for Decline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decline::Unavailable => f.write_str("not requested"),
            Decline::Empty => f.write_str("empty"),
            Decline::Deferred(shape) => write!(f, "{shape}"),
            Decline::Malformed(what) => write!(f, "malformed: {what}"),
        }
    }
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanOutcome::Accepted => f.write_str(ExternalToken::BareString.name()),
            ScanOutcome::Declined(reason) => write!(f, "declined ({reason})"),
        }
    }
}

/// Classification hypothesis for the run scanned so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Nothing consumed yet. `first` is cleared once leading trivia is skipped.
    Start { first: bool },
    /// Leading trivia.
    Whitespace,
    /// A leading `.`.
    MaybeIdentifierStartsPeriod,
    Identifier,
    /// Identifier followed by blanks.
    WhitespaceAfterIdentifier,
    /// Inside `name(`, at paren nesting `depth`.
    Call { depth: u32 },
    /// After the closing `)` of a call.
    CallClosed,
    Number,
    /// After a `d`, `r` or `%` unit suffix.
    NumberSuffix,
    /// After `e`/`E`.
    Exponent,
    /// After `e+`/`e-`.
    ExponentSign,
    ExponentDigits,
    Quote,
    QuoteBackslash,
    /// After `@`, or after a `"` inside a verbatim string.
    VerbatimMaybe { opened: bool },
    VerbatimQuote,
    /// A leading `-`, `(` or `/` that may stand alone.
    SingleBareString,
    BareString,
}

/// How a run ends once no more content follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    Accept,
    Decline(Decline),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Consume the look-ahead and move to the state.
    Consume(State),
    /// Skip the look-ahead as leading trivia.
    Skip(State),
    /// Re-examine the look-ahead in another state.
    Goto(State),
    /// `/` after content: either a comment or ordinary text.
    Slash,
    Finish(Verdict),
}

const fn deferred(shape: Shape) -> Step {
    Step::Finish(Verdict::Decline(Decline::Deferred(shape)))
}

const fn malformed(what: Malformation) -> Step {
    Step::Finish(Verdict::Decline(Decline::Malformed(what)))
}

/// Outcome when the run ends in `state`: end of input, a terminator, or a
/// comment.
fn at_end(state: State) -> Verdict {
    match state {
        State::Start { .. } | State::Whitespace => Verdict::Decline(Decline::Empty),
        State::Identifier | State::WhitespaceAfterIdentifier => {
            Verdict::Decline(Decline::Deferred(Shape::Identifier))
        }
        State::Call { .. } | State::CallClosed => {
            Verdict::Decline(Decline::Deferred(Shape::FunctionCall))
        }
        State::Number | State::NumberSuffix | State::ExponentDigits => {
            Verdict::Decline(Decline::Deferred(Shape::Number))
        }
        State::Quote | State::QuoteBackslash => {
            Verdict::Decline(Decline::Malformed(Malformation::UnterminatedString))
        }
        State::VerbatimMaybe { opened: true } => {
            Verdict::Decline(Decline::Deferred(Shape::VerbatimString))
        }
        State::VerbatimMaybe { opened: false } => {
            Verdict::Decline(Decline::Malformed(Malformation::StrayVerbatimMarker))
        }
        State::VerbatimQuote => {
            Verdict::Decline(Decline::Malformed(Malformation::UnterminatedVerbatim))
        }
        // Incomplete exponents and a lone `.` are ordinary text.
        State::MaybeIdentifierStartsPeriod
        | State::Exponent
        | State::ExponentSign
        | State::SingleBareString
        | State::BareString => Verdict::Accept,
    }
}

/// Dispatch on the first non-trivia character.
fn start(c: char, first: bool) -> Step {
    match classify(c) {
        Class::Digit => Step::Consume(State::Number),
        Class::IdentStart => Step::Consume(State::Identifier),
        Class::Period => Step::Consume(State::MaybeIdentifierStartsPeriod),
        Class::Trivia => Step::Skip(State::Whitespace),
        Class::Terminator => match c {
            '&' => deferred(Shape::Reference),
            '[' | '{' => deferred(Shape::Collection),
            _ => Step::Finish(Verdict::Decline(Decline::Empty)),
        },
        Class::Quote => Step::Consume(State::Quote),
        Class::Verbatim => Step::Consume(State::VerbatimMaybe { opened: false }),
        Class::OpenParen | Class::Operator if first && is_single_char_value(c) => {
            Step::Consume(State::SingleBareString)
        }
        Class::OpenParen | Class::Operator => malformed(Malformation::LeadingOperator),
        Class::Control => malformed(Malformation::ControlCharacter),
        Class::Other => Step::Goto(State::BareString),
    }
}

fn step(state: State, c: char) -> Step {
    match state {
        State::Start { first } => start(c, first),
        // A line break always ends the value, even before any content.
        State::Whitespace => {
            if is_trivia(c) && !is_line_break(c) {
                Step::Skip(State::Whitespace)
            } else {
                Step::Goto(State::Start { first: false })
            }
        }

        // Strings own their terminators.
        State::Quote => match c {
            '"' => deferred(Shape::QuotedString),
            '\\' => Step::Consume(State::QuoteBackslash),
            _ if is_line_break(c) => malformed(Malformation::UnterminatedString),
            _ => Step::Consume(State::Quote),
        },
        State::QuoteBackslash => {
            if is_line_break(c) {
                malformed(Malformation::UnterminatedString)
            } else {
                Step::Consume(State::Quote)
            }
        }
        State::VerbatimMaybe { opened } => {
            if is_quote(c) {
                Step::Consume(State::VerbatimQuote)
            } else {
                Step::Finish(at_end(State::VerbatimMaybe { opened }))
            }
        }
        State::VerbatimQuote => {
            if is_quote(c) {
                Step::Consume(State::VerbatimMaybe { opened: true })
            } else {
                Step::Consume(State::VerbatimQuote)
            }
        }

        State::SingleBareString => {
            if is_trivia(c) {
                Step::Finish(Verdict::Accept)
            } else {
                malformed(Malformation::LeadingOperator)
            }
        }

        // Every remaining state has seen content: a terminator ends the run.
        _ if is_terminator(c) => Step::Finish(at_end(state)),
        State::Call { depth } => match c {
            '(' => Step::Consume(State::Call {
                depth: depth.saturating_add(1),
            }),
            ')' if depth <= 1 => Step::Consume(State::CallClosed),
            ')' => Step::Consume(State::Call { depth: depth - 1 }),
            _ => Step::Consume(State::Call { depth }),
        },
        _ if c == '/' => Step::Slash,

        State::MaybeIdentifierStartsPeriod => {
            if is_digit(c) {
                Step::Consume(State::Number)
            } else if is_ident_start(c) {
                Step::Consume(State::Identifier)
            } else {
                Step::Goto(State::BareString)
            }
        }
        State::Identifier => {
            if is_ident_char(c) {
                Step::Consume(State::Identifier)
            } else if c == '(' {
                Step::Consume(State::Call { depth: 1 })
            } else if is_trivia(c) {
                Step::Consume(State::WhitespaceAfterIdentifier)
            } else {
                Step::Goto(State::BareString)
            }
        }
        State::WhitespaceAfterIdentifier | State::CallClosed => {
            if is_trivia(c) {
                Step::Consume(state)
            } else {
                // More words follow.
                Step::Goto(State::BareString)
            }
        }
        State::Number => {
            if is_digit(c) || c == '.' || is_digit_separator(c) {
                Step::Consume(State::Number)
            } else if is_trivia(c) {
                deferred(Shape::Number)
            } else if is_exponent_marker(c) {
                Step::Consume(State::Exponent)
            } else if is_number_suffix(c) {
                Step::Consume(State::NumberSuffix)
            } else {
                // Mixed alphanumerics (`42abc`) are neither number nor identifier.
                Step::Goto(State::BareString)
            }
        }
        State::NumberSuffix => {
            if is_trivia(c) {
                deferred(Shape::Number)
            } else {
                Step::Goto(State::BareString)
            }
        }
        State::Exponent => match c {
            '+' | '-' => Step::Consume(State::ExponentSign),
            _ if is_digit(c) => Step::Consume(State::ExponentDigits),
            _ => Step::Goto(State::BareString),
        },
        State::ExponentSign => {
            if is_digit(c) {
                Step::Consume(State::ExponentDigits)
            } else {
                Step::Goto(State::BareString)
            }
        }
        State::ExponentDigits => {
            if is_digit(c) || is_digit_separator(c) {
                Step::Consume(State::ExponentDigits)
            } else if is_trivia(c) {
                deferred(Shape::Number)
            } else {
                Step::Goto(State::BareString)
            }
        }
        State::BareString => Step::Consume(State::BareString),
    }
}

/// Drives the automaton over a host cursor.
struct Automaton<'l, L> {
    lexer: &'l mut L,
    state: State,
    /// The last consumed character was content, so the cursor sits exactly
    /// at a valid commit boundary.
    at_content_end: bool,
}

impl<'l, L: Lexer> Automaton<'l, L> {
    fn new(lexer: &'l mut L) -> Self {
        Automaton {
            lexer,
            state: State::Start { first: true },
            at_content_end: false,
        }
    }

    fn run(mut self) -> ScanOutcome {
        loop {
            let lookahead = self.lexer.lookahead();
            let step = match lookahead {
                Some(c) => step(self.state, c),
                None => Step::Finish(at_end(self.state)),
            };
            trace!(state = ?self.state, ?lookahead, ?step, "bare string step");

            match step {
                Step::Consume(next) => {
                    self.lexer.advance(false);
                    self.at_content_end = lookahead.is_some_and(|c| !is_trivia(c));
                    self.enter(next);
                }
                Step::Skip(next) => {
                    self.lexer.advance(true);
                    self.at_content_end = false;
                    self.state = next;
                }
                Step::Goto(next) => self.enter(next),
                Step::Slash => {
                    if let Some(verdict) = self.slash() {
                        return self.finish(verdict);
                    }
                }
                Step::Finish(verdict) => return self.finish(verdict),
            }
        }
    }

    /// Move to `next`, keeping the boundary on the last content character
    /// while the hypothesis is `BareString`.
    fn enter(&mut self, next: State) {
        if next == State::BareString && self.at_content_end {
            self.lexer.mark_end();
        }
        self.state = next;
    }

    /// Consume a `/` after content.
    ///
    /// `//` ends the run and returns its verdict. A `/* */` closed on the same
    /// line is consumed and the run goes on; one left open ends the run.
    /// Otherwise the `/` is text and the run becomes a bare string.
    fn slash(&mut self) -> Option<Verdict> {
        let verdict = at_end(self.state);
        if verdict == Verdict::Accept && self.at_content_end {
            self.lexer.mark_end();
        }
        self.lexer.advance(false);
        self.at_content_end = false;

        match self.lexer.lookahead() {
            Some('/') => {
                trace!(state = ?self.state, "line comment ends the run");
                Some(verdict)
            }
            Some('*') => {
                self.lexer.advance(false);
                // Committed text stays committed whatever follows the comment.
                if verdict == Verdict::Accept {
                    self.state = State::BareString;
                }
                if self.skip_block_comment() {
                    trace!(state = ?self.state, "block comment skipped");
                    None
                } else {
                    trace!(state = ?self.state, "open block comment ends the run");
                    Some(at_end(self.state))
                }
            }
            _ => {
                self.at_content_end = true;
                self.enter(State::BareString);
                None
            }
        }
    }

    /// Consume a block comment body through `*/`. Returns `false` if a line
    /// break or the end of input comes first; the line break is left unread.
    fn skip_block_comment(&mut self) -> bool {
        let mut star = false;
        while let Some(c) = self.lexer.lookahead() {
            if is_line_break(c) {
                return false;
            }
            self.lexer.advance(false);
            if star && c == '/' {
                return true;
            }
            star = c == '*';
        }
        false
    }

    fn finish(&mut self, verdict: Verdict) -> ScanOutcome {
        match verdict {
            Verdict::Accept => {
                if self.at_content_end {
                    self.lexer.mark_end();
                }
                self.lexer.set_result_symbol(ExternalToken::BareString);
                ScanOutcome::Accepted
            }
            Verdict::Decline(reason) => ScanOutcome::Declined(reason),
        }
    }
}

/// Scan for a bare string at the cursor.
///
/// Declines without touching `lexer` unless `valid` requests a bare string
/// outside error recovery. On acceptance the result symbol is set and the
/// token end is marked after the last content character; on any decline
/// nothing is marked and the host discards the advances.
#[tracing::instrument(level = "debug", skip(lexer))]
pub fn scan_bare_string<L: Lexer>(lexer: &mut L, valid: ValidSymbols) -> ScanOutcome {
    if !valid.accepts(ExternalToken::BareString) || valid.in_error_recovery() {
        trace!(?valid, "bare string not requested");
        return ScanOutcome::Declined(Decline::Unavailable);
    }
    let outcome = Automaton::new(lexer).run();
    debug!(%outcome, "bare string scan");
    outcome
}
