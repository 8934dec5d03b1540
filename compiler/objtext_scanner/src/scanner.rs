//! External scanner surface expected by the host parser.
//!
//! The host drives a plugin through five hooks: create, destroy, serialize,
//! deserialize and scan. The bare-string scanner keeps no state between
//! calls, so everything except `scan` is trivial. Destroy is `Drop`.

use objtext_lexer_core::{scan_bare_string, Lexer, ScanOutcome, ValidSymbols};
use tracing::Dispatch;


/// Size of the buffer the host hands to [`ExternalScanner::serialize`].
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Failure restoring scanner state from the host.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StateError {
    /// The scanner never serializes anything, so any bytes are foreign.
    #[error("bare string scanner is stateless, but {len} bytes of state were supplied")]
    UnexpectedState { len: usize },
}

/// Lifecycle and scan hooks of a host external scanner.
pub trait ExternalScanner: Sized {
    /// Allocate the per-parser scanner.
    fn create() -> Self;

    /// Try to recognize an external token at the cursor.
    ///
    /// `valid` is the host's per-token validity array in grammar order.
    /// Returns `true` if a token was recognized; the cursor then carries the
    /// result symbol and token end.
    fn scan<L: Lexer>(&mut self, lexer: &mut L, valid: &[bool]) -> bool;

    /// Write state into `buffer`, returning the number of bytes written.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restore state written by [`serialize`](Self::serialize).
    fn deserialize(&mut self, buffer: &[u8]) -> Result<(), StateError>;
}

/// Stateless bare-string scanner.
///
/// A tracing sink can be injected at construction; scans then log to it
/// instead of the thread's default subscriber.
#[derive(Clone, Debug, Default)]
pub struct BareStringScanner {
    dispatch: Option<Dispatch>,
}

impl BareStringScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner that sends its events to `dispatch`.
    pub fn with_dispatch(dispatch: Dispatch) -> Self {
        BareStringScanner {
            dispatch: Some(dispatch),
        }
    }

    /// Scan and report why a bare string was or was not recognized.
    pub fn scan_outcome<L: Lexer>(&self, lexer: &mut L, valid: ValidSymbols) -> ScanOutcome {
        match &self.dispatch {
            Some(dispatch) => {
                tracing::dispatcher::with_default(dispatch, || scan_bare_string(lexer, valid))
            }
            None => scan_bare_string(lexer, valid),
        }
    }
}

impl ExternalScanner for BareStringScanner {
    fn create() -> Self {
        Self::new()
    }

    fn scan<L: Lexer>(&mut self, lexer: &mut L, valid: &[bool]) -> bool {
        self.scan_outcome(lexer, ValidSymbols::from_slice(valid))
            .is_accepted()
    }

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, buffer: &[u8]) -> Result<(), StateError> {
        if buffer.is_empty() {
            Ok(())
        } else {
            Err(StateError::UnexpectedState { len: buffer.len() })
        }
    }
}
