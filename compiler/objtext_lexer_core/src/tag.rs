//! External token kinds and the host's valid-symbol set.
//!
//! The grammar declares its externals as `[bare_string, error_sentinel]`.
//! The host passes a `bool` per external, indexed by declaration order, to
//! say which tokens are acceptable at the current parse state.

use bitflags::bitflags;

#[cfg(test)]
mod tests;

/// An external token produced by this scanner.
///
/// Discriminants match the grammar's `externals` order and are the indices
/// into the host's valid-symbol array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExternalToken {
    /// Unquoted run of text accepted as a literal value.
    BareString = 0,
    /// Never requested by the grammar. Only valid during error recovery.
    ErrorSentinel = 1,
}

impl ExternalToken {
    /// All externals in declaration order.
    pub const ALL: [ExternalToken; 2] = [ExternalToken::BareString, ExternalToken::ErrorSentinel];

    /// Grammar rule name of this token.
    pub const fn name(self) -> &'static str {
        match self {
            ExternalToken::BareString => "bare_string",
            ExternalToken::ErrorSentinel => "error_sentinel",
        }
    }

    /// Index into the host's valid-symbol array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The single-token set containing `self`.
    #[inline]
    pub const fn symbol(self) -> ValidSymbols {
        match self {
            ExternalToken::BareString => ValidSymbols::BARE_STRING,
            ExternalToken::ErrorSentinel => ValidSymbols::ERROR_SENTINEL,
        }
    }
}

bitflags! {
    /// Set of external tokens the host currently accepts.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidSymbols: u8 {
        /// `bare_string` may be produced here.
        const BARE_STRING = 1 << 0;
        /// Set only while the host is recovering from a syntax error.
        const ERROR_SENTINEL = 1 << 1;
    }
}

impl ValidSymbols {
    /// Build the set from the host's `valid_symbols` array.
    ///
    /// Entries past the end of `valid` are treated as `false`; extra
    /// entries are ignored.
    pub fn from_slice(valid: &[bool]) -> Self {
        ExternalToken::ALL
            .iter()
            .filter(|tok| valid.get(tok.index()).copied().unwrap_or(false))
            .fold(ValidSymbols::empty(), |set, tok| set | tok.symbol())
    }

    /// Returns `true` if `token` is acceptable.
    #[inline]
    pub fn accepts(self, token: ExternalToken) -> bool {
        self.contains(token.symbol())
    }

    /// Returns `true` when the host is in error recovery.
    ///
    /// The host marks every external valid while recovering, and the
    /// sentinel is never valid otherwise.
    #[inline]
    pub fn in_error_recovery(self) -> bool {
        self.contains(ValidSymbols::ERROR_SENTINEL)
    }
}
