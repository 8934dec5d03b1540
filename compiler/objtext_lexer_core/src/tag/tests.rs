use super::*;

// === ExternalToken ===

#[test]
fn discriminants_follow_grammar_order() {
    assert_eq!(ExternalToken::BareString as u8, 0);
    assert_eq!(ExternalToken::ErrorSentinel as u8, 1);
    for (i, tok) in ExternalToken::ALL.iter().enumerate() {
        assert_eq!(tok.index(), i, "{tok:?} out of declaration order");
    }
}

#[test]
fn token_is_one_byte() {
    assert_eq!(std::mem::size_of::<ExternalToken>(), 1);
}

#[test]
fn names_match_grammar_rules() {
    assert_eq!(ExternalToken::BareString.name(), "bare_string");
    assert_eq!(ExternalToken::ErrorSentinel.name(), "error_sentinel");
}

// === ValidSymbols ===

#[test]
fn from_slice_maps_by_index() {
    assert_eq!(
        ValidSymbols::from_slice(&[true, false]),
        ValidSymbols::BARE_STRING
    );
    assert_eq!(
        ValidSymbols::from_slice(&[false, true]),
        ValidSymbols::ERROR_SENTINEL
    );
    assert_eq!(ValidSymbols::from_slice(&[true, true]), ValidSymbols::all());
}

#[test]
fn from_slice_short_array_is_not_valid() {
    assert_eq!(ValidSymbols::from_slice(&[]), ValidSymbols::empty());
    assert_eq!(ValidSymbols::from_slice(&[true]), ValidSymbols::BARE_STRING);
}

#[test]
fn from_slice_ignores_extra_entries() {
    assert_eq!(
        ValidSymbols::from_slice(&[true, false, true, true]),
        ValidSymbols::BARE_STRING
    );
}

#[test]
fn accepts_checks_membership() {
    let set = ValidSymbols::BARE_STRING;
    assert!(set.accepts(ExternalToken::BareString));
    assert!(!set.accepts(ExternalToken::ErrorSentinel));
    assert!(!ValidSymbols::empty().accepts(ExternalToken::BareString));
}

#[test]
fn error_recovery_is_signalled_by_sentinel() {
    assert!(!ValidSymbols::BARE_STRING.in_error_recovery());
    assert!(ValidSymbols::all().in_error_recovery());
    assert!(ValidSymbols::ERROR_SENTINEL.in_error_recovery());
}
