use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_has_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
}

#[test]
fn session_state_default_is_loading() {
    let state = SessionState::default();
    assert!(state.loading);
}

// =============================================================
// Username derivation
// =============================================================

#[test]
fn derive_username_lowercases_first_token() {
    assert_eq!(derive_username("John Smith", 123), "john123");
}

#[test]
fn derive_username_handles_single_name() {
    assert_eq!(derive_username("alice", 7), "alice7");
}

#[test]
fn derive_username_ignores_extra_whitespace() {
    assert_eq!(derive_username("  Mary   Ann  ", 5), "mary5");
}

#[test]
fn derive_username_empty_name_is_just_the_suffix() {
    assert_eq!(derive_username("", 42), "42");
}
