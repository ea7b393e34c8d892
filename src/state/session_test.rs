use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn default_session_has_no_fields_set() {
    let state = SessionState::default();
    assert_eq!(state.authenticated, None);
    assert_eq!(state.token, None);
    assert_eq!(state.user_id, None);
    assert_eq!(state.user_name, None);
}

#[test]
fn default_session_is_not_authenticated() {
    assert!(!SessionState::default().is_authenticated());
}

#[test]
fn explicit_false_is_not_authenticated() {
    let mut state = SessionState::default();
    state.set_authenticated(Some(false));
    assert!(!state.is_authenticated());
}

#[test]
fn explicit_true_is_authenticated() {
    let mut state = SessionState::default();
    state.set_authenticated(Some(true));
    assert!(state.is_authenticated());
}

// =============================================================
// Atomic begin / end
// =============================================================

#[test]
fn begin_sets_all_four_fields_together() {
    let mut state = SessionState::default();
    state.begin("tok-1".to_owned(), "u-7".to_owned(), "Ana".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user_id.as_deref(), Some("u-7"));
    assert_eq!(state.user_name.as_deref(), Some("Ana"));
}

#[test]
fn end_clears_back_to_default() {
    let mut state = SessionState::default();
    state.begin("tok-1".to_owned(), "u-7".to_owned(), "Ana".to_owned());
    state.end();
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Per-field setters
// =============================================================

#[test]
fn setters_overwrite_unconditionally() {
    let mut state = SessionState::default();
    state.set_token(Some("a".to_owned()));
    state.set_token(Some("b".to_owned()));
    assert_eq!(state.token.as_deref(), Some("b"));
    state.set_token(None);
    assert_eq!(state.token, None);
}

#[test]
fn repeated_same_value_set_is_idempotent() {
    let mut state = SessionState::default();
    state.set_user_name(Some("Ana".to_owned()));
    let snapshot = state.clone();
    state.set_user_name(Some("Ana".to_owned()));
    assert_eq!(state, snapshot);
}
