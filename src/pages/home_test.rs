use super::*;

#[test]
fn greeting_includes_user_name() {
    assert_eq!(greeting(Some("Ana")), "Hola, Ana");
}

#[test]
fn greeting_without_name_stays_generic() {
    assert_eq!(greeting(None), "Hola");
}

#[test]
fn shell_stays_hidden_until_authenticated() {
    let mut state = SessionState::default();
    assert!(!shell_visible(&state));

    state.set_authenticated(Some(false));
    assert!(!shell_visible(&state));

    state.begin("jwt".to_owned(), "17".to_owned(), "Ana".to_owned());
    assert!(shell_visible(&state));

    state.end();
    assert!(!shell_visible(&state));
}
