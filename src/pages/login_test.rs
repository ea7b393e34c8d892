use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  ana  ", "secret"),
        Ok(("ana".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("ana", " spaced pass "),
        Ok(("ana".to_owned(), " spaced pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("ana", ""), Err("Enter both username and password."));
    assert_eq!(validate_login_input("", ""), Err("Enter both username and password."));
}
