use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  owner@example.com ", "pw"),
        Ok(("owner@example.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("a@b.com", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(validate_login_input("a@b.com", " pw ").map(|(_, p)| p), Ok(" pw ".to_owned()));
}
