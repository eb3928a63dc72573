use super::*;

#[test]
fn login_failed_message_prefers_server_message() {
    assert_eq!(login_failed_message(r#"{"message":"Wrong password"}"#), "Wrong password");
}

#[test]
fn login_failed_message_defaults_to_invalid_credentials() {
    assert_eq!(login_failed_message(""), "Invalid credentials");
    assert_eq!(login_failed_message("<html>"), "Invalid credentials");
}

#[test]
fn login_body_trims_email_only() {
    let body = login_body("  a@b.com ", " secret ");
    assert_eq!(body.email, "a@b.com");
    assert_eq!(body.password, " secret ");
}
