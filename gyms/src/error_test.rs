use super::*;

#[test]
fn from_response_prefers_json_message() {
    let resp = ApiResponse::new(400, r#"{"message":"Title already taken"}"#);
    let err = ApiError::from_response(&resp, "Failed to create gym");
    assert_eq!(err, ApiError::Status { status: 400, message: "Title already taken".to_owned() });
    assert_eq!(err.user_message("create gym"), "Failed to create gym: Title already taken");
}

#[test]
fn from_response_falls_back_when_body_is_not_json() {
    let resp = ApiResponse::new(500, "<html>boom</html>");
    let err = ApiError::from_response(&resp, "Failed to update gym");
    assert_eq!(err.to_string(), "Failed to update gym");
    assert_eq!(err.status(), Some(500));
}

#[test]
fn from_response_falls_back_on_blank_message() {
    let resp = ApiResponse::new(422, r#"{"message":"  "}"#);
    let err = ApiError::from_response(&resp, "fallback");
    assert_eq!(err.to_string(), "fallback");
}

#[test]
fn status_401_is_session_expiry() {
    let err = ApiError::from_response(&ApiResponse::new(401, ""), "ignored");
    assert!(err.is_session_expired());
    assert_eq!(err.user_message("create gym"), SESSION_EXPIRED_MESSAGE);
}

#[test]
fn unauthorized_message_on_other_status_is_session_expiry() {
    let err = ApiError::from_response(&ApiResponse::new(403, r#"{"message":"Unauthorized"}"#), "ignored");
    assert!(err.is_session_expired());
}

#[test]
fn transport_failure_maps_to_generic_message() {
    let err = ApiError::from(TransportError("connection refused".to_owned()));
    assert!(!err.is_session_expired());
    assert_eq!(err.status(), None);
    assert_eq!(err.user_message("delete gym"), UNEXPECTED_MESSAGE);
}

#[test]
fn validation_error_user_message_is_rule_text() {
    let err = ApiError::from(ValidationError::PhoneDigits);
    assert_eq!(err.user_message("create gym"), "Phone number must have 11 digits including area code");
}

#[test]
fn response_message_ignores_non_string_message() {
    assert_eq!(response_message(r#"{"message":42}"#), None);
    assert_eq!(response_message(r#"{"error":"x"}"#), None);
}
