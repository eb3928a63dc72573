use super::*;

#[test]
fn gym_deserializes_camel_case_with_numeric_id() {
    let gym: Gym = serde_json::from_value(serde_json::json!({
        "id": 42,
        "title": "Fitness Plus",
        "description": "Open 24h",
        "phone": "11987654321",
        "latitude": -23.5,
        "longitude": -46.6,
        "createdAt": "2024-05-01T10:00:00Z"
    }))
    .expect("gym");
    assert_eq!(gym.id, "42");
    assert_eq!(gym.created_at.as_deref(), Some("2024-05-01T10:00:00Z"));
}

#[test]
fn gym_tolerates_missing_optional_fields() {
    let gym: Gym = serde_json::from_value(serde_json::json!({
        "id": "g-1",
        "title": "Bare",
        "latitude": 0.0,
        "longitude": 0.0
    }))
    .expect("gym");
    assert!(gym.description.is_empty());
    assert!(gym.phone.is_empty());
    assert!(gym.created_at.is_none());
}

#[test]
fn gym_page_accepts_wrapped_and_bare_arrays() {
    let wrapped: GymPage = serde_json::from_str(r#"{"gyms":[{"id":"a","title":"A","latitude":1,"longitude":2}]}"#)
        .expect("wrapped");
    let bare: GymPage = serde_json::from_str(r#"[{"id":"a","title":"A","latitude":1,"longitude":2}]"#).expect("bare");
    assert_eq!(wrapped.into_vec(), bare.into_vec());
}

#[test]
fn turnstile_list_accepts_wrapped_payload() {
    let list: TurnstileList =
        serde_json::from_str(r#"{"turnstiles":[{"id":7,"gymId":"g-1","qrCode":"QR-7"}]}"#).expect("list");
    let items = list.into_vec();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "7");
    assert_eq!(items[0].gym_id, "g-1");
    assert_eq!(items[0].qr_code, "QR-7");
}

#[test]
fn role_round_trips_gym_owner_and_preserves_unknown() {
    assert_eq!(serde_json::to_value(Role::GymOwner).expect("ser"), serde_json::json!("GYM_OWNER"));
    let admin: Role = serde_json::from_value(serde_json::json!("ADMIN")).expect("de");
    assert_eq!(admin, Role::Other("ADMIN".to_owned()));
}

#[test]
fn signup_request_serializes_owner_role() {
    let req = SignupRequest::gym_owner(" Ana ", " ana@example.com ", "secret");
    let value = serde_json::to_value(&req).expect("ser");
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Ana",
            "email": "ana@example.com",
            "password": "secret",
            "role": "GYM_OWNER"
        })
    );
}

#[test]
fn session_from_login_carries_token_and_email() {
    let login: LoginResponse =
        serde_json::from_value(serde_json::json!({ "token": "jwt", "userId": 9, "role": "GYM_OWNER" })).expect("login");
    let session = Session::from_login(login, "owner@example.com");
    assert_eq!(session.user_id, "9");
    assert_eq!(session.access_token, "jwt");
    assert_eq!(session.role, Some(Role::GymOwner));
    let value = serde_json::to_value(&session).expect("ser");
    assert_eq!(value["accessToken"], "jwt");
    assert_eq!(value["userId"], "9");
}

#[test]
fn sort_order_query_values() {
    assert_eq!(SortOrder::Asc.as_query(), "asc");
    assert_eq!(SortOrder::Desc.as_query(), "desc");
    assert_eq!(SortOrder::default(), SortOrder::Desc);
    assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
}

#[test]
fn client_config_defaults_geocoder_and_flags() {
    let cfg: ClientConfig = serde_json::from_str(r#"{"api_base_url":"http://api"}"#).expect("cfg");
    assert_eq!(cfg.geocoder_url, DEFAULT_GEOCODER_URL);
    assert!(!cfg.features.new_dashboard_layout);
}
