use super::*;
use crate::testing::RecordingTransport;
use crate::validate::GymFields;

const BASE: &str = "http://backend.test/";

fn api() -> GymApi<RecordingTransport> {
    GymApi::new(RecordingTransport::new(), BASE).with_token("tok-1")
}

fn gym_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": "desc",
        "phone": "11987654321",
        "latitude": -23.5,
        "longitude": -46.6
    })
}

fn draft() -> GymDraft {
    GymFields {
        title: "Fitness Plus".to_owned(),
        description: "Open daily".to_owned(),
        phone: "(11) 98765-4321".to_owned(),
        latitude: "-23.55".to_owned(),
        longitude: "-46.63".to_owned(),
    }
    .validate()
    .expect("valid draft")
}

#[test]
fn new_trims_trailing_slash_from_base_url() {
    assert_eq!(api().base_url(), "http://backend.test");
}

#[test]
fn path_segments_are_percent_encoded() {
    assert_eq!(gym_path("abc-1_2.3~"), "/gyms/abc-1_2.3~");
    assert_eq!(gym_path("a/b c"), "/gyms/a%2Fb%20c");
    assert_eq!(turnstile_path("é"), "/turnstiles/%C3%A9");
}

#[tokio::test]
async fn list_gyms_sends_page_sort_and_bearer() {
    let api = api();
    api.transport().push_json(200, serde_json::json!({ "gyms": [gym_json("g1", "One")] }));

    let gyms = api.list_gyms(2, SortOrder::Asc).await.expect("gyms");
    assert_eq!(gyms.len(), 1);

    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "http://backend.test/user/gyms");
    assert_eq!(
        req.query,
        vec![("page".to_owned(), "2".to_owned()), ("sort".to_owned(), "asc".to_owned())]
    );
    assert_eq!(req.authorization().as_deref(), Some("Bearer tok-1"));
}

#[tokio::test]
async fn list_gyms_server_error_is_status_error() {
    let api = api();
    api.transport().push_text(500, "oops");
    let err = api.list_gyms(1, SortOrder::Desc).await.expect_err("should fail");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn create_gym_posts_stripped_phone_and_numeric_coordinates() {
    let api = api();
    api.transport().push_json(201, gym_json("g9", "Fitness Plus"));

    let created = api.create_gym(&draft()).await.expect("created");
    assert_eq!(created.id, "g9");

    assert_eq!(api.transport().count(Method::Post, "/gyms"), 1);
    let body = api.transport().requests()[0].body.clone().expect("body");
    assert_eq!(body["phone"], "11987654321");
    assert_eq!(body["latitude"], serde_json::json!(-23.55));
    assert_eq!(body["longitude"], serde_json::json!(-46.63));
}

#[tokio::test]
async fn create_gym_accepts_wrapped_gym_body() {
    let api = api();
    api.transport().push_json(201, serde_json::json!({ "gym": gym_json("g2", "Wrapped") }));
    let created = api.create_gym(&draft()).await.expect("created");
    assert_eq!(created.title, "Wrapped");
}

#[tokio::test]
async fn update_gym_puts_to_gym_path() {
    let api = api();
    api.transport().push_json(200, gym_json("g1", "Renamed"));
    api.update_gym("g1", &draft()).await.expect("updated");
    let req = &api.transport().requests()[0];
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.url, "http://backend.test/gyms/g1");
}

#[tokio::test]
async fn update_gym_unauthorized_message_flags_session_expiry() {
    let api = api();
    api.transport().push_json(403, serde_json::json!({ "message": "Unauthorized" }));
    let err = api.update_gym("g1", &draft()).await.expect_err("should fail");
    assert!(err.is_session_expired());
}

#[tokio::test]
async fn delete_gym_requires_204() {
    let api = api();
    api.transport().push_text(204, "");
    assert!(api.delete_gym("g1").await.is_ok());

    api.transport().push_json(200, serde_json::json!({}));
    let err = api.delete_gym("g1").await.expect_err("200 is not success for delete");
    assert_eq!(err.to_string(), "Failed to delete gym. Status: 200");
}

#[tokio::test]
async fn create_turnstile_posts_empty_object() {
    let api = api();
    api.transport().push_json(201, serde_json::json!({ "id": "t1", "gymId": "g1", "qrCode": "QR-1" }));
    let turnstile = api.create_turnstile("g1").await.expect("created");
    assert_eq!(turnstile.qr_code, "QR-1");
    let req = &api.transport().requests()[0];
    assert_eq!(req.url, "http://backend.test/gyms/g1/turnstiles");
    assert_eq!(req.body, Some(serde_json::json!({})));
}

#[tokio::test]
async fn list_turnstiles_sends_sort() {
    let api = api();
    api.transport().push_json(200, serde_json::json!({ "turnstiles": [] }));
    let items = api.list_turnstiles("g1", SortOrder::Desc).await.expect("list");
    assert!(items.is_empty());
    assert_eq!(api.transport().requests()[0].query, vec![("sort".to_owned(), "desc".to_owned())]);
}

#[tokio::test]
async fn delete_turnstile_uses_turnstile_path() {
    let api = api();
    api.transport().push_text(200, "");
    api.delete_turnstile("t5").await.expect("deleted");
    assert_eq!(api.transport().count(Method::Delete, "/turnstiles/t5"), 1);
}

#[tokio::test]
async fn login_omits_bearer_and_decodes_token() {
    let api = api();
    api.transport()
        .push_json(200, serde_json::json!({ "token": "jwt", "userId": "u1", "role": "GYM_OWNER" }));
    let creds = Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let login = api.login(&creds).await.expect("login");
    assert_eq!(login.token, "jwt");
    let req = &api.transport().requests()[0];
    assert!(req.bearer.is_none());
    assert_eq!(req.url, "http://backend.test/login");
}

#[tokio::test]
async fn login_rejection_uses_backend_message_or_default() {
    let api = api();
    api.transport().push_json(400, serde_json::json!({ "message": "Wrong password" }));
    api.transport().push_json(400, serde_json::json!({}));
    let creds = Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(api.login(&creds).await.expect_err("fail").to_string(), "Wrong password");
    assert_eq!(api.login(&creds).await.expect_err("fail").to_string(), "Invalid credentials");
}

#[tokio::test]
async fn signup_rejects_non_json_success_body() {
    let api = api();
    api.transport().push_text(201, "created!");
    let err = api
        .signup(&SignupRequest::gym_owner("Ana", "ana@example.com", "pw"))
        .await
        .expect_err("non-json");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn signup_failure_falls_back_to_status_message() {
    let api = api();
    api.transport().push_text(409, "");
    let err = api
        .signup(&SignupRequest::gym_owner("Ana", "ana@example.com", "pw"))
        .await
        .expect_err("conflict");
    assert_eq!(err.to_string(), "Registration failed with status 409");
}

#[tokio::test]
async fn network_failure_maps_to_transport_error() {
    let api = api();
    api.transport().push_network_error("connection refused");
    let err = api.list_gyms(1, SortOrder::Desc).await.expect_err("network");
    assert!(matches!(err, ApiError::Transport(_)));
}
