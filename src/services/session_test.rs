use axum::http::HeaderMap;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::response::IntoResponse;
use gyms::Role;

use super::*;

const SECRET: &str = "a-test-secret-that-is-long-enough-to-use";

fn session() -> Session {
    Session {
        user_id: "42".to_owned(),
        email: "owner@gym.test".to_owned(),
        role: Some(Role::GymOwner),
        access_token: "tok-abc".to_owned(),
    }
}

/// Sign `session` into a jar and return the `name=value` pair a browser would send back.
fn signed_pair(key: &Key) -> String {
    let value = encode_session(&session()).expect("encode");
    let jar = SignedCookieJar::new(key.clone()).add(session_cookie(value, false));
    let response = jar.into_response();
    let header = response.headers().get(SET_COOKIE).expect("set-cookie").to_str().expect("ascii");
    header.split(';').next().expect("pair").to_owned()
}

fn jar_with(pair: &str, key: &Key) -> SignedCookieJar {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, pair.parse().expect("header"));
    SignedCookieJar::from_headers(&headers, key.clone())
}

#[test]
fn derived_key_is_deterministic() {
    let a = signed_pair(&derive_key(SECRET));
    let b = signed_pair(&derive_key(SECRET));
    assert_eq!(a, b);
}

#[test]
fn session_value_survives_encoding() {
    let value = encode_session(&session()).expect("encode");
    assert!(!value.contains('"'));
    assert!(!value.contains(';'));
    assert_eq!(decode_session(&value), Some(session()));
}

#[test]
fn garbage_value_decodes_to_none() {
    assert_eq!(decode_session("not base64 !!"), None);
    assert_eq!(decode_session(&URL_SAFE_NO_PAD.encode(b"{\"nope\":1}")), None);
}

#[test]
fn cookie_attributes() {
    let cookie = session_cookie("v".to_owned(), true);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.max_age(), Some(Duration::days(30)));
}

#[test]
fn signed_cookie_round_trips() {
    let key = derive_key(SECRET);
    let pair = signed_pair(&key);
    assert_eq!(read_session(&jar_with(&pair, &key)), Some(session()));
}

#[test]
fn cookie_signed_with_other_secret_is_rejected() {
    let pair = signed_pair(&derive_key(SECRET));
    let other = derive_key("a-completely-different-secret-value-here");
    assert_eq!(read_session(&jar_with(&pair, &other)), None);
}

#[test]
fn unsigned_cookie_is_rejected() {
    let key = derive_key(SECRET);
    let value = encode_session(&session()).expect("encode");
    let pair = format!("{COOKIE_NAME}={value}");
    assert_eq!(read_session(&jar_with(&pair, &key)), None);
}

#[test]
fn missing_cookie_reads_as_none() {
    let jar = SignedCookieJar::new(derive_key(SECRET));
    assert_eq!(read_session(&jar), None);
}
