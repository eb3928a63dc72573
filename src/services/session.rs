//! Session cookie handling.
//!
//! DESIGN
//! ======
//! The whole [`Session`] (including the backend token) lives in one signed,
//! HttpOnly cookie. There is no server-side session store: a cookie that
//! fails signature verification or decoding is treated as absent. The value
//! is base64url-encoded JSON so it stays within cookie-safe characters.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use gyms::Session;
use sha2::{Digest, Sha512};
use time::Duration;

pub const COOKIE_NAME: &str = "gymdesk_session";
pub const MAX_AGE_DAYS: i64 = 30;

/// Derive the 64-byte cookie signing key from the configured secret.
#[must_use]
pub fn derive_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Serialize a session into a cookie value.
///
/// # Errors
///
/// Fails only if the session cannot be serialized to JSON.
pub fn encode_session(session: &Session) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(session)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Parse a cookie value back into a session.
#[must_use]
pub fn decode_session(value: &str) -> Option<Session> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// The session cookie, ready to be added to a [`SignedCookieJar`].
#[must_use]
pub fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(MAX_AGE_DAYS))
        .build()
}

/// Removal cookie for logout; the path must match [`session_cookie`].
#[must_use]
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(COOKIE_NAME).path("/").build()
}

/// The verified session carried by the request, if any.
#[must_use]
pub fn read_session(jar: &SignedCookieJar) -> Option<Session> {
    let cookie = jar.get(COOKIE_NAME)?;
    let session = decode_session(cookie.value());
    if session.is_none() {
        tracing::warn!("discarding undecodable session cookie");
    }
    session
}
