//! REST helpers for the dashboard's own server and handles to the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Session and config lookups degrade to `None` so hydration never fails on
//! them. Login returns the server's message as a `String` for inline display.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gyms::{ClientConfig, Session};

pub const SESSION_ENDPOINT: &str = "/api/auth/session";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const CONFIG_ENDPOINT: &str = "/api/config";

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(body: &str) -> String {
    gyms::error::response_message(body).unwrap_or_else(|| INVALID_CREDENTIALS.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn login_body(email: &str, password: &str) -> gyms::Credentials {
    gyms::Credentials { email: email.trim().to_owned(), password: password.to_owned() }
}

/// Fetch the signed-in session from the server cookie.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in through `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's message (or "Invalid credentials") when sign-in fails.
pub async fn login(email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&login_body(email, password))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(login_failed_message(&body));
        }
        resp.json::<Session>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(INVALID_CREDENTIALS.to_owned())
    }
}

/// Clear the session cookie via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await;
    }
}

/// Fetch the browser-facing configuration from `/api/config`.
pub async fn fetch_config() -> Option<ClientConfig> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            log::warn!("config request failed: {}", resp.status());
            return None;
        }
        resp.json::<ClientConfig>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Backend client for the browser, carrying the session token when present.
#[cfg(feature = "hydrate")]
pub fn backend(config: &ClientConfig, token: Option<&str>) -> gyms::GymApi<super::transport::BrowserTransport> {
    let api = gyms::GymApi::new(super::transport::BrowserTransport, &config.api_base_url);
    match token {
        Some(token) => api.with_token(token),
        None => api,
    }
}

/// Geocoder client for the map selector.
#[cfg(feature = "hydrate")]
pub fn geocoder(config: &ClientConfig) -> gyms::geocode::Geocoder<super::transport::BrowserTransport> {
    gyms::geocode::Geocoder::new(super::transport::BrowserTransport, &config.geocoder_url)
}

/// Backend client for the signed-in user, or `None` before config has loaded.
#[cfg(feature = "hydrate")]
pub fn session_backend(
    config: crate::app::ConfigSignal,
    session: leptos::prelude::RwSignal<crate::state::session::SessionState>,
) -> Option<gyms::GymApi<super::transport::BrowserTransport>> {
    use leptos::prelude::GetUntracked;
    let config = config.get_untracked()?;
    let session = session.get_untracked();
    Some(backend(&config, session.token()))
}
