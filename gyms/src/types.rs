//! Wire types for the external gym backend and the dashboard server.
//!
//! The backend speaks camelCase JSON. Identifiers are kept as strings on the
//! client because the backend has answered with both numeric and UUID ids.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::geocode::DEFAULT_GEOCODER_URL;

// =============================================================================
// IDENTIFIERS
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

// =============================================================================
// GYMS
// =============================================================================

/// A gym record owned by the authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gym {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Validated body for `POST /gyms` and `PUT /gyms/{id}`.
///
/// Only produced by [`crate::validate::GymFields::validate`], so `phone`
/// always holds exactly eleven digits and coordinates are in range.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GymDraft {
    pub title: String,
    pub description: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A physical access turnstile bound to one gym.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turnstile {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_id")]
    pub gym_id: String,
    pub qr_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Server-side ordering for list endpoints (`sort=` query parameter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// `GET /user/gyms` answers either `{ "gyms": [...] }` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum GymPage {
    Wrapped { gyms: Vec<Gym> },
    Bare(Vec<Gym>),
}

impl GymPage {
    pub(crate) fn into_vec(self) -> Vec<Gym> {
        match self {
            Self::Wrapped { gyms } | Self::Bare(gyms) => gyms,
        }
    }
}

/// `GET /gyms/{id}/turnstiles` answers either `{ "turnstiles": [...] }` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum TurnstileList {
    Wrapped { turnstiles: Vec<Turnstile> },
    Bare(Vec<Turnstile>),
}

impl TurnstileList {
    pub(crate) fn into_vec(self) -> Vec<Turnstile> {
        match self {
            Self::Wrapped { turnstiles } | Self::Bare(turnstiles) => turnstiles,
        }
    }
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Account role as issued by the backend.
///
/// The register form only ever creates gym owners; any other role string the
/// backend returns at login is preserved verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    GymOwner,
    Other(String),
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        if raw == "GYM_OWNER" { Self::GymOwner } else { Self::Other(raw) }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::GymOwner => "GYM_OWNER".to_owned(),
            Role::Other(raw) => raw,
        }
    }
}

/// Body for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body for `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl SignupRequest {
    /// Sign-up request for a new gym owner account.
    #[must_use]
    pub fn gym_owner(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            password: password.to_owned(),
            role: Role::GymOwner,
        }
    }
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(deserialize_with = "de_id")]
    pub user_id: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// The authenticated browser session.
///
/// Created by the server after a successful login and held by the client
/// for the tab's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub role: Option<Role>,
    pub access_token: String,
}

impl Session {
    #[must_use]
    pub fn from_login(login: LoginResponse, email: &str) -> Self {
        Self { user_id: login.user_id, email: email.to_owned(), role: login.role, access_token: login.token }
    }
}

// =============================================================================
// CLIENT CONFIG
// =============================================================================

/// Feature toggles exposed to the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default)]
    pub new_dashboard_layout: bool,
}

/// Runtime configuration the server hands to the browser (`GET /api/config`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,
    #[serde(default)]
    pub features: FeatureFlags,
}

fn default_geocoder_url() -> String {
    DEFAULT_GEOCODER_URL.to_owned()
}
