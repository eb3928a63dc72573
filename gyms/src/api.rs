//! REST client for the external gym backend.
//!
//! One method per backend endpoint. Each call issues exactly one request,
//! attaches the bearer token when one is set, and turns non-success
//! responses into [`ApiError`] using the body's `message` field.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::types::{Credentials, Gym, GymDraft, GymPage, LoginResponse, SignupRequest, SortOrder, Turnstile, TurnstileList};

/// Page size the backend uses for `GET /user/gyms`.
///
/// The backend does not report a total, so a full page is the only hint
/// that another page may exist.
pub const PAGE_SIZE: usize = 20;

/// Percent-encode one path segment (RFC 3986 unreserved characters pass through).
fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn gyms_path() -> String {
    "/gyms".to_owned()
}

fn gym_path(gym_id: &str) -> String {
    format!("/gyms/{}", encode_segment(gym_id))
}

fn gym_turnstiles_path(gym_id: &str) -> String {
    format!("/gyms/{}/turnstiles", encode_segment(gym_id))
}

fn turnstile_path(turnstile_id: &str) -> String {
    format!("/turnstiles/{}", encode_segment(turnstile_id))
}

/// Backend client bound to a base URL and, after sign-in, a bearer token.
pub struct GymApi<T> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl<T: Transport> GymApi<T> {
    #[must_use]
    pub fn new(transport: T, base_url: &str) -> Self {
        Self { transport, base_url: base_url.trim_end_matches('/').to_owned(), token: None }
    }

    /// Attach the session's bearer token to every subsequent request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, format!("{}{path}", self.base_url)).bearer(self.token.as_deref())
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method.as_str();
        let url = request.url.clone();
        tracing::debug!(method, %url, "backend request");
        match self.transport.send(request).await {
            Ok(response) => {
                if !response.is_ok() {
                    tracing::warn!(method, %url, status = response.status, "backend request rejected");
                }
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(method, %url, error = %e, "backend request failed");
                Err(e.into())
            }
        }
    }

    /// Exchange credentials for a token (`POST /login`).
    ///
    /// # Errors
    ///
    /// Returns the backend's message (or "Invalid credentials") on rejection.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let body = to_json(credentials)?;
        let request = ApiRequest::new(Method::Post, format!("{}/login", self.base_url)).json(body);
        let response = self.send(request).await?;
        if !response.is_ok() {
            return Err(ApiError::from_response(&response, "Invalid credentials"));
        }
        decode(&response)
    }

    /// Create an account (`POST /signup`).
    ///
    /// # Errors
    ///
    /// Returns the backend's message on rejection and [`ApiError::Decode`]
    /// when a success body is not JSON.
    pub async fn signup(&self, signup: &SignupRequest) -> Result<(), ApiError> {
        let body = to_json(signup)?;
        let request = ApiRequest::new(Method::Post, format!("{}/signup", self.base_url)).json(body);
        let response = self.send(request).await?;
        if !response.is_ok() {
            let fallback = format!("Registration failed with status {}", response.status);
            return Err(ApiError::from_response(&response, &fallback));
        }
        if response.body.trim().is_empty() {
            return Ok(());
        }
        decode::<Value>(&response).map(|_| ())
    }

    /// Fetch one page of the owner's gyms (`GET /user/gyms?page=&sort=`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-success response or unparseable body.
    pub async fn list_gyms(&self, page: u32, sort: SortOrder) -> Result<Vec<Gym>, ApiError> {
        let request = self
            .request(Method::Get, "/user/gyms")
            .query("page", page.to_string())
            .query("sort", sort.as_query());
        let response = self.send(request).await?;
        if !response.is_ok() {
            return Err(ApiError::from_response(&response, "Failed to fetch gyms"));
        }
        decode::<GymPage>(&response).map(GymPage::into_vec)
    }

    /// Create a gym (`POST /gyms`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-success response or unparseable body.
    pub async fn create_gym(&self, draft: &GymDraft) -> Result<Gym, ApiError> {
        let request = self.request(Method::Post, &gyms_path()).json(to_json(draft)?);
        let response = self.send(request).await?;
        if !response.is_ok() {
            return Err(ApiError::from_response(&response, "Failed to create gym"));
        }
        decode_wrapped(&response, "gym")
    }

    /// Replace a gym's fields (`PUT /gyms/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-success response or unparseable body.
    pub async fn update_gym(&self, gym_id: &str, draft: &GymDraft) -> Result<Gym, ApiError> {
        let request = self.request(Method::Put, &gym_path(gym_id)).json(to_json(draft)?);
        let response = self.send(request).await?;
        if !response.is_ok() {
            return Err(ApiError::from_response(&response, "Failed to update gym"));
        }
        decode_wrapped(&response, "gym")
    }

    /// Delete a gym (`DELETE /gyms/{id}`). Only `204 No Content` counts as success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any status other than 204.
    pub async fn delete_gym(&self, gym_id: &str) -> Result<(), ApiError> {
        let response = self.send(self.request(Method::Delete, &gym_path(gym_id))).await?;
        if response.status == 204 {
            return Ok(());
        }
        let fallback = format!("Failed to delete gym. Status: {}", response.status);
        Err(ApiError::from_response(&response, &fallback))
    }

    /// List a gym's turnstiles (`GET /gyms/{id}/turnstiles?sort=`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-success response or unparseable body.
    pub async fn list_turnstiles(&self, gym_id: &str, sort: SortOrder) -> Result<Vec<Turnstile>, ApiError> {
        let request = self.request(Method::Get, &gym_turnstiles_path(gym_id)).query("sort", sort.as_query());
        let response = self.send(request).await?;
        if !response.is_ok() {
            return Err(ApiError::from_response(&response, "Failed to fetch turnstiles"));
        }
        decode::<TurnstileList>(&response).map(TurnstileList::into_vec)
    }

    /// Create a turnstile (`POST /gyms/{id}/turnstiles` with an empty object body).
    ///
    /// The backend assigns the id and QR payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-success response or unparseable body.
    pub async fn create_turnstile(&self, gym_id: &str) -> Result<Turnstile, ApiError> {
        let request = self
            .request(Method::Post, &gym_turnstiles_path(gym_id))
            .json(Value::Object(serde_json::Map::new()));
        let response = self.send(request).await?;
        if !response.is_ok() {
            let fallback = format!("Failed to add turnstile. Status: {}", response.status);
            return Err(ApiError::from_response(&response, &fallback));
        }
        decode_wrapped(&response, "turnstile")
    }

    /// Delete a turnstile (`DELETE /turnstiles/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-success response.
    pub async fn delete_turnstile(&self, turnstile_id: &str) -> Result<(), ApiError> {
        let response = self.send(self.request(Method::Delete, &turnstile_path(turnstile_id))).await?;
        if !response.is_ok() {
            return Err(ApiError::from_response(&response, "Failed to delete turnstile"));
        }
        Ok(())
    }
}

fn to_json<S: serde::Serialize>(value: &S) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a single record that may arrive bare or under `field`.
fn decode_wrapped<D: DeserializeOwned>(response: &ApiResponse, field: &str) -> Result<D, ApiError> {
    let mut value: Value = decode(response)?;
    if value.get(field).is_some_and(Value::is_object) {
        value = value[field].take();
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
