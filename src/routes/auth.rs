//! Auth routes: sign-in against the backend, session lookup, sign-out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::SignedCookieJar;
use gyms::{ApiError, Credentials, GymApi, Session, Transport};
use serde::Deserialize;

use crate::services::session;
use crate::state::AppState;

const MISSING_CREDENTIALS: &str = "Email and password required";
const INVALID_CREDENTIALS: &str = "Invalid credentials";
const AUTH_FAILED: &str = "Authentication failed";
const UNAUTHORIZED: &str = "Unauthorized";

/// JSON error body shared by every API route.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Why a sign-in attempt did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    MissingCredentials,
    /// The backend refused the credentials; carries its message.
    Rejected(String),
    /// The backend could not be reached, failed, or answered nonsense.
    Unavailable,
}

impl LoginFailure {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::Rejected(_) => StatusCode::UNAUTHORIZED,
            Self::Unavailable => StatusCode::BAD_GATEWAY,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::MissingCredentials => MISSING_CREDENTIALS,
            Self::Rejected(message) => message,
            Self::Unavailable => AUTH_FAILED,
        }
    }
}

impl From<ApiError> for LoginFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized { message } if message != UNAUTHORIZED => Self::Rejected(message),
            ApiError::Unauthorized { .. } => Self::Rejected(INVALID_CREDENTIALS.to_owned()),
            ApiError::Status { status, .. } if status >= 500 => Self::Unavailable,
            ApiError::Status { message, .. } => Self::Rejected(message),
            ApiError::Validation(_) => Self::MissingCredentials,
            ApiError::Transport(_) | ApiError::Decode(_) => Self::Unavailable,
        }
    }
}

/// Exchange credentials for a [`Session`] via the backend's `/login`.
///
/// Blank fields are rejected without contacting the backend.
///
/// # Errors
///
/// Returns a [`LoginFailure`] describing the HTTP answer to give the browser.
pub async fn authenticate<T: Transport>(api: &GymApi<T>, body: &LoginBody) -> Result<Session, LoginFailure> {
    let email = body.email.trim();
    if email.is_empty() || body.password.is_empty() {
        return Err(LoginFailure::MissingCredentials);
    }

    let credentials = Credentials { email: email.to_owned(), password: body.password.clone() };
    let login = api.login(&credentials).await?;
    Ok(Session::from_login(login, email))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: sign in and set the session cookie.
pub async fn login(State(state): State<AppState>, jar: SignedCookieJar, Json(body): Json<LoginBody>) -> Response {
    let session = match authenticate(state.backend.as_ref(), &body).await {
        Ok(session) => session,
        Err(failure) => {
            tracing::warn!(status = failure.status().as_u16(), reason = failure.message(), "login failed");
            return error_response(failure.status(), failure.message());
        }
    };

    let value = match session::encode_session(&session) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, "session encoding failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, AUTH_FAILED);
        }
    };

    tracing::info!(user_id = %session.user_id, "login succeeded");
    let jar = jar.add(session::session_cookie(value, state.settings.cookie_secure));
    (jar, Json(session)).into_response()
}

/// `GET /api/auth/session`: the session carried by the signed cookie.
pub async fn current_session(jar: SignedCookieJar) -> Response {
    match session::read_session(&jar) {
        Some(session) => Json(session).into_response(),
        None => error_response(StatusCode::UNAUTHORIZED, UNAUTHORIZED),
    }
}

/// `POST /api/auth/logout`: clear the session cookie.
pub async fn logout(jar: SignedCookieJar) -> impl IntoResponse {
    (jar.remove(session::removal_cookie()), StatusCode::NO_CONTENT)
}
