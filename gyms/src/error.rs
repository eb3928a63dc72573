//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every error is terminal for the action that produced it: the UI shows a
//! message and the user retries by hand. [`ApiError::Unauthorized`] is the
//! structured session-expiry signal; it is raised for HTTP 401 and, for
//! backends that only say so in the body, for a `message` of exactly
//! `"Unauthorized"`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use crate::transport::{ApiResponse, TransportError};
use crate::validate::ValidationError;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";

const UNAUTHORIZED: &str = "Unauthorized";

/// Failure of a backend operation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Local validation failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The token was rejected.
    #[error("{message}")]
    Unauthorized { message: String },

    /// Non-success HTTP status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// No response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A success response whose body could not be parsed.
    #[error("Invalid response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response.
    ///
    /// The `message` field of a JSON body wins; otherwise `fallback` is used.
    #[must_use]
    pub fn from_response(response: &ApiResponse, fallback: &str) -> Self {
        let message = response_message(&response.body);
        if response.status == 401 || message.as_deref() == Some(UNAUTHORIZED) {
            return Self::Unauthorized { message: message.unwrap_or_else(|| UNAUTHORIZED.to_owned()) };
        }
        Self::Status { status: response.status, message: message.unwrap_or_else(|| fallback.to_owned()) }
    }

    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status, when the backend answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Inline text for a failed `action` (e.g. `"create gym"`).
    #[must_use]
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::Unauthorized { .. } => SESSION_EXPIRED_MESSAGE.to_owned(),
            Self::Validation(rule) => rule.to_string(),
            Self::Status { message, .. } => format!("Failed to {action}: {message}"),
            Self::Decode(_) => format!("Failed to {action}: Invalid response from server"),
            Self::Transport(_) => UNEXPECTED_MESSAGE.to_owned(),
        }
    }
}

/// Extract a non-empty `message` string from a JSON error body.
#[must_use]
pub fn response_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}
