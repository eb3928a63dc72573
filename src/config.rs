//! Server configuration parsed from environment variables.
//!
//! Read once at startup. `.env` is loaded by `main` before this runs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use gyms::geocode::DEFAULT_GEOCODER_URL;
use gyms::{ClientConfig, FeatureFlags};

pub const DEFAULT_PORT: u16 = 3000;

/// Shortest accepted cookie signing secret.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("GYMDESK_SESSION_SECRET must be at least {MIN_SECRET_LEN} characters")]
    SecretTooShort,
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the external gym backend.
    pub api_url: String,
    pub session_secret: String,
    pub geocoder_url: String,
    /// `GYMDESK_ENABLE_NEW_DASHBOARD`
    pub new_dashboard: bool,
    pub port: u16,
    pub cookie_secure: bool,
}

impl Settings {
    /// Build settings from the process environment.
    ///
    /// Required:
    /// - `GYMDESK_API_URL`
    /// - `GYMDESK_SESSION_SECRET` (at least 32 characters)
    ///
    /// Optional:
    /// - `GYMDESK_ENABLE_NEW_DASHBOARD`: boolean, default off
    /// - `GYMDESK_GEOCODER_URL`: default Nominatim
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: boolean, default off
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`Settings::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = required(&lookup, "GYMDESK_API_URL")?.trim_end_matches('/').to_owned();

        let session_secret = required(&lookup, "GYMDESK_SESSION_SECRET")?;
        if session_secret.chars().count() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort);
        }

        let geocoder_url = lookup("GYMDESK_GEOCODER_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_owned());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_url,
            session_secret,
            geocoder_url,
            new_dashboard: lookup("GYMDESK_ENABLE_NEW_DASHBOARD").as_deref().and_then(parse_bool).unwrap_or(false),
            port,
            cookie_secure: lookup("COOKIE_SECURE").as_deref().and_then(parse_bool).unwrap_or(false),
        })
    }

    /// The subset of configuration the browser is allowed to see.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_url.clone(),
            geocoder_url: self.geocoder_url.clone(),
            features: FeatureFlags { new_dashboard_layout: self.new_dashboard },
        }
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<String, ConfigError> {
    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

