//! Address search against a Nominatim-compatible geocoder.
//!
//! DESIGN
//! ======
//! Every search takes an explicit [`CancelToken`]. The caller cancels the
//! previous token on each keystroke and when the map selector goes away, so
//! a slow response can never overwrite newer suggestions. Debouncing is the
//! caller's job: wait [`DEBOUNCE_MS`], then search only if the token is still
//! live.

#[cfg(test)]
#[path = "geocode_test.rs"]
mod geocode_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::transport::{ApiRequest, Method, Transport};

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_CHARS: usize = 3;

/// Quiet period after the last keystroke before a search is issued.
pub const DEBOUNCE_MS: u32 = 350;

/// Map center used when a form has no coordinates yet (São Paulo).
pub const DEFAULT_CENTER: Coordinates = Coordinates { lat: -23.5505, lng: -46.6333 };

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && self.lat.abs() <= 90.0 && self.lng.abs() <= 180.0
    }
}

/// One geocoder hit. Coordinates arrive as strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub place_id: u64,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl Suggestion {
    /// Parsed coordinates, or `None` when the geocoder sent junk.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        let lat = self.lat.trim().parse().ok()?;
        let lng = self.lon.trim().parse().ok()?;
        Some(Coordinates::new(lat, lng)).filter(|c| c.is_valid())
    }
}

/// Shared cancellation flag for one search.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeocodeError {
    #[error("search cancelled")]
    Cancelled,
    #[error("Failed to fetch location suggestions: {0}")]
    Failed(String),
}

/// Whether `query` is long enough to search for.
#[must_use]
pub fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

/// Geocoder client bound to a base URL.
pub struct Geocoder<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> Geocoder<T> {
    #[must_use]
    pub fn new(transport: T, base_url: &str) -> Self {
        Self { transport, base_url: base_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Look up address suggestions for `query`.
    ///
    /// Short queries return an empty list without a request.
    ///
    /// # Errors
    ///
    /// [`GeocodeError::Cancelled`] if `cancel` fired before the request or
    /// before the response was applied; [`GeocodeError::Failed`] otherwise.
    pub async fn search(&self, query: &str, cancel: &CancelToken) -> Result<Vec<Suggestion>, GeocodeError> {
        if cancel.is_cancelled() {
            return Err(GeocodeError::Cancelled);
        }
        if !should_search(query) {
            return Ok(Vec::new());
        }

        let request = ApiRequest::new(Method::Get, format!("{}/search", self.base_url))
            .query("q", query.trim())
            .query("format", "json");
        let result = self.transport.send(request).await;
        if cancel.is_cancelled() {
            tracing::debug!("discarding cancelled geocoder response");
            return Err(GeocodeError::Cancelled);
        }

        let response = result.map_err(|e| GeocodeError::Failed(e.to_string()))?;
        if !response.is_ok() {
            return Err(GeocodeError::Failed(format!("status {}", response.status)));
        }
        serde_json::from_str(&response.body).map_err(|e| GeocodeError::Failed(e.to_string()))
    }
}
