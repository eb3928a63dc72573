//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! cheap to clone: settings and the backend client sit behind `Arc`, and the
//! cookie signing key is itself reference counted.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::config::Settings;
use crate::services::backend::{Backend, HttpTransport};
use crate::services::session;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub backend: Arc<Backend>,
    key: Key,
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let key = session::derive_key(&settings.session_secret);
        let backend = Backend::new(HttpTransport::new(), &settings.api_url);
        Self { settings: Arc::new(settings), backend: Arc::new(backend), key }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}
