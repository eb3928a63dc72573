//! In-memory [`Transport`] for tests.
//!
//! Records every request and replays scripted responses in order. When the
//! script runs out, `send` fails with a [`TransportError`].

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use crate::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};

#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
}

impl RecordingTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: Value) -> &Self {
        self.push(Ok(ApiResponse::new(status, body.to_string())))
    }

    /// Queue a response with a raw text body.
    pub fn push_text(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(ApiResponse::new(status, body)))
    }

    /// Queue a network failure.
    pub fn push_network_error(&self, message: &str) -> &Self {
        self.push(Err(TransportError(message.to_owned())))
    }

    fn push(&self, response: Result<ApiResponse, TransportError>) -> &Self {
        self.responses.lock().unwrap_or_else(std::sync::PoisonError::into_inner).push_back(response);
        self
    }

    /// Snapshot of every request sent so far.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }

    /// Number of requests sent with `method` whose URL ends with `path`.
    #[must_use]
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests().iter().filter(|r| r.method == method && r.url.ends_with(path)).count()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap_or_else(std::sync::PoisonError::into_inner).push(request);
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}
