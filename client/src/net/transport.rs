//! `gloo-net` implementation of the backend transport.

use async_trait::async_trait;
use gloo_net::http::Request;
use gyms::{ApiRequest, ApiResponse, Method, Transport, TransportError};

/// Sends backend requests with the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let mut builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        if let Some(auth) = request.authorization() {
            builder = builder.header("Authorization", &auth);
        }

        let sent = match &request.body {
            Some(body) => builder.json(body).map_err(|e| TransportError(e.to_string()))?.send().await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
        Ok(ApiResponse::new(status, body))
    }
}
