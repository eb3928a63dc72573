//! Shared gym/turnstile wire schema and backend client.
//!
//! This crate owns everything both the `gymdesk` server and the Leptos
//! `client` need to agree on: the JSON shapes of the external backend, the
//! client-side validation rules for gym records, the error taxonomy, and a
//! transport-agnostic REST client. It compiles for native targets and for
//! `wasm32` so the browser and the server share one implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns persistence, token issuance, and QR payload generation.
//! Everything here is request shaping and response interpretation.

pub mod api;
pub mod error;
pub mod geocode;
pub mod qr;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transport;
pub mod types;
pub mod validate;

pub use api::{GymApi, PAGE_SIZE};
pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};
pub use types::{
    ClientConfig, Credentials, FeatureFlags, Gym, GymDraft, LoginResponse, Role, Session, SignupRequest, SortOrder,
    Turnstile,
};
pub use validate::{GymFields, ValidationError};
