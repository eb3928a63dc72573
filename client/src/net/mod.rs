//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the dashboard server (session, config) and builds backend
//! clients; `transport` is the browser implementation of the shared
//! [`gyms::Transport`] seam.

pub mod api;
#[cfg(feature = "hydrate")]
pub mod transport;
