//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the shared route guard; `tiles` holds the map selector's
//! Web-Mercator math so it can be tested natively.

pub mod auth;
pub mod tiles;
