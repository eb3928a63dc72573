//! Session Provider state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` from `App`. The dashboard route guard
//! and every backend call read it; only `resolve`, `sign_in`, `sign_out`,
//! and `expire` write it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gyms::Session;

/// Coarse auth status used by route guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Current session plus the flags the UI needs around it.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
    /// Set when a backend call reported the token as no longer valid.
    pub expired: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: None, loading: true, expired: false }
    }
}

impl SessionState {
    /// Apply the result of the initial `/api/auth/session` lookup.
    pub fn resolve(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.loading = false;
        self.expired = false;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.loading = false;
        self.expired = false;
    }

    /// Drop the session after the backend rejected its token.
    pub fn expire(&mut self) {
        if self.session.take().is_some() {
            self.expired = true;
        }
        self.loading = false;
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match (&self.session, self.loading) {
            (Some(_), _) => SessionStatus::Authenticated,
            (None, true) => SessionStatus::Loading,
            (None, false) => SessionStatus::Unauthenticated,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.email.as_str())
    }
}
