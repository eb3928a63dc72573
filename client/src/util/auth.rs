//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply the same redirect: once the session lookup has
//! finished and there is no session, go home. A token the backend rejects
//! ends the session here and on the server, so a reload cannot restore it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, SessionStatus};

#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.status() == SessionStatus::Unauthenticated
}

/// Redirect to `/` whenever the session has loaded and is absent.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// Drop a session the backend no longer accepts and clear its cookie.
pub fn expire_session(session: RwSignal<SessionState>) {
    session.update(SessionState::expire);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::net::api::logout());
}
