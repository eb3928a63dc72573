use super::*;
use gyms::Session;

#[test]
fn should_redirect_unauth_when_loaded_without_session() {
    let state = SessionState { session: None, loading: false, expired: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&SessionState::default()));
}

fn signed_in() -> SessionState {
    SessionState {
        session: Some(Session {
            user_id: "u1".to_owned(),
            email: "a@b.com".to_owned(),
            role: None,
            access_token: "tok".to_owned(),
        }),
        loading: false,
        expired: false,
    }
}

#[test]
fn should_not_redirect_when_session_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn expired_session_redirects_home() {
    let state = SessionState { session: None, loading: false, expired: true };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn expire_session_signs_out_and_flags_expiry() {
    // Signals need an active owner when `sandboxed-arenas` is enabled via
    // workspace feature unification (leptos_axum).
    leptos::prelude::Owner::new().with(|| {
        let session = RwSignal::new(signed_in());
        expire_session(session);
        let state = session.get_untracked();
        assert_eq!(state.session, None);
        assert!(state.expired);
        assert!(should_redirect_unauth(&state));
    });
}
