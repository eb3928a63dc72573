use super::*;
use gyms::Role;

fn session() -> Session {
    Session {
        user_id: "u1".to_owned(),
        email: "owner@example.com".to_owned(),
        role: Some(Role::GymOwner),
        access_token: "tok".to_owned(),
    }
}

#[test]
fn default_is_loading() {
    let state = SessionState::default();
    assert_eq!(state.status(), SessionStatus::Loading);
    assert_eq!(state.token(), None);
}

#[test]
fn resolve_without_session_is_unauthenticated() {
    let mut state = SessionState::default();
    state.resolve(None);
    assert_eq!(state.status(), SessionStatus::Unauthenticated);
    assert!(!state.expired);
}

#[test]
fn sign_in_exposes_token_and_clears_expiry() {
    let mut state = SessionState { session: None, loading: false, expired: true };
    state.sign_in(session());
    assert_eq!(state.status(), SessionStatus::Authenticated);
    assert_eq!(state.token(), Some("tok"));
    assert_eq!(state.email(), Some("owner@example.com"));
    assert!(!state.expired);
}

#[test]
fn expire_drops_session_and_flags_it() {
    let mut state = SessionState::default();
    state.sign_in(session());
    state.expire();
    assert_eq!(state.status(), SessionStatus::Unauthenticated);
    assert!(state.expired);
}

#[test]
fn expire_without_session_does_not_flag() {
    let mut state = SessionState::default();
    state.resolve(None);
    state.expire();
    assert!(!state.expired);
}

#[test]
fn sign_out_is_not_expiry() {
    let mut state = SessionState::default();
    state.sign_in(session());
    state.sign_out();
    assert_eq!(state.status(), SessionStatus::Unauthenticated);
    assert!(!state.expired);
}
