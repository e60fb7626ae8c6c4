use super::*;

fn user(id: &str) -> User {
    User { id: id.to_owned(), name: "Reader".to_owned(), email: "reader@example.com".to_owned() }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.session(), SessionState::Loading);
}

// =============================================================
// session()
// =============================================================

#[test]
fn resolved_with_user_is_authenticated() {
    let u = user("u1");
    let state = AuthState::resolved(Some(u.clone()));
    assert_eq!(state.session(), SessionState::Authenticated(&u));
}

#[test]
fn resolved_without_user_is_unauthenticated() {
    assert_eq!(AuthState::resolved(None).session(), SessionState::Unauthenticated);
}

#[test]
fn loading_takes_precedence_over_stale_user() {
    let state = AuthState { user: Some(user("u1")), loading: true };
    assert_eq!(state.session(), SessionState::Loading);
}
