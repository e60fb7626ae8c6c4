use super::*;
use crate::net::types::User;

fn user(id: &str) -> User {
    User { id: id.to_owned(), name: "Alice".to_owned(), email: "alice@example.com".to_owned() }
}

fn loading() -> AuthState {
    AuthState { user: None, loading: true }
}

fn signed_out() -> AuthState {
    AuthState { user: None, loading: false }
}

fn signed_in(id: &str) -> AuthState {
    AuthState { user: Some(user(id)), loading: false }
}

/// Feed states through the gate the way a page does and record what it
/// rendered and where it navigated.
fn run_gate(states: &[AuthState]) -> (Vec<GateView>, Vec<&'static str>) {
    let mut guard = RedirectGuard::default();
    let mut views = Vec::new();
    let mut redirects = Vec::new();
    for state in states {
        views.push(gate_view(state));
        if guard.observe(state) {
            redirects.push(SIGN_IN_ROUTE);
        }
    }
    (views, redirects)
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&signed_out()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&loading()));
    let stale = AuthState { user: Some(user("u1")), loading: true };
    assert!(!should_redirect_unauth(&stale));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in("u1")));
}

// =============================================================
// gate_view
// =============================================================

#[test]
fn loading_renders_placeholder_regardless_of_user() {
    assert_eq!(gate_view(&loading()), GateView::Placeholder);
    let stale = AuthState { user: Some(user("u1")), loading: true };
    assert_eq!(gate_view(&stale), GateView::Placeholder);
}

#[test]
fn unauthenticated_renders_nothing() {
    assert_eq!(gate_view(&signed_out()), GateView::Empty);
}

#[test]
fn authenticated_renders_page() {
    assert_eq!(gate_view(&signed_in("u1")), GateView::Page);
}

// =============================================================
// RedirectGuard
// =============================================================

#[test]
fn loading_never_redirects() {
    let (_, redirects) = run_gate(&[loading(), loading(), loading()]);
    assert!(redirects.is_empty());
}

#[test]
fn unauthenticated_redirects_exactly_once() {
    let (_, redirects) = run_gate(&[signed_out()]);
    assert_eq!(redirects, vec!["/auth"]);
}

#[test]
fn repeated_unauthenticated_reads_redirect_at_most_once() {
    let (views, redirects) = run_gate(&[signed_out(), signed_out(), signed_out(), signed_out()]);
    assert_eq!(redirects.len(), 1);
    assert!(views.iter().all(|v| *v == GateView::Empty));
}

#[test]
fn reload_after_redirect_does_not_navigate_again() {
    // Session re-resolves (loading) and settles unauthenticated again while the
    // first navigation is still in flight.
    let (_, redirects) = run_gate(&[signed_out(), loading(), signed_out()]);
    assert_eq!(redirects.len(), 1);
}

#[test]
fn authenticated_never_redirects() {
    let (views, redirects) = run_gate(&[signed_in("u1"), signed_in("u1")]);
    assert!(redirects.is_empty());
    assert_eq!(views, vec![GateView::Page, GateView::Page]);
}

#[test]
fn sign_out_after_authentication_redirects_again() {
    let (_, redirects) = run_gate(&[signed_out(), signed_in("u1"), signed_out()]);
    assert_eq!(redirects.len(), 2);
}

#[test]
fn guard_reports_in_flight_after_firing() {
    let mut guard = RedirectGuard::default();
    assert!(!guard.in_flight());
    assert!(guard.observe(&signed_out()));
    assert!(guard.in_flight());
    assert!(!guard.observe(&signed_in("u1")));
    assert!(!guard.in_flight());
}

// =============================================================
// Scenario: loading -> unauthenticated -> authenticated
// =============================================================

#[test]
fn loading_then_signed_out_then_signed_in() {
    let mut guard = RedirectGuard::default();
    let mut redirects = 0;

    let state = loading();
    assert_eq!(gate_view(&state), GateView::Placeholder);
    if guard.observe(&state) {
        redirects += 1;
    }
    assert_eq!(redirects, 0);

    let state = signed_out();
    assert_eq!(gate_view(&state), GateView::Empty);
    if guard.observe(&state) {
        redirects += 1;
    }
    assert_eq!(redirects, 1);

    let state = signed_in("u1");
    assert_eq!(gate_view(&state), GateView::Page);
    let before = redirects;
    if guard.observe(&state) {
        redirects += 1;
    }
    assert_eq!(redirects - before, 0);
}

// =============================================================
// Effect wiring: install_unauth_redirect / install_signed_in_redirect
// =============================================================

mod effects {
    use std::cell::RefCell;
    use std::rc::Rc;

    use any_spawner::Executor;
    use leptos::prelude::{RwSignal, Set};
    use leptos_router::NavigateOptions;
    use reactive_graph::owner::Owner;
    use tokio::task::LocalSet;

    use super::*;

    type Calls = Rc<RefCell<Vec<String>>>;

    fn recorder() -> (Calls, impl Fn(&str, NavigateOptions) + Clone + 'static) {
        let calls: Calls = Rc::default();
        let sink = Rc::clone(&calls);
        (calls, move |path: &str, _opts: NavigateOptions| sink.borrow_mut().push(path.to_owned()))
    }

    async fn settle() {
        for _ in 0..3 {
            Executor::tick().await;
        }
    }

    fn recorded(calls: &Calls) -> Vec<String> {
        calls.borrow().clone()
    }

    #[tokio::test]
    async fn unauth_redirect_effect_fires_once_per_sign_out() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let auth = RwSignal::new(AuthState::default());
                let (calls, navigate) = recorder();
                install_unauth_redirect(auth, navigate);

                settle().await;
                assert!(recorded(&calls).is_empty(), "loading must not navigate");

                auth.set(signed_out());
                settle().await;
                assert_eq!(recorded(&calls), vec![SIGN_IN_ROUTE]);

                // Same state again re-runs the effect without a second push.
                auth.set(signed_out());
                settle().await;
                auth.set(loading());
                settle().await;
                auth.set(signed_out());
                settle().await;
                assert_eq!(recorded(&calls), vec![SIGN_IN_ROUTE]);

                auth.set(signed_in("u1"));
                settle().await;
                assert_eq!(recorded(&calls).len(), 1, "authenticated must not navigate");

                auth.set(signed_out());
                settle().await;
                assert_eq!(recorded(&calls), vec![SIGN_IN_ROUTE, SIGN_IN_ROUTE]);
            })
            .await;
    }

    #[tokio::test]
    async fn unauth_redirect_effect_follows_loading_signed_out_signed_in() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let auth = RwSignal::new(AuthState::default());
                let (calls, navigate) = recorder();
                install_unauth_redirect(auth, navigate);
                settle().await;
                assert!(recorded(&calls).is_empty());

                auth.set(signed_out());
                settle().await;
                assert_eq!(recorded(&calls), vec![SIGN_IN_ROUTE]);

                auth.set(signed_in("u1"));
                settle().await;
                assert_eq!(recorded(&calls), vec![SIGN_IN_ROUTE]);
            })
            .await;
    }

    #[tokio::test]
    async fn signed_in_redirect_sends_home_once() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let auth = RwSignal::new(AuthState::default());
                let (calls, navigate) = recorder();
                install_signed_in_redirect(auth, navigate);
                settle().await;
                assert!(recorded(&calls).is_empty());

                auth.set(signed_in("u1"));
                settle().await;
                auth.set(signed_in("u1"));
                settle().await;
                assert_eq!(recorded(&calls), vec![HOME_ROUTE]);
            })
            .await;
    }
}
