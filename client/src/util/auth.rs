//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated route applies identical render and redirect behavior, driven
//! by the `AuthState` context:
//!
//! | session           | renders      | navigation                 |
//! |-------------------|--------------|----------------------------|
//! | loading           | placeholder  | none                       |
//! | unauthenticated   | nothing      | one push to `/auth`        |
//! | authenticated     | header+widget| none                       |
//!
//! The render decision and the redirect decision are plain functions over
//! `AuthState` so they can be tested without a reactive runtime; the Leptos
//! wiring lives in `install_unauth_redirect` and `components::page_shell`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, SessionState};

/// Route of the sign-in page.
pub const SIGN_IN_ROUTE: &str = "/auth";
/// Where the sign-in page sends an already-authenticated visitor.
pub const HOME_ROUTE: &str = "/";

/// What a gated page renders for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Neutral loading placeholder; no widget.
    Placeholder,
    /// Empty output while the sign-in redirect is pending.
    Empty,
    /// Page header followed by the bound widget.
    Page,
}

#[must_use]
pub fn gate_view(state: &AuthState) -> GateView {
    match state.session() {
        SessionState::Loading => GateView::Placeholder,
        SessionState::Unauthenticated => GateView::Empty,
        SessionState::Authenticated(_) => GateView::Page,
    }
}

/// `true` once auth has settled and no user is present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.session() == SessionState::Unauthenticated
}

/// Edge detector for the unauthenticated redirect.
///
/// `observe` returns `true` only on the first observation of an
/// unauthenticated session. Further unauthenticated or loading observations
/// return `false` while the redirect is in flight; an authenticated
/// observation re-arms the guard so a later sign-out redirects again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectGuard {
    in_flight: bool,
}

impl RedirectGuard {
    pub fn observe(&mut self, state: &AuthState) -> bool {
        match state.session() {
            SessionState::Loading => false,
            SessionState::Authenticated(_) => {
                self.in_flight = false;
                false
            }
            SessionState::Unauthenticated => !std::mem::replace(&mut self.in_flight, true),
        }
    }

    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

/// Redirect to `/auth` when auth settles with no user present.
///
/// The effect runs after the render for the new state has committed. Its
/// previous value carries the `RedirectGuard`, so repeated reads of the same
/// unauthenticated state never navigate twice.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move |prev: Option<RedirectGuard>| {
        let mut guard = prev.unwrap_or_default();
        if auth.with(|state| guard.observe(state)) {
            navigate(SIGN_IN_ROUTE, NavigateOptions::default());
        }
        guard
    });
}

/// Send an already signed-in visitor from the sign-in page to `/`.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move |prev: Option<bool>| {
        let already_sent = prev.unwrap_or(false);
        let signed_in = auth.with(|state| matches!(state.session(), SessionState::Authenticated(_)));
        if signed_in && !already_sent {
            navigate(HOME_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        already_sent || signed_in
    });
}
