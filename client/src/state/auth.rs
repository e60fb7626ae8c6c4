//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as an `RwSignal<AuthState>` context. Route guards
//! and user-aware components read it; only `App` (session resolution) and the
//! sign-out action write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Starts in `loading` because the session is resolved asynchronously after
/// the first render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Settled state after session resolution. `None` means unauthenticated.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    /// Tri-state view of the session. `loading` wins over any stale `user`.
    #[must_use]
    pub fn session(&self) -> SessionState<'_> {
        if self.loading {
            return SessionState::Loading;
        }
        match &self.user {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Unauthenticated,
        }
    }
}

/// Resolution status of the viewer's session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState<'a> {
    Loading,
    Authenticated(&'a User),
    Unauthenticated,
}
