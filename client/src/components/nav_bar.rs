//! Top navigation with page links, the signed-in user, and sign-out.

use leptos::prelude::*;

use crate::pages::NAV_PAGES;
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signing_out = RwSignal::new(false);

    let user_name = move || auth.with(|state| state.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    // Resolving the session to "no user" is enough: the page gate sees the
    // transition and redirects to the sign-in route.
    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.set(AuthState::resolved(None));
        });
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Homeboard"</a>
            <ul class="nav-bar__links">
                {NAV_PAGES
                    .iter()
                    .map(|meta| {
                        view! {
                            <li>
                                <a href=meta.path class="nav-bar__link">{meta.title}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <span class="nav-bar__user">{user_name}</span>
            <button class="btn btn--ghost" on:click=on_sign_out disabled=move || signing_out.get()>
                "Sign out"
            </button>
        </nav>
    }
}
