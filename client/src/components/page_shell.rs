//! Access-gated page shell shared by every signed-in route.
//!
//! ARCHITECTURE
//! ============
//! Pages declare a static `PageMeta` and pass their widget as children.
//! `GatedPage` reads the `AuthState` context and renders one of three
//! outputs (placeholder, nothing, or nav + header + widget) while
//! `install_unauth_redirect` handles the one-shot sign-in redirect.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::state::auth::AuthState;
use crate::util::auth::{GateView, gate_view, install_unauth_redirect};

/// Static route metadata for a gated page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    /// Absolute route path, e.g. `/books`.
    pub path: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl PageMeta {
    /// Path without the leading slash, as used by router segments.
    #[must_use]
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

/// Static title/subtitle block at the top of a page.
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <p class="page-header__subtitle">{subtitle}</p>
        </header>
    }
}

/// Render `children` only for an authenticated session.
///
/// While the session is loading a neutral placeholder is shown. Once it
/// settles without a user nothing is rendered and a single redirect to the
/// sign-in route is issued.
#[component]
pub fn GatedPage(meta: PageMeta, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let view_state = Memo::new(move |_| auth.with(gate_view));

    view! {
        <Title text=meta.title/>
        {move || match view_state.get() {
            GateView::Placeholder => {
                view! {
                    <div class="page-shell page-shell--loading" aria-busy="true">
                        <p class="page-shell__placeholder">"Loading..."</p>
                    </div>
                }
                    .into_any()
            }
            GateView::Empty => ().into_any(),
            GateView::Page => {
                view! {
                    <div class="page-shell">
                        <NavBar/>
                        <PageHeader title=meta.title subtitle=meta.subtitle/>
                        <main class="page-shell__body">{children()}</main>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_strips_leading_slash() {
        let meta = PageMeta { path: "/books", title: "Books", subtitle: "" };
        assert_eq!(meta.segment(), "books");
    }

    #[test]
    fn root_segment_is_empty() {
        let meta = PageMeta { path: "/", title: "Home", subtitle: "" };
        assert_eq!(meta.segment(), "");
    }
}
