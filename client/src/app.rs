//! Root application component with routing and the auth provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    BOOKS, DATE_TIME, HOME, LINKS, NOTES, auth::AuthPage, books::BooksPage, date_time::DateTimePage,
    home::HomePage, links::LinksPage, notes::NotesPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context every gated page reads. The session starts
/// out loading; in the browser it settles once `/api/auth/me` answers.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.set(AuthState::resolved(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/homeboard.css"/>
        <Title text="Homeboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment(HOME.segment()) view=HomePage/>
                <Route path=StaticSegment(BOOKS.segment()) view=BooksPage/>
                <Route path=StaticSegment(LINKS.segment()) view=LinksPage/>
                <Route path=StaticSegment(NOTES.segment()) view=NotesPage/>
                <Route path=StaticSegment(DATE_TIME.segment()) view=DateTimePage/>
            </Routes>
        </Router>
    }
}
