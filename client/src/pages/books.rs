//! `/books` route.

use leptos::prelude::*;

use crate::components::books::Books;
use crate::components::page_shell::GatedPage;

#[component]
pub fn BooksPage() -> impl IntoView {
    view! {
        <GatedPage meta=super::BOOKS>
            <Books/>
        </GatedPage>
    }
}
