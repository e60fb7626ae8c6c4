//! `/notes` route.

use leptos::prelude::*;

use crate::components::notes::Notes;
use crate::components::page_shell::GatedPage;

#[component]
pub fn NotesPage() -> impl IntoView {
    view! {
        <GatedPage meta=super::NOTES>
            <Notes/>
        </GatedPage>
    }
}
