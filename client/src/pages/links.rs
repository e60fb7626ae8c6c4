//! `/links` route.

use leptos::prelude::*;

use crate::components::links::Links;
use crate::components::page_shell::GatedPage;

#[component]
pub fn LinksPage() -> impl IntoView {
    view! {
        <GatedPage meta=super::LINKS>
            <Links/>
        </GatedPage>
    }
}
