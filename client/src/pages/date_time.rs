//! `/datetime` route.

use leptos::prelude::*;

use crate::components::date_time::DateTime;
use crate::components::page_shell::GatedPage;

#[component]
pub fn DateTimePage() -> impl IntoView {
    view! {
        <GatedPage meta=super::DATE_TIME>
            <DateTime/>
        </GatedPage>
    }
}
