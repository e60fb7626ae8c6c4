//! Landing route: the clock plus a card for every other page.

use leptos::prelude::*;

use crate::components::date_time::DateTime;
use crate::components::page_shell::GatedPage;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <GatedPage meta=super::HOME>
            <DateTime/>
            <div class="home-grid">
                {super::NAV_PAGES
                    .iter()
                    .filter(|page| page.path != super::HOME.path)
                    .map(|page| {
                        view! {
                            <a class="home-card" href=page.path>
                                <h2 class="home-card__title">{page.title}</h2>
                                <p class="home-card__subtitle">{page.subtitle}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </GatedPage>
    }
}
