//! Live clock widget.
//!
//! The server has no viewer clock, so SSR renders `EMPTY_TIME`; the browser
//! fills in the real reading after hydration and ticks once a second.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::clock::{ClockReading, EMPTY_TIME};

#[component]
pub fn DateTime() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let reading = RwSignal::new(None::<ClockReading>);

    // Started from an effect so the first browser reading lands after
    // hydration and matches the server-rendered placeholder.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        reading.set(Some(crate::util::clock::now()));
        match leptos::leptos_dom::helpers::set_interval_with_handle(
            move || reading.set(Some(crate::util::clock::now())),
            std::time::Duration::from_secs(1),
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("clock interval unavailable: {e:?}"),
        }
    });

    let greeting = move || {
        let name = auth.with(|state| state.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
        let salutation = reading.get().map_or("Hello", |r| r.greeting());
        if name.is_empty() { salutation.to_owned() } else { format!("{salutation}, {name}") }
    };

    view! {
        <section class="widget widget--datetime">
            <p class="widget__greeting">{greeting}</p>
            <p class="widget__clock">{move || reading.get().map_or_else(|| EMPTY_TIME.to_owned(), |r| r.time_label())}</p>
            <p class="widget__date">{move || reading.get().map(|r| r.date_label()).unwrap_or_default()}</p>
        </section>
    }
}
