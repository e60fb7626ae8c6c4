//! Bookmarks widget: list, add, and remove links.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use leptos::prelude::*;

use crate::net::types::{Link, NewLink};

const LABEL_MAX_CHARS: usize = 200;
const URL_MAX_CHARS: usize = 2048;

fn is_web_url(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.get(..scheme.len()).is_some_and(|head| head.eq_ignore_ascii_case(scheme)))
}

/// Trim and check the add-link form before it is sent.
pub fn validate_new_link(label: &str, url: &str) -> Result<NewLink, &'static str> {
    let label = label.trim();
    let url = url.trim();
    if label.is_empty() || url.is_empty() {
        return Err("Enter both a label and a URL.");
    }
    if label.chars().count() > LABEL_MAX_CHARS {
        return Err("Label is too long.");
    }
    if url.chars().count() > URL_MAX_CHARS {
        return Err("URL is too long.");
    }
    if !is_web_url(url) {
        return Err("URL must start with http:// or https://.");
    }
    Ok(NewLink { label: label.to_owned(), url: url.to_owned() })
}

#[component]
pub fn Links() -> impl IntoView {
    let links = LocalResource::new(crate::net::api::fetch_links);
    let label = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_new_link(&label.get_untracked(), &url.get_untracked()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_link(&input).await {
                Ok(_) => {
                    label.set(String::new());
                    url.set(String::new());
                    links.refetch();
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = input;
    };

    let remove = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::delete_link(&id).await {
                error.set(Some(e));
            }
            links.refetch();
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <section class="widget widget--links">
            <form class="widget__form" on:submit=on_submit>
                <input
                    class="widget__input"
                    type="text"
                    placeholder="Label"
                    prop:value=move || label.get()
                    on:input=move |ev| label.set(event_target_value(&ev))
                />
                <input
                    class="widget__input"
                    type="url"
                    placeholder="https://"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add link"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="widget__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Suspense fallback=move || view! { <p class="widget__status">"Loading links..."</p> }>
                {move || {
                    links
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="widget__empty">"No links yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="widget__list">
                                        {list.into_iter().map(|link| link_row(link, remove)).collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="widget__error">{format!("Could not load links: {e}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

fn link_row(link: Link, remove: Callback<String>) -> impl IntoView {
    let id = link.id;
    view! {
        <li class="widget__row">
            <a class="widget__primary" href=link.url target="_blank" rel="noopener noreferrer">
                {link.label}
            </a>
            <button class="btn btn--ghost" on:click=move |_| remove.run(id.clone())>
                "Remove"
            </button>
        </li>
    }
}
