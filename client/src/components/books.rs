//! Reading-list widget: list, add, and remove books.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use leptos::prelude::*;

use crate::net::types::{Book, NewBook};

const TITLE_MAX_CHARS: usize = 200;
const AUTHOR_MAX_CHARS: usize = 200;

/// Trim and check the add-book form before it is sent.
///
/// A blank author is dropped rather than sent as an empty string.
pub fn validate_new_book(title: &str, author: &str) -> Result<NewBook, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter a title.");
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err("Title is too long.");
    }
    let author = author.trim();
    if author.chars().count() > AUTHOR_MAX_CHARS {
        return Err("Author is too long.");
    }
    Ok(NewBook {
        title: title.to_owned(),
        author: (!author.is_empty()).then(|| author.to_owned()),
    })
}

#[component]
pub fn Books() -> impl IntoView {
    let books = LocalResource::new(crate::net::api::fetch_books);
    let title = RwSignal::new(String::new());
    let author = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_new_book(&title.get_untracked(), &author.get_untracked()) {
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
            match crate::net::api::create_book(&input).await {
                Ok(_) => {
                    title.set(String::new());
                    author.set(String::new());
                    books.refetch();
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
            if let Err(e) = crate::net::api::delete_book(&id).await {
                error.set(Some(e));
            }
            books.refetch();
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <section class="widget widget--books">
            <form class="widget__form" on:submit=on_submit>
                <input
                    class="widget__input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    class="widget__input"
                    type="text"
                    placeholder="Author (optional)"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add book"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="widget__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Suspense fallback=move || view! { <p class="widget__status">"Loading books..."</p> }>
                {move || {
                    books
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="widget__empty">"No books yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="widget__list">
                                        {list.into_iter().map(|book| book_row(book, remove)).collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="widget__error">{format!("Could not load books: {e}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

fn book_row(book: Book, remove: Callback<String>) -> impl IntoView {
    let id = book.id;
    view! {
        <li class="widget__row">
            <span class="widget__primary">{book.title}</span>
            {book.author.map(|author| view! { <span class="widget__secondary">{author}</span> })}
            <button class="btn btn--ghost" on:click=move |_| remove.run(id.clone())>
                "Remove"
            </button>
        </li>
    }
}
