//! Notes widget: list, add, edit in place, and remove free-form notes.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use leptos::prelude::*;

use crate::net::types::{Note, NoteInput};

const BODY_MAX_CHARS: usize = 10_000;

/// Check a note body before it is sent. Inner whitespace is preserved; only
/// the outer edges are trimmed.
pub fn validate_note(body: &str) -> Result<NoteInput, &'static str> {
    let body = body.trim();
    if body.is_empty() {
        return Err("Write something first.");
    }
    if body.chars().count() > BODY_MAX_CHARS {
        return Err("Note is too long.");
    }
    Ok(NoteInput { body: body.to_owned() })
}

/// First line of a note, for the collapsed list view.
pub fn note_preview(body: &str) -> &str {
    body.lines().next().unwrap_or_default()
}

#[derive(Clone, Copy)]
struct NoteActions {
    editing: RwSignal<Option<String>>,
    draft: RwSignal<String>,
    save: Callback<String>,
    remove: Callback<String>,
}

#[component]
pub fn Notes() -> impl IntoView {
    let notes = LocalResource::new(crate::net::api::fetch_notes);
    let body = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);
    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_note(&body.get_untracked()) {
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
            match crate::net::api::create_note(&input).await {
                Ok(_) => {
                    body.set(String::new());
                    notes.refetch();
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = input;
    };

    let save = Callback::new(move |id: String| {
        let input = match validate_note(&draft.get_untracked()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_note(&id, &input).await {
                Ok(_) => {
                    editing.set(None);
                    notes.refetch();
                }
                Err(e) => error.set(Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, input);
    });

    let remove = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::delete_note(&id).await {
                error.set(Some(e));
            }
            notes.refetch();
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let actions = NoteActions { editing, draft, save, remove };

    view! {
        <section class="widget widget--notes">
            <form class="widget__form widget__form--stacked" on:submit=on_submit>
                <textarea
                    class="widget__input widget__input--area"
                    rows="3"
                    placeholder="New note"
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add note"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="widget__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Suspense fallback=move || view! { <p class="widget__status">"Loading notes..."</p> }>
                {move || {
                    notes
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="widget__empty">"No notes yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="widget__list">
                                        {list.into_iter().map(|note| note_row(note, actions)).collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="widget__error">{format!("Could not load notes: {e}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

fn note_row(note: Note, actions: NoteActions) -> impl IntoView {
    let NoteActions { editing, draft, save, remove } = actions;
    let id = note.id;
    let body = note.body;

    view! {
        <li class="widget__row widget__row--note">
            {move || {
                if editing.get().as_deref() == Some(id.as_str()) {
                    let save_id = id.clone();
                    view! {
                        <textarea
                            class="widget__input widget__input--area"
                            rows="4"
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        ></textarea>
                        <div class="widget__actions">
                            <button class="btn btn--primary" on:click=move |_| save.run(save_id.clone())>
                                "Save"
                            </button>
                            <button class="btn btn--ghost" on:click=move |_| editing.set(None)>
                                "Cancel"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    let edit_id = id.clone();
                    let remove_id = id.clone();
                    let edit_body = body.clone();
                    view! {
                        <p class="widget__body" title=body.clone()>{note_preview(&body).to_owned()}</p>
                        <div class="widget__actions">
                            <button
                                class="btn btn--ghost"
                                on:click=move |_| {
                                    draft.set(edit_body.clone());
                                    editing.set(Some(edit_id.clone()));
                                }
                            >
                                "Edit"
                            </button>
                            <button class="btn btn--ghost" on:click=move |_| remove.run(remove_id.clone())>
                                "Remove"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </li>
    }
}
