//! Per-user widget collection routes (books, links, notes).
//!
//! Every handler requires an `AuthUser`; the owning user ID always comes from
//! the session, never from the request body or path.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use uuid::Uuid;

use super::auth::AuthUser;
use crate::services::books::{self, Book, NewBook};
use crate::services::collection::CollectionError;
use crate::services::links::{self, Link, NewLink};
use crate::services::notes::{self, Note, NoteInput};
use crate::state::AppState;

pub(crate) fn collection_error_to_status(err: &CollectionError) -> StatusCode {
    match err {
        CollectionError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CollectionError::NotFound(_) => StatusCode::NOT_FOUND,
        CollectionError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn collection_error_response(err: CollectionError) -> Response {
    let status = collection_error_to_status(&err);
    match err {
        CollectionError::Invalid(msg) => (status, Json(serde_json::json!({ "error": msg }))).into_response(),
        CollectionError::NotFound(_) => status.into_response(),
        CollectionError::Database(e) => {
            tracing::error!(error = %e, "collection query failed");
            status.into_response()
        }
    }
}

// =============================================================================
// BOOKS
// =============================================================================

/// `GET /api/books`: list the caller's books.
pub async fn list_books(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<Book>>, Response> {
    books::list_books(&state.pool, auth.user.id)
        .await
        .map(Json)
        .map_err(collection_error_response)
}

/// `POST /api/books`: add a book.
pub async fn create_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), Response> {
    let book = books::create_book(&state.pool, auth.user.id, &input)
        .await
        .map_err(collection_error_response)?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// `DELETE /api/books/{id}`: remove a book.
pub async fn delete_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    books::delete_book(&state.pool, auth.user.id, book_id)
        .await
        .map_err(collection_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// LINKS
// =============================================================================

/// `GET /api/links`: list the caller's links.
pub async fn list_links(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<Link>>, Response> {
    links::list_links(&state.pool, auth.user.id)
        .await
        .map(Json)
        .map_err(collection_error_response)
}

/// `POST /api/links`: add a link.
pub async fn create_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<NewLink>,
) -> Result<(StatusCode, Json<Link>), Response> {
    let link = links::create_link(&state.pool, auth.user.id, &input)
        .await
        .map_err(collection_error_response)?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// `DELETE /api/links/{id}`: remove a link.
pub async fn delete_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(link_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    links::delete_link(&state.pool, auth.user.id, link_id)
        .await
        .map_err(collection_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// NOTES
// =============================================================================

/// `GET /api/notes`: list the caller's notes.
pub async fn list_notes(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<Note>>, Response> {
    notes::list_notes(&state.pool, auth.user.id)
        .await
        .map(Json)
        .map_err(collection_error_response)
}

/// `POST /api/notes`: add a note.
pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<NoteInput>,
) -> Result<(StatusCode, Json<Note>), Response> {
    let note = notes::create_note(&state.pool, auth.user.id, &input)
        .await
        .map_err(collection_error_response)?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// `PATCH /api/notes/{id}`: replace a note's body.
pub async fn update_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(note_id): Path<Uuid>,
    Json(input): Json<NoteInput>,
) -> Result<Json<Note>, Response> {
    notes::update_note(&state.pool, auth.user.id, note_id, &input)
        .await
        .map(Json)
        .map_err(collection_error_response)
}

/// `DELETE /api/notes/{id}`: remove a note.
pub async fn delete_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(note_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    notes::delete_note(&state.pool, auth.user.id, note_id)
        .await
        .map_err(collection_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "collections_test.rs"]
mod tests;
