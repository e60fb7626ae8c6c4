//! Notes collection: free-form per-user text notes.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::collection::{CollectionError, ensure_affected, required_text};

pub const MAX_BODY_CHARS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub body: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Last edit time in milliseconds since the Unix epoch.
    pub updated_at: i64,
}

/// Request body for both creating and editing a note.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteInput {
    pub body: String,
}

impl NoteInput {
    /// Trimmed note body.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` if the body is blank or too long.
    pub fn validate(&self) -> Result<String, CollectionError> {
        required_text(&self.body, MAX_BODY_CHARS, "note is empty", "note is too long")
    }
}

fn note_from_row((id, body, created_at, updated_at): (Uuid, String, i64, i64)) -> Note {
    Note { id, body, created_at, updated_at }
}

/// List the user's notes, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_notes(pool: &PgPool, user_id: Uuid) -> Result<Vec<Note>, CollectionError> {
    let rows = sqlx::query_as::<_, (Uuid, String, i64, i64)>(
        r"SELECT id, body,
                 (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT,
                 (EXTRACT(EPOCH FROM updated_at) * 1000)::BIGINT
          FROM notes
          WHERE user_id = $1
          ORDER BY created_at DESC, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(note_from_row).collect())
}

/// Insert a note for the user.
///
/// # Errors
///
/// Returns `Invalid` for bad input or a database error if the insert fails.
pub async fn create_note(pool: &PgPool, user_id: Uuid, input: &NoteInput) -> Result<Note, CollectionError> {
    let body = input.validate()?;
    let row = sqlx::query_as::<_, (Uuid, String, i64, i64)>(
        r"INSERT INTO notes (user_id, body)
          VALUES ($1, $2)
          RETURNING id, body,
                    (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT,
                    (EXTRACT(EPOCH FROM updated_at) * 1000)::BIGINT",
    )
    .bind(user_id)
    .bind(body)
    .fetch_one(pool)
    .await?;
    Ok(note_from_row(row))
}

/// Replace the body of one of the user's notes.
///
/// # Errors
///
/// Returns `Invalid` for bad input or `NotFound` if the user owns no note with this ID.
pub async fn update_note(
    pool: &PgPool,
    user_id: Uuid,
    note_id: Uuid,
    input: &NoteInput,
) -> Result<Note, CollectionError> {
    let body = input.validate()?;
    let row = sqlx::query_as::<_, (Uuid, String, i64, i64)>(
        r"UPDATE notes
          SET body = $3, updated_at = now()
          WHERE id = $1 AND user_id = $2
          RETURNING id, body,
                    (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT,
                    (EXTRACT(EPOCH FROM updated_at) * 1000)::BIGINT",
    )
    .bind(note_id)
    .bind(user_id)
    .bind(body)
    .fetch_optional(pool)
    .await?
    .ok_or(CollectionError::NotFound(note_id))?;
    Ok(note_from_row(row))
}

/// Delete one of the user's notes.
///
/// # Errors
///
/// Returns `NotFound` if the user owns no note with this ID.
pub async fn delete_note(pool: &PgPool, user_id: Uuid, note_id: Uuid) -> Result<(), CollectionError> {
    let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
        .bind(note_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    ensure_affected(result.rows_affected(), note_id)
}

#[cfg(test)]
#[path = "notes_test.rs"]
mod tests;
