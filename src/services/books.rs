//! Books collection: a per-user reading list.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::collection::{CollectionError, ensure_affected, optional_text, required_text};

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_AUTHOR_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl NewBook {
    /// Trimmed `(title, author)` ready for insertion.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` if the title is blank or either field is too long.
    pub fn validate(&self) -> Result<(String, Option<String>), CollectionError> {
        let title = required_text(&self.title, MAX_TITLE_CHARS, "title is required", "title is too long")?;
        let author = optional_text(self.author.as_deref(), MAX_AUTHOR_CHARS, "author is too long")?;
        Ok((title, author))
    }
}

fn book_from_row((id, title, author, created_at): (Uuid, String, Option<String>, i64)) -> Book {
    Book { id, title, author, created_at }
}

/// List the user's books, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_books(pool: &PgPool, user_id: Uuid) -> Result<Vec<Book>, CollectionError> {
    let rows = sqlx::query_as::<_, (Uuid, String, Option<String>, i64)>(
        r"SELECT id, title, author, (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT
          FROM books
          WHERE user_id = $1
          ORDER BY created_at DESC, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(book_from_row).collect())
}

/// Insert a book for the user.
///
/// # Errors
///
/// Returns `Invalid` for bad input or a database error if the insert fails.
pub async fn create_book(pool: &PgPool, user_id: Uuid, input: &NewBook) -> Result<Book, CollectionError> {
    let (title, author) = input.validate()?;
    let row = sqlx::query_as::<_, (Uuid, String, Option<String>, i64)>(
        r"INSERT INTO books (user_id, title, author)
          VALUES ($1, $2, $3)
          RETURNING id, title, author, (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT",
    )
    .bind(user_id)
    .bind(title)
    .bind(author)
    .fetch_one(pool)
    .await?;
    Ok(book_from_row(row))
}

/// Delete one of the user's books.
///
/// # Errors
///
/// Returns `NotFound` if the user owns no book with this ID.
pub async fn delete_book(pool: &PgPool, user_id: Uuid, book_id: Uuid) -> Result<(), CollectionError> {
    let result = sqlx::query("DELETE FROM books WHERE id = $1 AND user_id = $2")
        .bind(book_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    ensure_affected(result.rows_affected(), book_id)
}

#[cfg(test)]
#[path = "books_test.rs"]
mod tests;
