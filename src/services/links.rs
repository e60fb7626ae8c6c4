//! Links collection: per-user bookmarks.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::collection::{CollectionError, ensure_affected, required_text};

pub const MAX_LABEL_CHARS: usize = 200;
pub const MAX_URL_CHARS: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: Uuid,
    pub label: String,
    pub url: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLink {
    pub label: String,
    pub url: String,
}

impl NewLink {
    /// Trimmed `(label, url)` ready for insertion.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` if the label is blank, the URL is not `http(s)`, or
    /// either field is too long.
    pub fn validate(&self) -> Result<(String, String), CollectionError> {
        let label = required_text(&self.label, MAX_LABEL_CHARS, "label is required", "label is too long")?;
        let url = required_text(&self.url, MAX_URL_CHARS, "url is required", "url is too long")?;
        if !is_web_url(&url) {
            return Err(CollectionError::Invalid("url must start with http:// or https://"));
        }
        Ok((label, url))
    }
}

/// `true` for `http://` or `https://` URLs with something after the scheme.
pub(crate) fn is_web_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace)))
}

fn link_from_row((id, label, url, created_at): (Uuid, String, String, i64)) -> Link {
    Link { id, label, url, created_at }
}

/// List the user's links, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_links(pool: &PgPool, user_id: Uuid) -> Result<Vec<Link>, CollectionError> {
    let rows = sqlx::query_as::<_, (Uuid, String, String, i64)>(
        r"SELECT id, label, url, (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT
          FROM links
          WHERE user_id = $1
          ORDER BY created_at DESC, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(link_from_row).collect())
}

/// Insert a link for the user.
///
/// # Errors
///
/// Returns `Invalid` for bad input or a database error if the insert fails.
pub async fn create_link(pool: &PgPool, user_id: Uuid, input: &NewLink) -> Result<Link, CollectionError> {
    let (label, url) = input.validate()?;
    let row = sqlx::query_as::<_, (Uuid, String, String, i64)>(
        r"INSERT INTO links (user_id, label, url)
          VALUES ($1, $2, $3)
          RETURNING id, label, url, (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT",
    )
    .bind(user_id)
    .bind(label)
    .bind(url)
    .fetch_one(pool)
    .await?;
    Ok(link_from_row(row))
}

/// Delete one of the user's links.
///
/// # Errors
///
/// Returns `NotFound` if the user owns no link with this ID.
pub async fn delete_link(pool: &PgPool, user_id: Uuid, link_id: Uuid) -> Result<(), CollectionError> {
    let result = sqlx::query("DELETE FROM links WHERE id = $1 AND user_id = $2")
        .bind(link_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    ensure_affected(result.rows_affected(), link_id)
}

#[cfg(test)]
#[path = "links_test.rs"]
mod tests;
