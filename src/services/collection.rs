//! Shared pieces for the per-user widget collections (books, links, notes).
//!
//! DESIGN
//! ======
//! Every collection row carries a `user_id` and every query filters on it, so
//! a row owned by someone else is indistinguishable from a missing row.
//! Input is trimmed and bounded here before any SQL runs.

use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("item not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Trim `raw` and require 1..=`max_chars` characters.
pub(crate) fn required_text(
    raw: &str,
    max_chars: usize,
    empty_msg: &'static str,
    long_msg: &'static str,
) -> Result<String, CollectionError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(CollectionError::Invalid(empty_msg));
    }
    if value.chars().count() > max_chars {
        return Err(CollectionError::Invalid(long_msg));
    }
    Ok(value.to_owned())
}

/// Trim `raw`; blank becomes `None`, otherwise at most `max_chars` characters.
pub(crate) fn optional_text(
    raw: Option<&str>,
    max_chars: usize,
    long_msg: &'static str,
) -> Result<Option<String>, CollectionError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.chars().count() > max_chars {
        return Err(CollectionError::Invalid(long_msg));
    }
    Ok(Some(value.to_owned()))
}

/// Map a delete/update row count to `NotFound` when nothing matched.
pub(crate) fn ensure_affected(rows: u64, id: Uuid) -> Result<(), CollectionError> {
    if rows == 0 {
        return Err(CollectionError::NotFound(id));
    }
    Ok(())
}
