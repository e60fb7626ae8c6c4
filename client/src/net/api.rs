//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! collection fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Book, Link, NewBook, NewLink, Note, NoteInput, User};

pub const BOOKS_ENDPOINT: &str = "/api/books";
pub const LINKS_ENDPOINT: &str = "/api/links";
pub const NOTES_ENDPOINT: &str = "/api/notes";

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn item_endpoint(collection: &str, id: &str) -> String {
    format!("{collection}/{id}")
}

/// Human-readable error for a failed request. Prefers the server's
/// `{"error": "..."}` message when the body carries one.
#[cfg(any(test, feature = "hydrate"))]
fn api_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(api_error_message(status, &body));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_empty(resp: gloo_net::http::Response) -> Result<(), String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(api_error_message(status, &body));
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn delete_item(url: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::delete(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_empty(resp).await
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<User>("/api/auth/me").await {
            Ok(user) => Some(user),
            Err(e) => {
                log::info!("no active session: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct RequestEmailCodeResponse {
    ok: bool,
    code: Option<String>,
}

/// Request a 6-character email login code via `POST /api/auth/email/request-code`.
///
/// Returns an optional code string when the server is configured to echo codes.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds with a non-OK status.
pub async fn request_email_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let body: RequestEmailCodeResponse = post_json("/api/auth/email/request-code", &payload).await?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Verify an email login code via `POST /api/auth/email/verify-code`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds with a non-OK status,
/// or the verification code is rejected.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let body: serde_json::Value = post_json("/api/auth/email/verify-code", &payload).await?;
        if body.get("ok").and_then(serde_json::Value::as_bool) != Some(true) {
            return Err("verify code failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

// =============================================================================
// BOOKS
// =============================================================================

/// Fetch the user's books, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the response cannot be decoded.
pub async fn fetch_books() -> Result<Vec<Book>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(BOOKS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Add a book.
///
/// # Errors
///
/// Returns the server's validation message or a transport error string.
pub async fn create_book(input: &NewBook) -> Result<Book, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(BOOKS_ENDPOINT, input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Remove a book.
///
/// # Errors
///
/// Returns an error string if the request fails or the book does not exist.
pub async fn delete_book(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete_item(&item_endpoint(BOOKS_ENDPOINT, id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

// =============================================================================
// LINKS
// =============================================================================

/// Fetch the user's links, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the response cannot be decoded.
pub async fn fetch_links() -> Result<Vec<Link>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(LINKS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Add a link.
///
/// # Errors
///
/// Returns the server's validation message or a transport error string.
pub async fn create_link(input: &NewLink) -> Result<Link, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(LINKS_ENDPOINT, input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Remove a link.
///
/// # Errors
///
/// Returns an error string if the request fails or the link does not exist.
pub async fn delete_link(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete_item(&item_endpoint(LINKS_ENDPOINT, id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

// =============================================================================
// NOTES
// =============================================================================

/// Fetch the user's notes, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the response cannot be decoded.
pub async fn fetch_notes() -> Result<Vec<Note>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(NOTES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Add a note.
///
/// # Errors
///
/// Returns the server's validation message or a transport error string.
pub async fn create_note(input: &NoteInput) -> Result<Note, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(NOTES_ENDPOINT, input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Replace a note's body via `PATCH /api/notes/{id}`.
///
/// # Errors
///
/// Returns the server's validation message or a transport error string.
pub async fn update_note(id: &str, input: &NoteInput) -> Result<Note, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&item_endpoint(NOTES_ENDPOINT, id))
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, input);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Remove a note.
///
/// # Errors
///
/// Returns an error string if the request fails or the note does not exist.
pub async fn delete_note(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete_item(&item_endpoint(NOTES_ENDPOINT, id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}
