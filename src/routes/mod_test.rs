use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

async fn status_of(request: Request<Body>) -> StatusCode {
    api_routes(test_app_state()).oneshot(request).await.unwrap().status()
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let status = status_of(Request::get("/healthz").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn me_without_cookie_is_unauthorized() {
    let status = status_of(Request::get("/api/auth/me").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn collection_routes_require_a_session() {
    for uri in ["/api/books", "/api/links", "/api/notes"] {
        let status = status_of(Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "GET {uri}");
    }

    let status = status_of(json_post("/api/books", r#"{"title":"Dune"}"#)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let status = status_of(
        Request::delete("/api/notes/00000000-0000-0000-0000-000000000000")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_session_cookie_is_unauthorized() {
    let request = Request::get("/api/books")
        .header(header::COOKIE, "session_token=")
        .body(Body::empty())
        .unwrap();
    assert_eq!(status_of(request).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn request_code_rejects_malformed_email_before_touching_the_database() {
    let status = status_of(json_post("/api/auth/email/request-code", r#"{"email":"not-an-email"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn verify_code_rejects_malformed_code() {
    let status = status_of(json_post(
        "/api/auth/email/verify-code",
        r#"{"email":"a@example.com","code":"nope"}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let status = status_of(Request::get("/api/widgets").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
