use super::*;

#[test]
fn item_endpoint_appends_id() {
    assert_eq!(item_endpoint(BOOKS_ENDPOINT, "b-1"), "/api/books/b-1");
    assert_eq!(item_endpoint(NOTES_ENDPOINT, "n-9"), "/api/notes/n-9");
}

#[test]
fn collection_endpoints_live_under_api() {
    for endpoint in [BOOKS_ENDPOINT, LINKS_ENDPOINT, NOTES_ENDPOINT] {
        assert!(endpoint.starts_with("/api/"), "{endpoint}");
    }
}

#[test]
fn api_error_message_prefers_server_message() {
    assert_eq!(api_error_message(422, r#"{"error":"title is required"}"#), "title is required");
}

#[test]
fn api_error_message_falls_back_to_status() {
    assert_eq!(api_error_message(404, ""), "request failed: 404");
    assert_eq!(api_error_message(500, "<html>oops</html>"), "request failed: 500");
    assert_eq!(api_error_message(400, r#"{"error":42}"#), "request failed: 400");
}
