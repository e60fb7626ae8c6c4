use super::*;

fn new_link(label: &str, url: &str) -> NewLink {
    NewLink { label: label.to_owned(), url: url.to_owned() }
}

#[test]
fn is_web_url_accepts_http_and_https() {
    assert!(is_web_url("https://www.rust-lang.org"));
    assert!(is_web_url("http://localhost:3000/path?q=1"));
    assert!(is_web_url("HTTPS://EXAMPLE.COM"));
}

#[test]
fn is_web_url_rejects_other_schemes_and_bare_schemes() {
    assert!(!is_web_url("javascript:alert(1)"));
    assert!(!is_web_url("ftp://example.com"));
    assert!(!is_web_url("https://"));
    assert!(!is_web_url("example.com"));
    assert!(!is_web_url("https://exa mple.com"));
}

#[test]
fn validate_trims_fields() {
    let (label, url) = new_link(" Docs ", "  https://docs.rs  ").validate().unwrap();
    assert_eq!(label, "Docs");
    assert_eq!(url, "https://docs.rs");
}

#[test]
fn validate_rejects_non_web_url() {
    let err = new_link("Bad", "javascript:void(0)").validate().unwrap_err();
    assert_eq!(err.to_string(), "url must start with http:// or https://");
}

#[test]
fn validate_rejects_blank_label() {
    let err = new_link("", "https://docs.rs").validate().unwrap_err();
    assert_eq!(err.to_string(), "label is required");
}

#[test]
fn validate_rejects_overlong_url() {
    let url = format!("https://example.com/{}", "a".repeat(MAX_URL_CHARS));
    let err = new_link("Long", &url).validate().unwrap_err();
    assert_eq!(err.to_string(), "url is too long");
}

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::state::test_helpers::live_app_state;

    async fn seed_user(pool: &sqlx::PgPool, name: &str) -> Uuid {
        sqlx::query_scalar("INSERT INTO users (email, name) VALUES ($1, $2) RETURNING id")
            .bind(format!("{}@example.com", Uuid::new_v4()))
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_list_delete_link() {
        let state = live_app_state().await;
        let user_id = seed_user(&state.pool, "surfer").await;

        let link = create_link(&state.pool, user_id, &new_link("Rust", "https://www.rust-lang.org"))
            .await
            .unwrap();
        assert_eq!(list_links(&state.pool, user_id).await.unwrap(), vec![link.clone()]);

        delete_link(&state.pool, user_id, link.id).await.unwrap();
        let again = delete_link(&state.pool, user_id, link.id).await;
        assert!(matches!(again, Err(CollectionError::NotFound(_))));
    }

    #[tokio::test]
    async fn links_are_scoped_to_their_owner() {
        let state = live_app_state().await;
        let alice = seed_user(&state.pool, "alice").await;
        let bob = seed_user(&state.pool, "bob").await;

        let link = create_link(&state.pool, alice, &new_link("Docs", "https://docs.rs")).await.unwrap();
        assert!(list_links(&state.pool, bob).await.unwrap().is_empty());

        let denied = delete_link(&state.pool, bob, link.id).await;
        assert!(matches!(denied, Err(CollectionError::NotFound(_))));
        assert_eq!(list_links(&state.pool, alice).await.unwrap(), vec![link]);
    }
}
