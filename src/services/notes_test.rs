use super::*;

fn input(body: &str) -> NoteInput {
    NoteInput { body: body.to_owned() }
}

#[test]
fn validate_trims_body() {
    assert_eq!(input("\n  buy milk  \n").validate().unwrap(), "buy milk");
}

#[test]
fn validate_keeps_inner_newlines() {
    assert_eq!(input("line one\nline two").validate().unwrap(), "line one\nline two");
}

#[test]
fn validate_rejects_empty_and_oversized_bodies() {
    assert_eq!(input("   ").validate().unwrap_err().to_string(), "note is empty");
    let big = "n".repeat(MAX_BODY_CHARS + 1);
    assert_eq!(input(&big).validate().unwrap_err().to_string(), "note is too long");
}

#[test]
fn note_serializes_both_timestamps() {
    let note = note_from_row((Uuid::nil(), "hi".to_owned(), 10, 20));
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["created_at"], 10);
    assert_eq!(json["updated_at"], 20);
}

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::state::test_helpers::live_app_state;

    #[tokio::test]
    async fn notes_can_be_edited_only_by_owner() {
        let state = live_app_state().await;
        let mut users = Vec::new();
        for _ in 0..2 {
            let id: Uuid = sqlx::query_scalar("INSERT INTO users (email, name) VALUES ($1, 'writer') RETURNING id")
                .bind(format!("{}@example.com", Uuid::new_v4()))
                .fetch_one(&state.pool)
                .await
                .unwrap();
            users.push(id);
        }

        let note = create_note(&state.pool, users[0], &input("draft")).await.unwrap();
        let edited = update_note(&state.pool, users[0], note.id, &input("final")).await.unwrap();
        assert_eq!(edited.body, "final");
        assert!(edited.updated_at >= note.updated_at);

        let denied = update_note(&state.pool, users[1], note.id, &input("hijack")).await;
        assert!(matches!(denied, Err(CollectionError::NotFound(_))));
        delete_note(&state.pool, users[0], note.id).await.unwrap();
    }
}
