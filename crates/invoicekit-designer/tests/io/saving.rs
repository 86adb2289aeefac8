use invoicekit_core::{DataAccess, Error, InMemoryBackend, User};
use invoicekit_designer::{DropEvent, EditorSession, NotificationLevel, TemplateMeta};

fn signed_in() -> InMemoryBackend {
    InMemoryBackend::with_user(User::new("owner@example.com", "Owner"))
}

fn session_with_design(name: &str) -> EditorSession {
    let mut session = EditorSession::default();
    session.on_drop(&DropEvent::on_canvas("invoice-number", 60.0, 60.0));
    session.on_drop(&DropEvent::on_canvas("rect", 400.0, 300.0));
    session.set_meta(TemplateMeta::new(name, ""));
    session
}

#[tokio::test]
async fn test_first_save_creates_then_updates_in_place() {
    let backend = signed_in();
    let mut session = session_with_design("Studio");

    let created = session.save(&backend).await.unwrap();
    assert_eq!(session.active_template().unwrap().id, created.id);
    assert!(created
        .thumbnail
        .as_deref()
        .unwrap()
        .starts_with("data:image/svg+xml;base64,"));
    assert_eq!(created.element_count(), 2);

    session.on_drop(&DropEvent::on_canvas("star", 200.0, 600.0));
    let updated = session.save(&backend).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.element_count(), 3);
    assert_eq!(backend.stored_template_count(), 1);
}

#[tokio::test]
async fn test_failed_save_keeps_active_template_unset() {
    let backend = signed_in();
    let mut session = session_with_design("Studio");
    backend.fail_next("connection reset");

    let err = session.save(&backend).await.unwrap_err();
    assert!(err.is_storage_error());
    assert!(session.active_template().is_none());
    assert_eq!(backend.stored_template_count(), 0);

    let notes = session.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Error);
    assert!(notes[0].message.contains("connection reset"));

    // The design is intact and the retry succeeds.
    assert_eq!(session.document().len(), 2);
    session.save(&backend).await.unwrap();
    assert!(session.active_template().is_some());
}

#[tokio::test]
async fn test_save_requires_sign_in() {
    let backend = InMemoryBackend::new();
    let mut session = session_with_design("Studio");

    let err = session.save(&backend).await.unwrap_err();
    assert!(err.is_auth_required());
    assert!(session.active_template().is_none());
}

#[tokio::test]
async fn test_save_requires_name() {
    let backend = signed_in();
    let mut session = session_with_design("   ");

    let err = session.save(&backend).await.unwrap_err();
    assert!(matches!(err, Error::Other(_)));
    assert_eq!(backend.stored_template_count(), 0);
}

#[tokio::test]
async fn test_saving_builtin_creates_copy() {
    let backend = signed_in();
    let mut session = EditorSession::default();

    session.load_template(&backend, "default-2").await.unwrap();
    assert!(session.active_template().is_none());
    assert_eq!(session.meta().name, "Modern");
    assert!(!session.document().is_empty());

    let saved = session.save(&backend).await.unwrap();
    assert_ne!(saved.id, "default-2");
    let owner = backend.current_user().await.unwrap().unwrap();
    assert_eq!(saved.user_id.as_deref(), Some(owner.id.as_str()));
    assert_eq!(backend.stored_template_count(), 1);
}

#[tokio::test]
async fn test_load_round_trips_saved_design() {
    let backend = signed_in();
    let mut author = session_with_design("Studio");
    let saved = author.save(&backend).await.unwrap();

    let mut reader = EditorSession::default();
    reader.load_template(&backend, &saved.id).await.unwrap();

    assert_eq!(reader.document(), author.document());
    assert_eq!(reader.active_template().unwrap().id, saved.id);
    assert_eq!(reader.meta().name, "Studio");
}

#[tokio::test]
async fn test_failed_load_keeps_document() {
    let backend = signed_in();
    let mut session = session_with_design("Studio");
    let before = session.document().clone();

    let err = session
        .load_template(&backend, "missing-template")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(session.document(), &before);
    assert_eq!(session.take_notifications()[0].level, NotificationLevel::Error);
}

#[tokio::test]
async fn test_new_design_clears_active_template() {
    let backend = signed_in();
    let mut session = session_with_design("Studio");
    session.save(&backend).await.unwrap();

    session.new_design();
    assert!(session.document().is_empty());
    assert!(session.active_template().is_none());
    assert_eq!(session.meta().name, "");

    session.undo();
    assert_eq!(session.document().len(), 2);
}
