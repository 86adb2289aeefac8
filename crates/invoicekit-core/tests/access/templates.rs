use invoicekit_core::*;
use serde_json::json;

fn fields(name: &str) -> NewTemplate {
    NewTemplate {
        name: name.to_string(),
        description: String::new(),
        thumbnail: None,
        elements: json!([]),
    }
}

#[tokio::test]
async fn test_builtins_resolve_without_session() {
    let backend = InMemoryBackend::new();
    let template = backend.get_template("default-1").await.unwrap();
    assert_eq!(template.name, "Classic");
    assert!(template.is_builtin());
}

#[tokio::test]
async fn test_builtins_are_read_only() {
    let backend = InMemoryBackend::with_user(User::new("a@example.com", "A"));
    for id in BUILTIN_TEMPLATE_IDS {
        let err = backend.update_template(id, fields("Mine")).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(backend.delete_template(id).await.unwrap_err().is_not_found());
    }
}

#[tokio::test]
async fn test_template_lifecycle() {
    let backend = InMemoryBackend::with_user(User::new("a@example.com", "A"));

    let created = backend.create_template(fields("Quarterly")).await.unwrap();
    assert!(!created.is_builtin());
    assert_eq!(backend.stored_template_count(), 1);

    let mut changed = fields("Quarterly v2");
    changed.elements = json!([{ "id": "x" }]);
    let updated = backend.update_template(&created.id, changed).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Quarterly v2");
    assert_eq!(updated.element_count(), 1);

    let fetched = backend.get_template(&created.id).await.unwrap();
    assert_eq!(fetched, updated);

    backend.delete_template(&created.id).await.unwrap();
    assert!(backend
        .get_template(&created.id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_templates_listed_per_user() {
    let backend = InMemoryBackend::with_user(User::new("a@example.com", "A"));
    backend.create_template(fields("A's layout")).await.unwrap();

    backend.sign_in(User::new("b@example.com", "B"));
    assert!(backend.list_templates().await.unwrap().is_empty());
    backend.create_template(fields("B's layout")).await.unwrap();

    let listed = backend.list_templates().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "B's layout");
}
