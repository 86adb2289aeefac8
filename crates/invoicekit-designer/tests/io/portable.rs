use invoicekit_core::{FormatError, Template};
use invoicekit_designer::{
    DropEvent, EditorSession, NotificationLevel, PortableTemplate, PropertyField, TemplateMeta,
};
use serde_json::json;
use tempfile::TempDir;

fn designed_session() -> EditorSession {
    let mut session = EditorSession::default();
    session.on_drop(&DropEvent::on_canvas("heading", 40.0, 40.0));
    session.on_drop(&DropEvent::on_canvas("line-dashed", 40.0, 120.0));
    session.on_drop(&DropEvent::on_canvas("total-amount", 500.0, 900.0));
    session.set_meta(TemplateMeta::new("Quarterly", "Summary layout"));
    session
}

#[test]
fn test_export_import_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quarterly.json");

    let mut source = designed_session();
    source.export_to_file(&path).unwrap();

    let mut target = EditorSession::default();
    target.import_from_file(&path).unwrap();

    assert_eq!(target.document(), source.document());
    assert_eq!(target.meta().name, "Quarterly");
    assert_eq!(target.meta().description, "Summary layout");
    assert!(target.active_template().is_none());
    assert!(target.can_undo());
}

#[test]
fn test_export_includes_pending_edits_and_timestamp() {
    let mut session = designed_session();
    session.select(Some(session.document().elements()[0].id()));
    session.update_property(PropertyField::Content, "Quarterly Statement");

    let raw = session.export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["name"], "Quarterly");
    assert_eq!(value["elements"][0]["text"]["content"], "Quarterly Statement");
    assert!(value["exportedAt"].is_string());
    assert!(value.get("thumbnail").is_none());
}

#[test]
fn test_import_missing_elements_leaves_document_unchanged() {
    let mut session = designed_session();
    let before = session.document().clone();
    let history_len = session.history().len();

    let err = session
        .import_json(r#"{"name": "Broken"}"#)
        .unwrap_err();

    assert_eq!(err, FormatError::ElementsNotArray);
    assert_eq!(session.document(), &before);
    assert_eq!(session.history().len(), history_len);
    assert_eq!(session.meta().name, "Quarterly");

    let notes = session.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Error);
}

#[test]
fn test_import_rejects_malformed_payloads() {
    let mut session = EditorSession::default();

    assert!(matches!(
        session.import_json("not json"),
        Err(FormatError::InvalidJson { .. })
    ));
    assert_eq!(session.import_json("[]"), Err(FormatError::NotAnObject));
    assert_eq!(
        session.import_json(r#"{"elements": []}"#),
        Err(FormatError::MissingName)
    );
    assert_eq!(
        session.import_json(r#"{"name": "X", "elements": {}}"#),
        Err(FormatError::ElementsNotArray)
    );

    let bad_element = json!({
        "name": "X",
        "elements": [{"id": "not-a-uuid", "kind": "rect"}]
    });
    assert!(matches!(
        session.import_json(&bad_element.to_string()),
        Err(FormatError::InvalidElement { index: 0, .. })
    ));
    assert!(session.document().is_empty());
}

#[test]
fn test_import_rejects_repeated_element_id() {
    let mut source = EditorSession::default();
    source.on_drop(&DropEvent::on_canvas("rect", 200.0, 200.0));
    let mut payload: serde_json::Value =
        serde_json::from_str(&source.export_json().unwrap()).unwrap();
    let twin = payload["elements"][0].clone();
    payload["elements"].as_array_mut().unwrap().push(twin);

    let mut session = designed_session();
    let before = session.document().clone();
    let err = session.import_json(&payload.to_string()).unwrap_err();

    assert!(matches!(
        err,
        FormatError::InvalidElement { index: 1, ref reason } if reason.contains("duplicate id")
    ));
    assert_eq!(session.document(), &before);

    let mut template: Template = invoicekit_core::builtin_template("default-1").unwrap();
    template.elements = payload["elements"].clone();
    assert!(session.open_template(&template).is_err());
    assert_eq!(session.document(), &before);
}

#[test]
fn test_import_then_undo_restores_previous_design() {
    let mut session = designed_session();
    let before = session.document().clone();

    session
        .import_json(r#"{"name": "Blank", "elements": []}"#)
        .unwrap();
    assert!(session.document().is_empty());

    session.undo();
    assert_eq!(session.document(), &before);
}

#[test]
fn test_builtin_templates_export_cleanly() {
    for template in invoicekit_core::builtin_templates() {
        let portable = PortableTemplate::from_template(&template).unwrap();
        let raw = portable.to_json().unwrap();
        let parsed = PortableTemplate::from_json(&raw).unwrap();
        assert_eq!(parsed.elements, portable.elements);
        assert_eq!(parsed.name, template.name);
    }
}

#[test]
fn test_open_template_rejects_bad_elements() {
    let mut session = designed_session();
    let before = session.document().clone();

    let mut template: Template = invoicekit_core::builtin_template("default-1").unwrap();
    template.elements = json!({"not": "an array"});

    assert_eq!(
        session.open_template(&template),
        Err(FormatError::ElementsNotArray)
    );
    assert_eq!(session.document(), &before);
}
