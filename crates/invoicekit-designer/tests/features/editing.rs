use std::time::{Duration, Instant};

use invoicekit_designer::model::{ElementId, Geometry};
use invoicekit_designer::{DropEvent, EditOutcome, EditorSession, PropertyError, PropertyField};

fn text_of(session: &EditorSession, id: ElementId) -> String {
    session.document().get(id).unwrap().text.as_ref().unwrap().content.clone()
}

fn drop_heading(session: &mut EditorSession) -> ElementId {
    session
        .on_drop(&DropEvent::on_canvas("heading", 200.0, 200.0))
        .unwrap()
}

#[test]
fn test_edit_commits_after_debounce_and_undoes_as_one_step() {
    let start = Instant::now();
    let mut session = EditorSession::default();
    let id = drop_heading(&mut session);
    assert_eq!(session.history().len(), 2);

    let el = session.document().get(id).unwrap();
    assert_eq!((el.position.x, el.position.y), (200.0, 200.0));
    assert_eq!(text_of(&session, id), "Heading Text");

    assert_eq!(
        session.update_property_at(PropertyField::Content, "Invoice", start),
        EditOutcome::Staged
    );
    assert_eq!(
        session.update_property_at(
            PropertyField::Content,
            "Invoice Summary",
            start + Duration::from_millis(100)
        ),
        EditOutcome::Staged
    );

    // Pending edits render but are not committed yet.
    assert_eq!(text_of(&session, id), "Heading Text");
    let preview = session.preview();
    assert_eq!(
        preview.get(id).unwrap().text.as_ref().unwrap().content,
        "Invoice Summary"
    );
    drop(preview);

    assert!(!session.tick(start + Duration::from_millis(350)));
    assert!(session.tick(start + Duration::from_millis(400)));
    assert!(!session.tick(start + Duration::from_millis(800)));

    assert_eq!(session.history().len(), 3);
    assert_eq!(text_of(&session, id), "Invoice Summary");

    session.undo();
    assert_eq!(text_of(&session, id), "Heading Text");
    assert_eq!(session.selected_id(), Some(id));

    session.redo();
    assert_eq!(text_of(&session, id), "Invoice Summary");
    assert_eq!(session.history().len(), 3);
}

#[test]
fn test_invalid_number_is_rejected_and_prior_value_kept() {
    let mut session = EditorSession::default();
    let id = session
        .on_drop(&DropEvent::on_canvas("rect", 140.0, 100.0))
        .unwrap();

    let outcome = session.update_property(PropertyField::Width, "wide");
    assert!(matches!(
        outcome,
        EditOutcome::Rejected(PropertyError::InvalidNumber { .. })
    ));
    assert!(!session.has_pending_edit());
    assert!(matches!(
        session.document().get(id).unwrap().geometry,
        Geometry::Rect { width, .. } if width == 100.0
    ));
}

#[test]
fn test_rejected_edit_keeps_earlier_staged_edit() {
    let start = Instant::now();
    let mut session = EditorSession::default();
    let id = session
        .on_drop(&DropEvent::on_canvas("rect", 140.0, 100.0))
        .unwrap();

    session.update_property_at(PropertyField::Width, "180", start);
    session.update_property_at(PropertyField::Height, "-3", start);
    assert!(session.flush_pending());

    assert_eq!(
        session.document().get(id).unwrap().geometry,
        Geometry::Rect {
            width: 180.0,
            height: 60.0,
            corner_radius: 0.0
        }
    );
}

#[test]
fn test_triangle_keeps_three_sides() {
    let mut session = EditorSession::default();
    let id = session
        .on_drop(&DropEvent::on_canvas("triangle", 300.0, 300.0))
        .unwrap();
    let before = session.document().get(id).unwrap().clone();

    let outcome = session.update_property(PropertyField::Sides, "7");
    assert!(matches!(
        outcome,
        EditOutcome::Rejected(PropertyError::OutOfRange {
            field: PropertyField::Sides,
            ..
        })
    ));
    session.flush_pending();

    let after = session.document().get(id).unwrap();
    assert_eq!(after, &before);
    assert!(matches!(after.geometry, Geometry::Polygon { sides: 3, .. }));
}

#[test]
fn test_edit_without_selection() {
    let mut session = EditorSession::default();
    assert_eq!(
        session.update_property(PropertyField::X, "10"),
        EditOutcome::NoSelection
    );
}

#[test]
fn test_unknown_field_name() {
    let mut session = EditorSession::default();
    drop_heading(&mut session);
    let outcome = session.update_property_named("opacity", "0.5", Instant::now());
    assert!(matches!(
        outcome,
        EditOutcome::Rejected(PropertyError::UnknownField(_))
    ));
}

#[test]
fn test_changing_selection_flushes_pending_edits() {
    let mut session = EditorSession::default();
    let first = drop_heading(&mut session);
    let second = session
        .on_drop(&DropEvent::on_canvas("circle", 400.0, 400.0))
        .unwrap();

    session.select(Some(first));
    session.update_property_named("text", "Bill To", Instant::now());
    session.select(Some(second));

    assert!(!session.has_pending_edit());
    assert_eq!(text_of(&session, first), "Bill To");
    assert_eq!(session.history().len(), 4);
}

#[test]
fn test_undo_flushes_pending_edit_first() {
    let mut session = EditorSession::default();
    let id = drop_heading(&mut session);

    session.update_property(PropertyField::Content, "Receipt");
    session.undo();

    assert_eq!(text_of(&session, id), "Heading Text");
    assert!(session.can_redo());
}

#[test]
fn test_delete_selected_is_one_history_step() {
    let mut session = EditorSession::default();
    let id = drop_heading(&mut session);
    session.update_property(PropertyField::Content, "Discarded");

    assert!(session.delete_selected());
    assert!(session.document().is_empty());
    assert_eq!(session.selected_id(), None);
    assert!(!session.has_pending_edit());
    assert_eq!(session.history().len(), 3);

    session.undo();
    assert_eq!(text_of(&session, id), "Heading Text");
    // Undo restores the element but not the selection.
    assert_eq!(session.selected_id(), None);

    assert!(!session.delete_selected());
}

#[test]
fn test_selecting_unknown_id_clears_selection() {
    let mut session = EditorSession::default();
    drop_heading(&mut session);
    assert_eq!(session.select(Some(ElementId::new())), None);
    assert!(!session.ui().properties_open);
}

#[test]
fn test_select_at_picks_topmost() {
    let mut session = EditorSession::default();
    let lower = session
        .on_drop(&DropEvent::on_canvas("rect", 140.0, 100.0))
        .unwrap();
    let upper = session
        .on_drop(&DropEvent::on_canvas("circle", 140.0, 100.0))
        .unwrap();

    assert_eq!(session.select_at(140.0, 100.0), Some(upper));
    assert_eq!(session.select_at(95.0, 75.0), Some(lower));
    assert_eq!(session.select_at(700.0, 1000.0), None);
}

#[test]
fn test_render_includes_pending_edit() {
    let mut session = EditorSession::default();
    drop_heading(&mut session);
    session.update_property(PropertyField::Content, "Statement");

    let frame = session.render();
    assert!(frame.starts_with("<svg"));
    assert!(frame.contains("Statement"));
}
