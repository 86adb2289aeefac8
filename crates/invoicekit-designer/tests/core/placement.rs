use invoicekit_designer::catalog::{lookup, DEFAULT_LINE_LENGTH};
use invoicekit_designer::model::{ElementKind, Geometry, Point};
use invoicekit_designer::placement::{place, placement_point, DropEvent};

#[test]
fn test_circle_centered_on_pointer() {
    let entry = lookup("circle").unwrap().entry;
    let p = placement_point(entry, Point::new(100.0, 100.0), None);
    assert_eq!(p, Point::new(60.0, 60.0));
}

#[test]
fn test_star_uses_outer_radius() {
    let entry = lookup("star").unwrap().entry;
    let p = placement_point(entry, Point::new(100.0, 100.0), None);
    assert_eq!(p, Point::new(60.0, 60.0));
}

#[test]
fn test_text_uses_pointer_as_corner() {
    let entry = lookup("heading").unwrap().entry;
    let element = place(entry, Point::new(37.0, 81.0), None);
    assert_eq!(element.kind(), ElementKind::Text);
    assert_eq!((element.position.x, element.position.y), (37.0, 81.0));
}

#[test]
fn test_line_starts_at_pointer_with_default_length() {
    let entry = lookup("line-dotted").unwrap().entry;
    let element = place(entry, Point::new(50.0, 60.0), None);

    assert_eq!(element.kind(), ElementKind::DottedLine);
    assert_eq!((element.position.x, element.position.y), (50.0, 60.0));
    assert_eq!(
        element.geometry,
        Geometry::Line {
            points: vec![0.0, 0.0, DEFAULT_LINE_LENGTH, 0.0]
        }
    );
    assert_eq!(element.style.dash, vec![5.0, 5.0]);
}

#[test]
fn test_snapping_applies_after_centering() {
    let entry = lookup("rect").unwrap().entry;
    let p = placement_point(entry, Point::new(143.0, 107.0), Some(10.0));
    assert_eq!(p, Point::new(90.0, 80.0));
}

#[test]
fn test_placeholder_carries_token_id() {
    let entry = lookup("client-name").unwrap().entry;
    let element = place(entry, Point::new(10.0, 10.0), None);
    assert_eq!(element.kind(), ElementKind::Placeholder);
    assert_eq!(element.placeholder_id(), Some("client-name"));
    assert_eq!(element.text.as_ref().unwrap().content, "{{client_name}}");
}

#[test]
fn test_drop_event_zone() {
    assert!(DropEvent::on_canvas("rect", 0.0, 0.0).targets_canvas());
    assert!(!DropEvent::new("rect", Point::new(0.0, 0.0), "sidebar").targets_canvas());
}
