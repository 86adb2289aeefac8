use invoicekit_designer::catalog::lookup;
use invoicekit_designer::model::{Element, FontStyle, Geometry, Point, TextAlign};
use invoicekit_designer::properties::{
    apply_raw, coerce, PropertyError, PropertyField, PropertyValue,
};

fn element(id: &str) -> Element {
    Element::instantiate(lookup(id).unwrap().entry, Point::new(10.0, 10.0))
}

#[test]
fn test_field_names_round_trip() {
    for name in ["x", "cornerRadius", "numPoints", "fontSize", "textWidth", "fill"] {
        let field: PropertyField = name.parse().unwrap();
        assert_eq!(field.name(), name);
    }
    assert_eq!("text".parse::<PropertyField>().unwrap(), PropertyField::Content);
    assert!(matches!(
        "opacity".parse::<PropertyField>(),
        Err(PropertyError::UnknownField(name)) if name == "opacity"
    ));
}

#[test]
fn test_coerce_number_list() {
    assert_eq!(
        coerce(PropertyField::Dash, "4, 2 1").unwrap(),
        PropertyValue::Numbers(vec![4.0, 2.0, 1.0])
    );
    assert_eq!(
        coerce(PropertyField::Dash, "  ").unwrap(),
        PropertyValue::Numbers(Vec::new())
    );
}

#[test]
fn test_coerce_rejects_non_finite() {
    assert!(matches!(
        coerce(PropertyField::Width, "inf"),
        Err(PropertyError::InvalidNumber { .. })
    ));
    assert!(matches!(
        coerce(PropertyField::Width, "NaN"),
        Err(PropertyError::InvalidNumber { .. })
    ));
}

#[test]
fn test_rect_dimensions() {
    let mut rect = element("rect");
    apply_raw(&mut rect, PropertyField::Width, "240").unwrap();
    apply_raw(&mut rect, PropertyField::CornerRadius, "0").unwrap();
    assert_eq!(
        rect.geometry,
        Geometry::Rect {
            width: 240.0,
            height: 60.0,
            corner_radius: 0.0
        }
    );
}

#[test]
fn test_invalid_width_keeps_prior_value() {
    let mut rect = element("rect");
    let before = rect.clone();

    let err = apply_raw(&mut rect, PropertyField::Width, "abc").unwrap_err();
    assert!(matches!(err, PropertyError::InvalidNumber { .. }));
    let err = apply_raw(&mut rect, PropertyField::Width, "-5").unwrap_err();
    assert!(matches!(err, PropertyError::OutOfRange { .. }));

    assert_eq!(rect, before);
}

#[test]
fn test_polygon_sides_fixed_by_kind() {
    let mut triangle = element("triangle");
    let before = triangle.clone();
    let err = apply_raw(&mut triangle, PropertyField::Sides, "7").unwrap_err();
    assert!(matches!(err, PropertyError::OutOfRange { .. }));
    assert!(apply_raw(&mut triangle, PropertyField::Sides, "2").is_err());
    assert!(apply_raw(&mut triangle, PropertyField::Sides, "4.5").is_err());
    assert_eq!(triangle, before);

    apply_raw(&mut triangle, PropertyField::Sides, "3").unwrap();
    assert!(matches!(triangle.geometry, Geometry::Polygon { sides: 3, .. }));

    let mut pentagon = element("pentagon");
    assert!(apply_raw(&mut pentagon, PropertyField::Sides, "3").is_err());
    assert!(apply_raw(&mut pentagon, PropertyField::Sides, "5").is_ok());

    let mut star = element("star");
    assert_eq!(
        apply_raw(&mut star, PropertyField::Sides, "5").unwrap_err(),
        PropertyError::NotApplicable {
            field: PropertyField::Sides
        }
    );
}

#[test]
fn test_star_points() {
    let mut star = element("star");
    apply_raw(&mut star, PropertyField::NumPoints, "8").unwrap();
    apply_raw(&mut star, PropertyField::InnerRadius, "12.5").unwrap();
    assert_eq!(
        star.geometry,
        Geometry::Star {
            num_points: 8,
            inner_radius: 12.5,
            outer_radius: 40.0
        }
    );
}

#[test]
fn test_line_points_need_pairs() {
    let mut line = element("line-solid");
    apply_raw(&mut line, PropertyField::Points, "0,0,80,40").unwrap();
    assert_eq!(
        line.geometry,
        Geometry::Line {
            points: vec![0.0, 0.0, 80.0, 40.0]
        }
    );
    assert!(apply_raw(&mut line, PropertyField::Points, "0,0,80").is_err());
    assert!(apply_raw(&mut line, PropertyField::Points, "0,0").is_err());
}

#[test]
fn test_text_style_flags() {
    let mut text = element("body");
    apply_raw(&mut text, PropertyField::Bold, "true").unwrap();
    apply_raw(&mut text, PropertyField::Italic, "on").unwrap();
    assert_eq!(text.text.as_ref().unwrap().font_style, FontStyle::BoldItalic);

    apply_raw(&mut text, PropertyField::Bold, "false").unwrap();
    assert_eq!(text.text.as_ref().unwrap().font_style, FontStyle::Italic);

    apply_raw(&mut text, PropertyField::Align, "center").unwrap();
    assert_eq!(text.text.as_ref().unwrap().align, TextAlign::Center);
    assert!(apply_raw(&mut text, PropertyField::Align, "justify").is_err());
}

#[test]
fn test_text_fields_not_applicable_to_shapes() {
    let mut circle = element("circle");
    assert_eq!(
        apply_raw(&mut circle, PropertyField::FontSize, "12"),
        Err(PropertyError::NotApplicable {
            field: PropertyField::FontSize
        })
    );
    assert!(apply_raw(&mut circle, PropertyField::Width, "10").is_err());
    apply_raw(&mut circle, PropertyField::Radius, "25").unwrap();
    assert_eq!(circle.geometry, Geometry::Circle { radius: 25.0 });
}

#[test]
fn test_style_fields() {
    let mut rect = element("rect");
    apply_raw(&mut rect, PropertyField::Fill, "#ff0000").unwrap();
    apply_raw(&mut rect, PropertyField::StrokeWidth, "0").unwrap();
    apply_raw(&mut rect, PropertyField::Dash, "3,3").unwrap();
    assert_eq!(rect.style.fill, "#ff0000");
    assert_eq!(rect.style.stroke_width, 0.0);
    assert_eq!(rect.style.dash, vec![3.0, 3.0]);
    assert!(apply_raw(&mut rect, PropertyField::Dash, "3,-1").is_err());
}
