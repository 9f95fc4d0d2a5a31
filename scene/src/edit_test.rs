#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{BasicTemplate, ParkingSpotTemplate, RoadTemplate, SpotNumberTemplate, WasteBinTemplate};

fn shape(template: ShapeTemplate) -> PlacedShape {
    PlacedShape::new(template, 10.0, 20.0)
}

fn circle() -> PlacedShape {
    shape(ShapeTemplate::Circle(BasicTemplate::default()))
}

fn road() -> PlacedShape {
    shape(ShapeTemplate::Road(RoadTemplate::default()))
}

fn waste_bin() -> PlacedShape {
    shape(ShapeTemplate::WasteBin(WasteBinTemplate::default()))
}

// =============================================================
// Geometry fields
// =============================================================

#[test]
fn height_patches_only_height() {
    let original = circle();
    let patched = AttributeEdit::Height(42.0).apply(&original).unwrap();
    assert_eq!(patched.height, Some(42.0));
    assert_eq!(patched.width, original.width);
    assert_eq!(patched.id(), original.id());
    assert_eq!(patched.position(), original.position());
}

#[test]
fn width_applies_to_every_kind() {
    for s in [circle(), road(), waste_bin(), shape(ShapeTemplate::text())] {
        assert!(AttributeEdit::Width(5.0).apply(&s).is_ok());
    }
}

#[test]
fn apply_leaves_original_untouched() {
    let original = circle();
    let before = original.clone();
    let _patched = AttributeEdit::Width(99.0).apply(&original).unwrap();
    assert_eq!(original, before);
}

#[test]
fn border_radius_on_rectangle() {
    let s = shape(ShapeTemplate::Rectangle(BasicTemplate::default()));
    let patched = AttributeEdit::BorderRadius(6.0).apply(&s).unwrap();
    assert_eq!(patched.border_radius, Some(6.0));
}

#[test]
fn border_radius_rejected_on_circle() {
    let err = AttributeEdit::BorderRadius(6.0).apply(&circle()).unwrap_err();
    assert!(matches!(err, EditorError::NotApplicable { field: "borderRadius", kind: ShapeKind::Circle }));
}

// =============================================================
// Waste-bin margins
// =============================================================

#[test]
fn margins_on_waste_bin() {
    let s = waste_bin();
    let s = AttributeEdit::MarginTop(4.0).apply(&s).unwrap();
    let s = AttributeEdit::MarginBottom(-3.0).apply(&s).unwrap();
    assert_eq!(s.margin_top, Some(4.0));
    assert_eq!(s.margin_bottom, Some(-3.0));
    assert_eq!(s.position(), crate::geometry::Point::new(10.0, 20.0));
}

#[test]
fn margins_rejected_elsewhere() {
    assert!(AttributeEdit::MarginTop(4.0).apply(&road()).is_err());
}

// =============================================================
// Flip
// =============================================================

#[test]
fn flip_on_parking_spot_and_spot_number() {
    let spot = shape(ShapeTemplate::ParkingSpot(ParkingSpotTemplate::default()));
    let marker = shape(ShapeTemplate::SpotNumber(SpotNumberTemplate::default()));
    assert!(AttributeEdit::Flipped(true).apply(&spot).unwrap().flipped());
    assert!(AttributeEdit::Flipped(true).apply(&marker).unwrap().flipped());
}

#[test]
fn flip_rejected_on_waste_bin() {
    assert!(matches!(
        AttributeEdit::Flipped(true).apply(&waste_bin()),
        Err(EditorError::NotApplicable { .. })
    ));
}

// =============================================================
// Text fields
// =============================================================

#[test]
fn text_fields_on_text_shape() {
    let s = shape(ShapeTemplate::text());
    let s = AttributeEdit::Text("Gate A".into()).apply(&s).unwrap();
    let s = AttributeEdit::FontSize(24.0).apply(&s).unwrap();
    let s = AttributeEdit::FontWeight("bold".into()).apply(&s).unwrap();
    let s = AttributeEdit::TextColor("#ff0000".into()).apply(&s).unwrap();
    assert_eq!(s.text.as_deref(), Some("Gate A"));
    assert_eq!(s.font_size, Some(24.0));
    assert_eq!(s.font_weight.as_deref(), Some("bold"));
    assert_eq!(s.text_color.as_deref(), Some("#ff0000"));
}

#[test]
fn font_size_rejected_on_circle() {
    assert!(AttributeEdit::FontSize(12.0).apply(&circle()).is_err());
}

// =============================================================
// Road and spot number
// =============================================================

#[test]
fn road_speed_and_unit() {
    let s = AttributeEdit::RoadSpeed(30.0).apply(&road()).unwrap();
    let s = AttributeEdit::RoadSpeedUnit(SpeedUnit::Mph).apply(&s).unwrap();
    let ShapeTemplate::Road(t) = s.template() else {
        panic!("expected road template");
    };
    assert_eq!(t.speed, Some(30.0));
    assert_eq!(t.speed_unit, Some(SpeedUnit::Mph));
    assert_eq!(s.kind(), ShapeKind::Road);
}

#[test]
fn road_speed_rejected_on_circle() {
    assert!(matches!(
        AttributeEdit::RoadSpeed(30.0).apply(&circle()),
        Err(EditorError::NotApplicable { field: "speed", .. })
    ));
}

#[test]
fn spot_number_patches_marker() {
    let marker = shape(ShapeTemplate::SpotNumber(SpotNumberTemplate::default()));
    let patched = AttributeEdit::SpotNumber(12).apply(&marker).unwrap();
    let ShapeTemplate::SpotNumber(t) = patched.template() else {
        panic!("expected spot number template");
    };
    assert_eq!(t.spot_number, Some(12));
}

#[test]
fn spot_number_keeps_negative_value() {
    let marker = shape(ShapeTemplate::SpotNumber(SpotNumberTemplate::default()));
    let edit: AttributeEdit = serde_json::from_str(r#"{"field":"spotNumber","value":-3}"#).unwrap();
    let patched = edit.apply(&marker).unwrap();
    let ShapeTemplate::SpotNumber(t) = patched.template() else {
        panic!("expected spot number template");
    };
    assert_eq!(t.spot_number, Some(-3));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn non_finite_numbers_rejected() {
    for edit in [
        AttributeEdit::Height(f64::NAN),
        AttributeEdit::Width(f64::INFINITY),
        AttributeEdit::RoadSpeed(f64::NEG_INFINITY),
    ] {
        assert!(matches!(edit.apply(&road()), Err(EditorError::NonFiniteValue { .. })));
    }
}

#[test]
fn non_finite_check_precedes_kind_check() {
    let err = AttributeEdit::MarginTop(f64::NAN).apply(&circle()).unwrap_err();
    assert!(matches!(err, EditorError::NonFiniteValue { field: "marginTop" }));
}

#[test]
fn field_names() {
    assert_eq!(AttributeEdit::Flipped(true).field(), "isFlipped");
    assert_eq!(AttributeEdit::SpotNumber(1).field(), "spotNumber");
    assert_eq!(AttributeEdit::RoadSpeedUnit(SpeedUnit::Kmh).field(), "speedUnit");
}

// =============================================================
// Wire form
// =============================================================

#[test]
fn panel_json_names_match_field_names() {
    let edit: AttributeEdit = serde_json::from_str(r#"{"field":"isFlipped","value":true}"#).unwrap();
    assert_eq!(edit, AttributeEdit::Flipped(true));
    assert_eq!(edit.field(), "isFlipped");

    let edit: AttributeEdit = serde_json::from_str(r#"{"field":"speedUnit","value":"MPH"}"#).unwrap();
    assert_eq!(edit, AttributeEdit::RoadSpeedUnit(SpeedUnit::Mph));

    let edit: AttributeEdit = serde_json::from_str(r#"{"field":"marginTop","value":4.5}"#).unwrap();
    assert_eq!(edit.field(), "marginTop");
}

#[test]
fn unknown_panel_field_is_rejected() {
    assert!(serde_json::from_str::<AttributeEdit>(r#"{"field":"kind","value":"road"}"#).is_err());
}
