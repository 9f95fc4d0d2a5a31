#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{BasicTemplate, ParkingSpotTemplate, SpotNumberTemplate, WasteBinTemplate};

fn waste_bin() -> ShapeTemplate {
    ShapeTemplate::WasteBin(WasteBinTemplate::default())
}

fn parking_spot() -> ShapeTemplate {
    ShapeTemplate::ParkingSpot(ParkingSpotTemplate::default())
}

fn spot_number() -> ShapeTemplate {
    ShapeTemplate::SpotNumber(SpotNumberTemplate::default())
}

fn circle() -> ShapeTemplate {
    ShapeTemplate::Circle(BasicTemplate::default())
}

fn vp() -> Viewport {
    Viewport::new(0.0, 0.0, 800.0, 600.0)
}

fn placed(template: ShapeTemplate, x: f64, y: f64) -> PlacedShape {
    PlacedShape::new(template, x, y)
}

// =============================================================
// PlacementMode
// =============================================================

#[test]
fn default_mode_is_free() {
    assert_eq!(PlacementMode::default(), PlacementMode::Free);
    assert!(!PlacementMode::Free.is_relative());
}

#[test]
fn enabling_top_disables_bottom() {
    assert_eq!(PlacementMode::RelativeBottom.toggle_top(), PlacementMode::RelativeTop);
}

#[test]
fn enabling_bottom_disables_top() {
    assert_eq!(PlacementMode::RelativeTop.toggle_bottom(), PlacementMode::RelativeBottom);
}

#[test]
fn toggling_active_mode_returns_to_free() {
    assert_eq!(PlacementMode::RelativeTop.toggle_top(), PlacementMode::Free);
    assert_eq!(PlacementMode::RelativeBottom.toggle_bottom(), PlacementMode::Free);
}

// =============================================================
// Stride table
// =============================================================

#[test]
fn stride_table() {
    assert_eq!(vertical_stride(ShapeKind::WasteBin), Some(53.0));
    assert_eq!(vertical_stride(ShapeKind::ParkingSpot), Some(38.0));
    assert_eq!(vertical_stride(ShapeKind::SpotNumber), Some(50.0));
    assert_eq!(vertical_stride(ShapeKind::Road), None);
    assert_eq!(vertical_stride(ShapeKind::Circle), None);
}

// =============================================================
// place: free
// =============================================================

#[test]
fn free_mode_uses_drop_point() {
    let prev = placed(waste_bin(), 100.0, 200.0);
    let shape = place(waste_bin(), Point::new(5.0, 6.0), Some(&prev), PlacementMode::Free, &vp());
    assert_eq!(shape.position(), Point::new(5.0, 6.0));
}

#[test]
fn relative_mode_on_empty_scene_uses_drop_point() {
    let shape = place(waste_bin(), Point::new(5.0, 6.0), None, PlacementMode::RelativeTop, &vp());
    assert_eq!(shape.position(), Point::new(5.0, 6.0));
}

// =============================================================
// place: relative
// =============================================================

#[test]
fn relative_top_above_waste_bin() {
    let prev = placed(waste_bin(), 100.0, 200.0);
    let shape = place(circle(), Point::new(0.0, 0.0), Some(&prev), PlacementMode::RelativeTop, &vp());
    assert_eq!(shape.position(), Point::new(100.0, 147.0));
}

#[test]
fn relative_bottom_below_waste_bin() {
    let prev = placed(waste_bin(), 100.0, 200.0);
    let shape = place(circle(), Point::new(0.0, 0.0), Some(&prev), PlacementMode::RelativeBottom, &vp());
    assert_eq!(shape.position(), Point::new(100.0, 253.0));
}

#[test]
fn relative_uses_parking_spot_stride() {
    let prev = placed(parking_spot(), 40.0, 100.0);
    let up = place(parking_spot(), Point::new(0.0, 0.0), Some(&prev), PlacementMode::RelativeTop, &vp());
    let down = place(parking_spot(), Point::new(0.0, 0.0), Some(&prev), PlacementMode::RelativeBottom, &vp());
    assert_eq!(up.position(), Point::new(40.0, 62.0));
    assert_eq!(down.position(), Point::new(40.0, 138.0));
}

#[test]
fn relative_uses_spot_number_stride() {
    let prev = placed(spot_number(), 10.0, 100.0);
    let shape = place(spot_number(), Point::new(0.0, 0.0), Some(&prev), PlacementMode::RelativeBottom, &vp());
    assert_eq!(shape.position(), Point::new(10.0, 150.0));
}

#[test]
fn previous_kind_without_stride_falls_back_to_drop_point() {
    let prev = placed(circle(), 100.0, 200.0);
    let shape = place(waste_bin(), Point::new(7.0, 8.0), Some(&prev), PlacementMode::RelativeTop, &vp());
    assert_eq!(shape.position(), Point::new(7.0, 8.0));
}

// =============================================================
// place: flip inheritance
// =============================================================

#[test]
fn parking_spot_inherits_flip_in_relative_mode() {
    let mut prev = placed(parking_spot(), 40.0, 100.0);
    prev.is_flipped = Some(true);
    let shape = place(parking_spot(), Point::new(0.0, 0.0), Some(&prev), PlacementMode::RelativeBottom, &vp());
    assert_eq!(shape.is_flipped, Some(true));
}

#[test]
fn spot_number_inherits_flip_even_without_stride() {
    let mut prev = placed(ShapeTemplate::Road(crate::doc::RoadTemplate::default()), 0.0, 0.0);
    prev.is_flipped = Some(true);
    let shape = place(spot_number(), Point::new(3.0, 4.0), Some(&prev), PlacementMode::RelativeTop, &vp());
    assert_eq!(shape.is_flipped, Some(true));
    assert_eq!(shape.position(), Point::new(3.0, 4.0));
}

#[test]
fn flip_not_inherited_in_free_mode() {
    let mut prev = placed(parking_spot(), 40.0, 100.0);
    prev.is_flipped = Some(true);
    let shape = place(parking_spot(), Point::new(0.0, 0.0), Some(&prev), PlacementMode::Free, &vp());
    assert!(!shape.flipped());
}

#[test]
fn non_flippable_kind_never_inherits_flip() {
    let mut prev = placed(parking_spot(), 40.0, 100.0);
    prev.is_flipped = Some(true);
    let shape = place(waste_bin(), Point::new(0.0, 0.0), Some(&prev), PlacementMode::RelativeTop, &vp());
    assert_eq!(shape.is_flipped, None);
}

// =============================================================
// place: text
// =============================================================

#[test]
fn text_is_centered_in_viewport() {
    let shape = place(ShapeTemplate::text(), Point::new(5.0, 5.0), None, PlacementMode::Free, &vp());
    assert_eq!(shape.position(), Point::new(400.0, 300.0));
}

#[test]
fn text_ignores_relative_mode() {
    let prev = placed(waste_bin(), 100.0, 200.0);
    let shape = place(ShapeTemplate::text(), Point::new(5.0, 5.0), Some(&prev), PlacementMode::RelativeTop, &vp());
    assert_eq!(shape.position(), Point::new(400.0, 300.0));
}

#[test]
fn placed_shape_copies_template() {
    let template = ShapeTemplate::SpotNumber(SpotNumberTemplate { color: None, spot_number: Some(9) });
    let shape = place(template.clone(), Point::new(0.0, 0.0), None, PlacementMode::Free, &vp());
    assert_eq!(shape.template(), &template);
}
