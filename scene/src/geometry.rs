//! Pure geometry helpers used by the gesture controller and the projector.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in canvas-local or client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Angle in degrees of the vector from `center` to `pointer`, in `(-180, 180]`.
///
/// Zero points along +x; positive angles turn towards +y (clockwise on screen).
#[must_use]
pub fn angle_deg(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

/// Normalize an angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees_360(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Snap an angle to the nearest multiple of `step_deg`, normalized into `[0, 360)`.
///
/// A non-positive or non-finite step leaves the angle unsnapped (but normalized).
#[must_use]
pub fn snap_rotation(deg: f64, step_deg: f64) -> f64 {
    if !(step_deg.is_finite() && step_deg > 0.0) {
        return normalize_degrees_360(deg);
    }
    normalize_degrees_360((deg / step_deg).round() * step_deg)
}

/// Scale `orig_w × orig_h` so that its diagonal equals `diagonal`, keeping the aspect ratio.
///
/// The result is floored so that neither side drops below `min_size`; the floor is
/// applied to the scale factor, not per side, so the ratio survives clamping.
/// Degenerate originals (non-positive sides) fall back to a square of the floor size.
#[must_use]
pub fn proportional_resize(orig_w: f64, orig_h: f64, diagonal: f64, min_size: f64) -> (f64, f64) {
    if !(orig_w > 0.0 && orig_h > 0.0) {
        return (min_size, min_size);
    }
    let orig_diagonal = orig_w.hypot(orig_h);
    let min_scale = min_size / orig_w.min(orig_h);
    let scale = (diagonal / orig_diagonal).max(min_scale);
    (orig_w * scale, orig_h * scale)
}

/// Free (non-proportional) resize: grow the original size by the pointer's offset
/// from the shape anchor, clamped to `min_size` per side.
#[must_use]
pub fn free_resize(anchor: Point, pointer: Point, orig_w: f64, orig_h: f64, min_size: f64) -> (f64, f64) {
    let width = (pointer.x - anchor.x + orig_w).max(min_size);
    let height = (pointer.y - anchor.y + orig_h).max(min_size);
    (width, height)
}
