//! Shared numeric constants for the scene crate.

// ── Direct manipulation ─────────────────────────────────────────

/// Smallest width or height a free resize may produce, in canvas units.
pub const MIN_SHAPE_SIZE: f64 = 10.0;

/// Angular step used when rotation snapping is requested.
pub const ROTATE_SNAP_STEP_DEG: f64 = 45.0;

// ── Duplication ─────────────────────────────────────────────────

/// Horizontal offset applied to a duplicated shape.
pub const DUPLICATE_OFFSET_X: f64 = 50.0;

/// Vertical offset applied to a duplicated shape.
pub const DUPLICATE_OFFSET_Y: f64 = 80.0;

// ── Relative placement ──────────────────────────────────────────

/// Vertical stride between stacked waste bins.
pub const WASTE_BIN_STRIDE: f64 = 53.0;

/// Vertical stride between stacked parking spots.
pub const PARKING_SPOT_STRIDE: f64 = 38.0;

/// Vertical stride between stacked spot-number markers.
pub const SPOT_NUMBER_STRIDE: f64 = 50.0;

// ── Rendering ───────────────────────────────────────────────────

/// Tilt applied to parking spots, mirrored when flipped.
pub const PARKING_SPOT_TILT_DEG: f64 = 30.0;

/// Corner radius of parking spot and waste bin bodies.
pub const BODY_CORNER_RADIUS: f64 = 8.0;

/// Inset between a shape body and its icon.
pub const ICON_INSET: f64 = 4.0;

/// Distance from the top edge of the selection box to the rotate handle.
pub const ROTATE_HANDLE_OFFSET: f64 = 24.0;

/// Text size used when a text shape has no font size override.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Counter-rotation of a handicap bay's icon, so it reads upright on the tilted body.
pub const HANDICAP_ICON_TILT_DEG: f64 = 50.0;

/// Counter-rotation of a regular bay's icon.
pub const PARKING_ICON_TILT_DEG: f64 = 58.0;

/// Height of the stop line painted across the top of a road.
pub const ROAD_STOP_LINE: f64 = 5.0;

/// Radius of the white speed-limit badge on a road.
pub const ROAD_BADGE_RADIUS: f64 = 22.5;
