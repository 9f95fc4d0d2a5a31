//! Tunable editor behaviour.

use crate::consts::{DUPLICATE_OFFSET_X, DUPLICATE_OFFSET_Y, MIN_SHAPE_SIZE, ROTATE_SNAP_STEP_DEG};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Smallest width/height a resize gesture may produce.
    pub min_size: f64,
    /// `(dx, dy)` applied to a duplicated shape.
    pub duplicate_offset: (f64, f64),
    /// Step used when a rotation gesture is snapped with shift held.
    pub rotate_snap_deg: f64,
    /// Select the new shape after a duplicate.
    pub select_duplicate: bool,
    /// Maximum undo depth; `None` keeps every snapshot.
    pub history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_SHAPE_SIZE,
            duplicate_offset: (DUPLICATE_OFFSET_X, DUPLICATE_OFFSET_Y),
            rotate_snap_deg: ROTATE_SNAP_STEP_DEG,
            select_duplicate: false,
            history_limit: None,
        }
    }
}
