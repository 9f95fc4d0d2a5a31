//! Drop positioning: free placement at the drop point, or relative placement
//! stacked above/below the most recently placed shape.
//!
//! Relative placement only repositions when the previous shape's kind has a
//! vertical stride; flip inheritance applies to parking spots and spot numbers
//! whenever a relative mode is on. Text never takes the relative path and is
//! always centered in the viewport.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use serde::Deserialize;
use tracing::debug;

use crate::consts::{PARKING_SPOT_STRIDE, SPOT_NUMBER_STRIDE, WASTE_BIN_STRIDE};
use crate::doc::{PlacedShape, ShapeKind, ShapeTemplate};
use crate::geometry::Point;
use crate::viewport::Viewport;

/// How a dropped shape is positioned. A single value makes the two relative
/// modes mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlacementMode {
    /// Use the drop point.
    #[default]
    Free,
    /// Stack above the previous shape.
    RelativeTop,
    /// Stack below the previous shape.
    RelativeBottom,
}

impl PlacementMode {
    #[must_use]
    pub fn is_relative(self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Flip the "relative to top" switch; turning it on turns bottom off.
    #[must_use]
    pub fn toggle_top(self) -> Self {
        match self {
            Self::RelativeTop => Self::Free,
            Self::Free | Self::RelativeBottom => Self::RelativeTop,
        }
    }

    /// Flip the "relative to bottom" switch; turning it on turns top off.
    #[must_use]
    pub fn toggle_bottom(self) -> Self {
        match self {
            Self::RelativeBottom => Self::Free,
            Self::Free | Self::RelativeTop => Self::RelativeBottom,
        }
    }
}

/// Vertical distance between a shape of this kind and the next one stacked on it.
#[must_use]
pub fn vertical_stride(kind: ShapeKind) -> Option<f64> {
    match kind {
        ShapeKind::WasteBin => Some(WASTE_BIN_STRIDE),
        ShapeKind::ParkingSpot => Some(PARKING_SPOT_STRIDE),
        ShapeKind::SpotNumber => Some(SPOT_NUMBER_STRIDE),
        ShapeKind::Circle | ShapeKind::Rectangle | ShapeKind::Triangle | ShapeKind::Text | ShapeKind::Road => None,
    }
}

/// Position a new shape relative to `previous`, if the mode and kinds allow it.
#[must_use]
pub fn relative_position(previous: &PlacedShape, mode: PlacementMode) -> Option<Point> {
    let stride = vertical_stride(previous.kind())?;
    match mode {
        PlacementMode::Free => None,
        PlacementMode::RelativeTop => Some(Point::new(previous.x, previous.y - stride)),
        PlacementMode::RelativeBottom => Some(Point::new(previous.x, previous.y + stride)),
    }
}

/// Build a fully populated shape for a drop at `drop` (canvas-local).
///
/// `previous` is the last shape in the scene, not the selected one.
#[must_use]
pub fn place(
    template: ShapeTemplate,
    drop: Point,
    previous: Option<&PlacedShape>,
    mode: PlacementMode,
    viewport: &Viewport,
) -> PlacedShape {
    let kind = template.kind();
    if kind == ShapeKind::Text {
        let center = viewport.center();
        return PlacedShape::new(template, center.x, center.y);
    }

    let relative = previous.filter(|_| mode.is_relative());
    let position = relative
        .and_then(|prev| relative_position(prev, mode))
        .unwrap_or(drop);

    let mut shape = PlacedShape::new(template, position.x, position.y);
    if kind.is_flippable() {
        shape.is_flipped = relative.and_then(|prev| prev.is_flipped);
    }

    debug!(
        id = %shape.id(),
        ?kind,
        ?mode,
        x = shape.x,
        y = shape.y,
        relative = relative.is_some(),
        "placement: shape placed"
    );
    shape
}
