//! Canvas placement in client space.
//!
//! Drops arrive in client coordinates; everything stored in the scene is
//! canvas-local.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::geometry::Point;

/// Placement of the canvas inside the host window.
///
/// `origin_x` / `origin_y` are the client coordinates of the canvas' top-left
/// corner; `width` / `height` are the visible canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self { origin_x, origin_y, width, height }
    }

    /// Convert a client-space point to canvas-local coordinates.
    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        Point { x: client.x - self.origin_x, y: client.y - self.origin_y }
    }

    /// Center of the visible canvas, in canvas-local coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.width / 2.0, y: self.height / 2.0 }
    }
}
