//! Input model: modifier keys, gesture kinds, and the gesture state machine.
//!
//! `Modifiers` and `Key` capture what the host reports with each event.
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up; it carries the context needed to apply every drag step and to
//! take exactly one history snapshot per gesture. `UiState` holds the
//! persistent toggles that shape how drops and moves are interpreted.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Deserialize;

use crate::doc::ShapeId;
use crate::placement::PlacementMode;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl or Meta, whichever the platform uses for shortcuts.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A keyboard key as reported by the host (e.g. `"Delete"`, `"Escape"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Case-insensitive comparison for single-letter keys.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

/// The three direct-manipulation gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureKind {
    /// Drag the shape's position with the pointer.
    Move,
    /// Drag to change width and height.
    Resize,
    /// Drag around the shape's center to change rotation.
    Rotate,
}

/// Persistent toggles set by the toolbar and keyboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// How the next drop is positioned.
    pub placement: PlacementMode,
    /// The `x` key is held: moves follow the pointer on the y axis only.
    pub y_axis_lock: bool,
}

/// The active gesture, if any.
///
/// Every active variant records whether its history snapshot has been taken;
/// the snapshot happens on the first step that actually changes the shape, so
/// a press and release without motion leaves history untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Moving a shape; it is drawn on top until release.
    Moving {
        id: ShapeId,
        snapshotted: bool,
    },
    /// Resizing a shape.
    Resizing {
        id: ShapeId,
        /// Width when the gesture started.
        orig_w: f64,
        /// Height when the gesture started.
        orig_h: f64,
        snapshotted: bool,
    },
    /// Rotating a shape around its bounding-box center.
    Rotating {
        id: ShapeId,
        snapshotted: bool,
    },
}

impl InputState {
    /// Which gesture is running, or `None` when idle.
    #[must_use]
    pub fn active_kind(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Moving { .. } => Some(GestureKind::Move),
            Self::Resizing { .. } => Some(GestureKind::Resize),
            Self::Rotating { .. } => Some(GestureKind::Rotate),
        }
    }

    /// Target of the running gesture.
    #[must_use]
    pub fn target(&self) -> Option<ShapeId> {
        match self {
            Self::Idle => None,
            Self::Moving { id, .. } | Self::Resizing { id, .. } | Self::Rotating { id, .. } => Some(*id),
        }
    }

    /// Shape to draw on top of the others: the one being moved.
    #[must_use]
    pub fn raised(&self) -> Option<ShapeId> {
        match self {
            Self::Moving { id, .. } => Some(*id),
            Self::Idle | Self::Resizing { .. } | Self::Rotating { .. } => None,
        }
    }

    /// Whether this gesture still owes its history snapshot.
    #[must_use]
    pub fn needs_snapshot(&self) -> bool {
        match self {
            Self::Idle => false,
            Self::Moving { snapshotted, .. }
            | Self::Resizing { snapshotted, .. }
            | Self::Rotating { snapshotted, .. } => !*snapshotted,
        }
    }

    /// Record that the gesture's snapshot has been taken.
    pub fn mark_snapshotted(&mut self) {
        match self {
            Self::Idle => {}
            Self::Moving { snapshotted, .. }
            | Self::Resizing { snapshotted, .. }
            | Self::Rotating { snapshotted, .. } => *snapshotted = true,
        }
    }

    /// Make the next changing step take a fresh snapshot.
    pub fn rearm_snapshot(&mut self) {
        match self {
            Self::Idle => {}
            Self::Moving { snapshotted, .. }
            | Self::Resizing { snapshotted, .. }
            | Self::Rotating { snapshotted, .. } => *snapshotted = false,
        }
    }
}
