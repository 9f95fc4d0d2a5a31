//! Engine error type.
//!
//! None of these escape the public event entry points on
//! [`crate::engine::EngineCore`]: every failure there degrades to a logged no-op.
//! They are surfaced by the lower-level building blocks so callers and tests can
//! tell the failure modes apart.

use crate::doc::{ShapeId, ShapeKind};
use crate::input::GestureKind;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The drop payload is not a serialized template of a known kind.
    #[error("malformed drop payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    /// A gesture is already in progress.
    #[error("gesture already active: {active:?}")]
    GestureBusy { active: GestureKind },
    /// The target shape is not in the scene.
    #[error("shape not found: {0}")]
    UnknownShape(ShapeId),
    /// A numeric attribute edit carried NaN or an infinity.
    #[error("non-finite value for {field}")]
    NonFiniteValue { field: &'static str },
    /// The edited field does not exist on this kind of shape.
    #[error("{field} does not apply to {kind:?}")]
    NotApplicable { field: &'static str, kind: ShapeKind },
}
