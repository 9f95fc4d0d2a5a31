//! Script replay: one JSON object per line, each an editor event.
//!
//! ```text
//! {"event":"drop","template":{"type":"wasteBin","name":"Paper"},"x":100,"y":200}
//! {"event":"gestureStart","index":0,"gesture":"resize","x":165,"y":225}
//! {"event":"gestureMove","x":200,"y":260,"modifiers":{"shift":true}}
//! {"event":"gestureEnd"}
//! ```
//!
//! Shapes are addressed by their index in the scene at the time the event is
//! applied. Blank lines and lines starting with `#` are skipped.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::io::BufRead;

use scene::doc::{PlacedShape, ShapeId};
use scene::edit::AttributeEdit;
use scene::engine::EngineCore;
use scene::geometry::Point;
use scene::input::{GestureKind, Key, Modifiers};
use scene::placement::PlacementMode;
use scene::render::SceneFrame;
use scene::viewport::Viewport;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::CliError;

/// A single scripted editor event.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ScriptEvent {
    Viewport {
        origin_x: f64,
        origin_y: f64,
        width: f64,
        height: f64,
    },
    /// Palette drop; `template` is passed through as the raw payload.
    Drop {
        template: serde_json::Value,
        x: f64,
        y: f64,
    },
    AddText {
        text: String,
    },
    Placement {
        mode: PlacementMode,
    },
    Select {
        index: usize,
    },
    ClearSelection,
    GestureStart {
        index: usize,
        gesture: GestureKind,
        x: f64,
        y: f64,
    },
    GestureMove {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    GestureEnd,
    KeyDown {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyUp {
        key: String,
    },
    Checkpoint,
    /// Attribute edit; `commit` makes it its own undo step.
    Edit {
        index: usize,
        edit: AttributeEdit,
        #[serde(default)]
        commit: bool,
    },
    Duplicate,
    Remove,
    Undo,
    Redo,
}

/// Final state printed after a replay.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub events: usize,
    pub shapes: &'a [PlacedShape],
    /// Index of the selected shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<usize>,
    pub can_undo: bool,
    pub can_redo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<SceneFrame>,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(engine: &'a EngineCore, events: usize, with_frame: bool) -> Self {
        let shapes = engine.shapes();
        let selection = engine
            .selection()
            .and_then(|id| shapes.iter().position(|s| s.id() == id));
        Self {
            events,
            shapes,
            selection,
            can_undo: engine.can_undo(),
            can_redo: engine.can_redo(),
            frame: with_frame.then(|| engine.frame()),
        }
    }
}

/// Apply every event in `reader` to `engine`. Returns the number of events applied.
///
/// # Errors
///
/// Fails on I/O errors, on lines that are not valid events, and on events that
/// address a shape index past the end of the scene.
pub fn replay(engine: &mut EngineCore, reader: impl BufRead) -> Result<usize, CliError> {
    let mut applied = 0_usize;
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let line_no = number + 1;
        let event: ScriptEvent =
            serde_json::from_str(trimmed).map_err(|source| CliError::Script { line: line_no, source })?;
        let actions = apply(engine, event, line_no)?;
        debug!(line = line_no, actions = actions, "event applied");
        applied += 1;
    }
    info!(events = applied, shapes = engine.shapes().len(), "replay complete");
    Ok(applied)
}

/// Apply one event; returns how many actions the engine reported.
fn apply(engine: &mut EngineCore, event: ScriptEvent, line: usize) -> Result<usize, CliError> {
    let actions = match event {
        ScriptEvent::Viewport { origin_x, origin_y, width, height } => {
            engine.set_viewport(Viewport::new(origin_x, origin_y, width, height));
            Vec::new()
        }
        ScriptEvent::Drop { template, x, y } => engine.on_drop(&template.to_string(), Point::new(x, y)),
        ScriptEvent::AddText { text } => engine.add_text(&text),
        ScriptEvent::Placement { mode } => {
            engine.set_placement_mode(mode);
            Vec::new()
        }
        ScriptEvent::Select { index } => {
            let id = shape_at(engine, index, line)?;
            engine.select(id)
        }
        ScriptEvent::ClearSelection => engine.clear_selection(),
        ScriptEvent::GestureStart { index, gesture, x, y } => {
            let id = shape_at(engine, index, line)?;
            engine.on_gesture_start(id, gesture, Point::new(x, y))
        }
        ScriptEvent::GestureMove { x, y, modifiers } => engine.on_gesture_move(Point::new(x, y), modifiers),
        ScriptEvent::GestureEnd => engine.on_gesture_end(),
        ScriptEvent::KeyDown { key, modifiers } => engine.on_key_down(&Key::new(key), modifiers),
        ScriptEvent::KeyUp { key } => engine.on_key_up(&Key::new(key), Modifiers::default()),
        ScriptEvent::Checkpoint => {
            engine.checkpoint();
            Vec::new()
        }
        ScriptEvent::Edit { index, edit, commit } => {
            let id = shape_at(engine, index, line)?;
            if commit {
                engine.edit_attribute(&id, &edit)
            } else {
                engine.apply_attribute(&id, &edit)
            }
        }
        ScriptEvent::Duplicate => engine.duplicate_selected(),
        ScriptEvent::Remove => engine.remove_selected(),
        ScriptEvent::Undo => engine.undo(),
        ScriptEvent::Redo => engine.redo(),
    };
    Ok(actions.len())
}

fn shape_at(engine: &EngineCore, index: usize, line: usize) -> Result<ShapeId, CliError> {
    engine
        .shapes()
        .get(index)
        .map(PlacedShape::id)
        .ok_or_else(|| CliError::NoShape { line, index, len: engine.shapes().len() })
}
