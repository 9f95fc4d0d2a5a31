//! Editing session: owns the scene, history, gesture state and toolbar toggles,
//! and exposes one entry point per host event.
//!
//! Every entry point returns the list of [`Action`]s describing what changed.
//! Failures never escape: a malformed drop, a gesture conflict or an edit on a
//! missing shape is logged and produces no actions.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, warn};

use crate::config::EditorConfig;
use crate::doc::{PlacedShape, SceneStore, ShapeId, ShapeTemplate};
use crate::edit::AttributeEdit;
use crate::error::EditorError;
use crate::geometry::{self, Point};
use crate::history::History;
use crate::input::{GestureKind, InputState, Key, Modifiers, UiState};
use crate::placement::{self, PlacementMode};
use crate::render::{self, SceneFrame};
use crate::viewport::Viewport;

/// Changes reported back to the host after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShapeAdded(PlacedShape),
    ShapeUpdated(PlacedShape),
    ShapeRemoved { id: ShapeId },
    /// Undo or redo installed a whole new scene.
    SceneReplaced,
    SelectionChanged(Option<ShapeId>),
    RenderNeeded,
}

/// The editing session. All state lives here; there are no globals.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub store: SceneStore,
    pub history: History,
    pub input: InputState,
    pub ui: UiState,
    pub viewport: Viewport,
    pub config: EditorConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { history: History::with_limit(config.history_limit), config, ..Self::default() }
    }

    // --- Drops ---

    /// Place a palette element from its serialized payload at a client-space point.
    pub fn on_drop(&mut self, payload: &str, client_pt: Point) -> Vec<Action> {
        match ShapeTemplate::from_payload(payload).map_err(EditorError::from) {
            Ok(template) => self.drop_template(template, client_pt),
            Err(err) => {
                warn!(error = %err, "drop discarded");
                Vec::new()
            }
        }
    }

    /// Place an already parsed template at a client-space point.
    pub fn drop_template(&mut self, template: ShapeTemplate, client_pt: Point) -> Vec<Action> {
        let drop = self.viewport.client_to_canvas(client_pt);
        let shape = placement::place(template, drop, self.store.last(), self.ui.placement, &self.viewport);
        self.commit_new_shape(shape)
    }

    /// Add a text label centered in the viewport. Blank text is ignored.
    pub fn add_text(&mut self, text: &str) -> Vec<Action> {
        if text.trim().is_empty() {
            debug!("add_text: blank text ignored");
            return Vec::new();
        }
        let mut shape =
            placement::place(ShapeTemplate::text(), Point::default(), None, PlacementMode::Free, &self.viewport);
        shape.text = Some(text.to_owned());
        self.commit_new_shape(shape)
    }

    fn commit_new_shape(&mut self, shape: PlacedShape) -> Vec<Action> {
        self.checkpoint();
        debug!(id = %shape.id(), kind = ?shape.kind(), count = self.store.len() + 1, "shape added");
        self.store.add_shape(shape.clone());
        vec![Action::ShapeAdded(shape), Action::RenderNeeded]
    }

    // --- History ---

    /// Record the current scene as an undo point.
    ///
    /// The panel calls this once before the first change of a logical edit that
    /// it then streams through [`Self::apply_attribute`].
    pub fn checkpoint(&mut self) {
        self.history.snapshot(self.store.snapshot());
    }

    pub fn undo(&mut self) -> Vec<Action> {
        match self.history.undo(self.store.snapshot()) {
            Some(scene) => self.install(scene),
            None => {
                debug!("undo: nothing to undo");
                Vec::new()
            }
        }
    }

    pub fn redo(&mut self) -> Vec<Action> {
        match self.history.redo(self.store.snapshot()) {
            Some(scene) => self.install(scene),
            None => {
                debug!("redo: nothing to redo");
                Vec::new()
            }
        }
    }

    fn install(&mut self, scene: Vec<PlacedShape>) -> Vec<Action> {
        let selected_before = self.store.selected_id();
        self.store.replace_all(scene);
        match self.input.target() {
            Some(id) if !self.store.contains(&id) => {
                debug!(%id, "gesture target gone after history step");
                self.input = InputState::Idle;
            }
            // The rest of the drag is a new action on top of the installed scene.
            Some(_) => self.input.rearm_snapshot(),
            None => {}
        }

        let mut actions = vec![Action::SceneReplaced];
        if self.store.selected_id() != selected_before {
            actions.push(Action::SelectionChanged(self.store.selected_id()));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Attribute edits ---

    /// Patch one field of a shape without touching history.
    pub fn apply_attribute(&mut self, id: &ShapeId, edit: &AttributeEdit) -> Vec<Action> {
        match self.patch(id, edit) {
            Ok(patched) => {
                self.store.replace(patched.clone());
                vec![Action::ShapeUpdated(patched), Action::RenderNeeded]
            }
            Err(err) => {
                debug!(%id, field = edit.field(), error = %err, "attribute edit ignored");
                Vec::new()
            }
        }
    }

    /// Patch one field of a shape as its own undoable action.
    pub fn edit_attribute(&mut self, id: &ShapeId, edit: &AttributeEdit) -> Vec<Action> {
        match self.patch(id, edit) {
            Ok(patched) => {
                self.checkpoint();
                self.store.replace(patched.clone());
                vec![Action::ShapeUpdated(patched), Action::RenderNeeded]
            }
            Err(err) => {
                debug!(%id, field = edit.field(), error = %err, "attribute edit ignored");
                Vec::new()
            }
        }
    }

    fn patch(&self, id: &ShapeId, edit: &AttributeEdit) -> Result<PlacedShape, EditorError> {
        let shape = self.store.get(id).ok_or(EditorError::UnknownShape(*id))?;
        edit.apply(shape)
    }

    // --- Context actions ---

    /// Copy the selected shape to the end of the scene, offset by the configured amount.
    pub fn duplicate_selected(&mut self) -> Vec<Action> {
        let Some(source) = self.store.selected() else {
            debug!("duplicate: nothing selected");
            return Vec::new();
        };
        let (dx, dy) = self.config.duplicate_offset;
        let copy = source.duplicate(dx, dy);
        let copy_id = copy.id();

        let mut actions = self.commit_new_shape(copy);
        if self.config.select_duplicate && self.store.select(copy_id) {
            actions.push(Action::SelectionChanged(Some(copy_id)));
        }
        actions
    }

    /// Remove the selected shape and clear the selection.
    pub fn remove_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.store.selected_id() else {
            debug!("remove: nothing selected");
            return Vec::new();
        };
        self.checkpoint();
        match self.store.remove_shape(&id) {
            Some(_) => {
                debug!(%id, count = self.store.len(), "shape removed");
                self.store.clear_selection();
                vec![Action::ShapeRemoved { id }, Action::SelectionChanged(None), Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    // --- Selection ---

    pub fn select(&mut self, id: ShapeId) -> Vec<Action> {
        let before = self.store.selected_id();
        self.store.select(id);
        self.selection_actions(before)
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        let before = self.store.selected_id();
        self.store.clear_selection();
        self.selection_actions(before)
    }

    fn selection_actions(&self, before: Option<ShapeId>) -> Vec<Action> {
        let after = self.store.selected_id();
        if after == before {
            Vec::new()
        } else {
            vec![Action::SelectionChanged(after), Action::RenderNeeded]
        }
    }

    // --- Placement mode ---

    pub fn toggle_relative_top(&mut self) -> PlacementMode {
        self.ui.placement = self.ui.placement.toggle_top();
        self.ui.placement
    }

    pub fn toggle_relative_bottom(&mut self) -> PlacementMode {
        self.ui.placement = self.ui.placement.toggle_bottom();
        self.ui.placement
    }

    pub fn set_placement_mode(&mut self, mode: PlacementMode) {
        self.ui.placement = mode;
    }

    // --- Gestures ---

    /// Begin a move, resize or rotate on `id`. Rejected while another gesture runs.
    pub fn on_gesture_start(&mut self, id: ShapeId, kind: GestureKind, canvas_pt: Point) -> Vec<Action> {
        match self.start_gesture(id, kind) {
            Ok(()) => {
                debug!(%id, ?kind, x = canvas_pt.x, y = canvas_pt.y, "gesture start");
                let before = self.store.selected_id();
                self.store.select(id);
                let mut actions = Vec::new();
                if self.store.selected_id() != before {
                    actions.push(Action::SelectionChanged(Some(id)));
                }
                actions.push(Action::RenderNeeded);
                actions
            }
            Err(err) => {
                debug!(%id, ?kind, error = %err, "gesture start rejected");
                Vec::new()
            }
        }
    }

    fn start_gesture(&mut self, id: ShapeId, kind: GestureKind) -> Result<(), EditorError> {
        if let Some(active) = self.input.active_kind() {
            return Err(EditorError::GestureBusy { active });
        }
        let shape = self.store.get(&id).ok_or(EditorError::UnknownShape(id))?;
        self.input = match kind {
            GestureKind::Move => InputState::Moving { id, snapshotted: false },
            GestureKind::Resize => InputState::Resizing {
                id,
                orig_w: shape.width_or_default(),
                orig_h: shape.height_or_default(),
                snapshotted: false,
            },
            GestureKind::Rotate => InputState::Rotating { id, snapshotted: false },
        };
        Ok(())
    }

    /// Apply one drag step of the active gesture.
    pub fn on_gesture_move(&mut self, canvas_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let Some(id) = self.input.target() else {
            return Vec::new();
        };
        let Some(shape) = self.store.get(&id) else {
            debug!(%id, "gesture target gone; ending gesture");
            self.input = InputState::Idle;
            return Vec::new();
        };

        let patched = self.step(shape, canvas_pt, modifiers);
        if &patched == shape {
            return Vec::new();
        }
        if self.input.needs_snapshot() {
            self.checkpoint();
            self.input.mark_snapshotted();
        }
        self.store.replace(patched.clone());
        vec![Action::ShapeUpdated(patched), Action::RenderNeeded]
    }

    fn step(&self, shape: &PlacedShape, pointer: Point, modifiers: Modifiers) -> PlacedShape {
        let mut patched = shape.clone();
        match self.input {
            InputState::Idle => {}
            InputState::Moving { .. } => {
                if !self.ui.y_axis_lock {
                    patched.x = pointer.x;
                }
                patched.y = pointer.y;
            }
            InputState::Resizing { orig_w, orig_h, .. } => {
                let anchor = shape.position();
                let min = self.config.min_size;
                let (width, height) = if modifiers.shift {
                    geometry::proportional_resize(orig_w, orig_h, geometry::distance(anchor, pointer), min)
                } else {
                    geometry::free_resize(anchor, pointer, orig_w, orig_h, min)
                };
                patched.width = Some(width);
                patched.height = Some(height);
                patched.x = pointer.x - width / 2.0;
                patched.y = pointer.y - height / 2.0;
            }
            InputState::Rotating { .. } => {
                let angle = geometry::angle_deg(shape.pivot(), pointer);
                patched.rotation = Some(if modifiers.shift {
                    geometry::snap_rotation(angle, self.config.rotate_snap_deg)
                } else {
                    angle
                });
            }
        }
        patched
    }

    /// Finish the active gesture, wherever the pointer was released.
    pub fn on_gesture_end(&mut self) -> Vec<Action> {
        let ended = self.input.active_kind();
        self.input = InputState::Idle;
        match ended {
            Some(kind) => {
                debug!(?kind, "gesture end");
                vec![Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.command() {
            if key.is("z") {
                return if modifiers.shift { self.redo() } else { self.undo() };
            }
            if key.is("y") {
                return self.redo();
            }
            if key.is("d") {
                return self.duplicate_selected();
            }
            return Vec::new();
        }
        match key.0.as_str() {
            "Delete" | "Backspace" => self.remove_selected(),
            "Escape" => self.clear_selection(),
            _ if key.is("x") => {
                self.ui.y_axis_lock = true;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn on_key_up(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is("x") {
            self.ui.y_axis_lock = false;
        }
        Vec::new()
    }

    // --- Viewport ---

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- Queries ---

    /// All shapes in z-order.
    #[must_use]
    pub fn shapes(&self) -> &[PlacedShape] {
        self.store.shapes()
    }

    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&PlacedShape> {
        self.store.get(id)
    }

    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.store.selected_id()
    }

    /// The selected shape, always reflecting its latest edits.
    #[must_use]
    pub fn selected_shape(&self) -> Option<&PlacedShape> {
        self.store.selected()
    }

    #[must_use]
    pub fn placement_mode(&self) -> PlacementMode {
        self.ui.placement
    }

    #[must_use]
    pub fn active_gesture(&self) -> Option<GestureKind> {
        self.input.active_kind()
    }

    /// Project the current scene into draw primitives.
    #[must_use]
    pub fn frame(&self) -> SceneFrame {
        render::project(self.store.shapes(), self.store.selected_id(), self.input.raised())
    }
}
