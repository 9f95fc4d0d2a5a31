//! Snapshot-based undo/redo.
//!
//! Every entry is a full deep copy of the scene taken immediately before a user
//! action. `snapshot` is the only operation that clears the redo stack; `undo`
//! and `redo` move the current scene onto the opposite stack and hand back the
//! popped snapshot for the caller to install.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use tracing::debug;

use crate::doc::PlacedShape;

/// A full copy of the scene's shapes.
pub type Snapshot = Vec<PlacedShape>;

#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    limit: Option<usize>,
}

impl History {
    /// Unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` undo snapshots, discarding the oldest.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { limit, ..Self::default() }
    }

    /// Record the scene as it was before an action and invalidate redo.
    pub fn snapshot(&mut self, scene: Snapshot) {
        self.redo_stack.clear();
        self.undo_stack.push(scene);
        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
            }
        }
        debug!(depth = self.undo_stack.len(), "history: snapshot");
    }

    /// Step back. Returns the scene to install, or `None` when there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let restored = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "history: undo");
        Some(restored)
    }

    /// Step forward. Returns the scene to install, or `None` when there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let restored = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "history: redo");
        Some(restored)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
