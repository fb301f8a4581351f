//! `CanvasSession`: the store plus the transient interaction state that
//! refers to it (selected node, in-flight connection drag).
//!
//! Going through the session keeps that state consistent: deleting a node
//! clears a selection or drag that points at it.

use tracing::debug;

use crate::error::Outcome;
use crate::gesture::{ConnectionDrag, DragEnd, RubberBand};
use crate::models::{CanvasLayout, NodeId, NodeKind, Position};
use crate::store::{CanvasStore, NodePatch};

#[derive(Debug, Clone, Default)]
pub struct CanvasSession {
    store: CanvasStore,
    drag: ConnectionDrag,
    selected: Option<NodeId>,
}

impl CanvasSession {
    /// An empty canvas with the given geometry.
    pub fn new(layout: CanvasLayout) -> Self {
        Self::from_store(CanvasStore::new(layout))
    }

    /// Wrap an already populated store.
    pub fn from_store(store: CanvasStore) -> Self {
        Self { store, drag: ConnectionDrag::new(), selected: None }
    }

    pub fn store(&self) -> &CanvasStore {
        &self.store
    }

    pub fn drag(&self) -> &ConnectionDrag {
        &self.drag
    }

    pub fn into_store(self) -> CanvasStore {
        self.store
    }

    // -----------------------------------------------------------------------
    // Store edits
    // -----------------------------------------------------------------------

    pub fn add_node(&mut self, kind: NodeKind, label: Option<String>, position: Option<Position>) -> NodeId {
        self.store.add_node(kind, label, position)
    }

    /// Delete a node, its edges, and any selection or drag that refers to it.
    pub fn delete_node(&mut self, id: &NodeId) -> Outcome {
        let outcome = self.store.delete_node(id);
        if outcome.is_applied() {
            if self.selected.as_ref() == Some(id) {
                debug!(node_id = %id, "selection cleared by delete");
                self.selected = None;
            }
            self.drag.forget_source(id);
        }
        outcome
    }

    pub fn move_node(&mut self, id: &NodeId, position: Position) -> Outcome {
        self.store.move_node(id, position)
    }

    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) -> Outcome {
        self.store.update_node(id, patch)
    }

    pub fn add_edge(&mut self, from: &NodeId, to: &NodeId) -> Outcome {
        self.store.add_edge(from, to)
    }

    pub fn remove_edge(&mut self, from: &NodeId, to: &NodeId) -> Outcome {
        self.store.remove_edge(from, to)
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// Select a node for inspection. Unknown IDs are ignored.
    pub fn select(&mut self, id: &NodeId) -> Outcome {
        if !self.store.contains(id) {
            return Outcome::NotFound;
        }
        self.selected = Some(id.clone());
        Outcome::Applied
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // -----------------------------------------------------------------------
    // Connection drag
    // -----------------------------------------------------------------------

    pub fn press_output(&mut self, source: &NodeId, pointer: Position) -> bool {
        self.drag.press_output(&self.store, source, pointer)
    }

    pub fn pointer_moved(&mut self, pointer: Position) {
        self.drag.pointer_moved(pointer);
    }

    pub fn release_over_input(&mut self, target: &NodeId) -> DragEnd {
        self.drag.release_over_input(&mut self.store, target)
    }

    pub fn release_elsewhere(&mut self) -> DragEnd {
        self.drag.release_elsewhere()
    }

    pub fn canvas_click(&mut self) -> DragEnd {
        self.drag.canvas_click()
    }

    pub fn rubber_band(&self) -> Option<RubberBand> {
        self.drag.rubber_band(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleting_drag_source_returns_gesture_to_idle() {
        let mut session = CanvasSession::default();
        let a = session.add_node(NodeKind::Agent, None, None);
        let b = session.add_node(NodeKind::Output, None, None);

        assert!(session.press_output(&a, Position::default()));
        assert_eq!(session.delete_node(&a), Outcome::Applied);
        assert!(!session.drag().is_dragging());
        assert_eq!(session.release_over_input(&b), DragEnd::NotDragging);
        assert!(session.store().edges().is_empty());
    }

    #[test]
    fn deleting_other_node_keeps_selection_and_drag() {
        let mut session = CanvasSession::default();
        let a = session.add_node(NodeKind::Agent, None, None);
        let b = session.add_node(NodeKind::Output, None, None);

        let _ = session.select(&a);
        session.press_output(&a, Position::default());
        let _ = session.delete_node(&b);
        assert_eq!(session.selected(), Some(&a));
        assert_eq!(session.drag().source(), Some(&a));
    }

    #[test]
    fn selecting_unknown_node_is_ignored() {
        let mut session = CanvasSession::default();
        assert_eq!(session.select(&"node-9".into()), Outcome::NotFound);
        assert!(session.selected().is_none());
    }
}
