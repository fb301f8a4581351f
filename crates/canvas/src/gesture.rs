//! Connection-drag gesture: interactive edge creation.
//!
//! Two states. Pressing a node's output anchor starts a drag; moving the
//! pointer only updates the rubber band's free end; any release or a
//! canvas click ends it. Only a release over a *different* node's input
//! anchor creates an edge.

use tracing::debug;

use crate::error::Outcome;
use crate::models::{NodeId, Position};
use crate::store::CanvasStore;

/// Current state of the gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: NodeId,
        pointer: Position,
    },
}

/// Straight line drawn while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubberBand {
    pub start: Position,
    pub end: Position,
}

/// How a drag ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEnd {
    /// Nothing was in progress.
    NotDragging,
    /// The drag ended without creating an edge.
    Cancelled,
    /// The drag ended over an input anchor; carries the edge edit's outcome.
    Dropped {
        source: NodeId,
        target: NodeId,
        outcome: Outcome,
    },
}

/// The gesture state machine.
#[derive(Debug, Clone, Default)]
pub struct ConnectionDrag {
    state: DragState,
}

impl ConnectionDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Node the current drag started from.
    pub fn source(&self) -> Option<&NodeId> {
        match &self.state {
            DragState::Dragging { source, .. } => Some(source),
            DragState::Idle => None,
        }
    }

    /// Press-down on `source`'s output anchor.
    ///
    /// Unknown nodes leave the gesture idle. Pressing while already dragging
    /// restarts the drag from the new source.
    pub fn press_output(&mut self, store: &CanvasStore, source: &NodeId, pointer: Position) -> bool {
        if !store.contains(source) {
            debug!(node_id = %source, "drag not started: unknown node");
            return false;
        }
        debug!(node_id = %source, "connection drag started");
        self.state = DragState::Dragging { source: source.clone(), pointer };
        true
    }

    /// Pointer movement; updates the rubber band's free end only.
    pub fn pointer_moved(&mut self, to: Position) {
        if let DragState::Dragging { pointer, .. } = &mut self.state {
            *pointer = to;
        }
    }

    /// Release over `target`'s input anchor.
    pub fn release_over_input(&mut self, store: &mut CanvasStore, target: &NodeId) -> DragEnd {
        match std::mem::take(&mut self.state) {
            DragState::Idle => DragEnd::NotDragging,
            DragState::Dragging { source, .. } if &source == target => {
                debug!(node_id = %source, "connection drag released on its own source");
                DragEnd::Cancelled
            }
            DragState::Dragging { source, .. } => {
                let outcome = store.add_edge(&source, target);
                DragEnd::Dropped { source, target: target.clone(), outcome }
            }
        }
    }

    /// Release anywhere other than an input anchor.
    pub fn release_elsewhere(&mut self) -> DragEnd {
        self.cancel()
    }

    /// Generic click on the canvas background; cancels unconditionally.
    pub fn canvas_click(&mut self) -> DragEnd {
        self.cancel()
    }

    fn cancel(&mut self) -> DragEnd {
        match std::mem::take(&mut self.state) {
            DragState::Idle => DragEnd::NotDragging,
            DragState::Dragging { source, .. } => {
                debug!(node_id = %source, "connection drag cancelled");
                DragEnd::Cancelled
            }
        }
    }

    /// The live line from the source's output anchor to the pointer.
    pub fn rubber_band(&self, store: &CanvasStore) -> Option<RubberBand> {
        let DragState::Dragging { source, pointer } = &self.state else {
            return None;
        };
        let node = store.node(source)?;
        Some(RubberBand { start: store.layout().output_anchor(node), end: *pointer })
    }

    /// Drop the drag if it started from `node`.
    pub(crate) fn forget_source(&mut self, node: &NodeId) {
        if self.source() == Some(node) {
            self.state = DragState::Idle;
        }
    }
}
