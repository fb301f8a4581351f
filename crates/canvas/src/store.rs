//! Authoritative node list and the edits that mutate it.
//!
//! Rules enforced on every edit:
//! 1. Node IDs are never reused, even after a delete.
//! 2. Edges only reference nodes that are currently present.
//! 3. No self loops and at most one edge per ordered pair.
//!
//! Cycles are allowed; see [`crate::analysis`] for an informational check.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Outcome;
use crate::models::{CanvasLayout, CanvasNode, Edge, EdgeSegment, NodeId, NodeKind, Position};

/// Changes applied by [`CanvasStore::update_node`]. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub label: Option<String>,
    pub kind: Option<NodeKind>,
    pub config: Option<Map<String, Value>>,
}

/// Owns the nodes of one canvas session.
#[derive(Debug, Clone)]
pub struct CanvasStore {
    nodes: Vec<CanvasNode>,
    /// Sequence number of the last ID handed out.
    last_seq: u64,
    layout: CanvasLayout,
}

impl Default for CanvasStore {
    fn default() -> Self {
        Self::new(CanvasLayout::default())
    }
}

impl CanvasStore {
    /// An empty canvas.
    pub fn new(layout: CanvasLayout) -> Self {
        Self { nodes: Vec::new(), last_seq: 0, layout }
    }

    /// A canvas pre-populated with `nodes`.
    ///
    /// The caller is responsible for the nodes satisfying the graph rules;
    /// [`crate::snapshot::CanvasSnapshot::into_store`] validates before
    /// calling this.
    pub(crate) fn from_nodes(nodes: Vec<CanvasNode>, layout: CanvasLayout) -> Self {
        let last_seq = nodes.iter().filter_map(|n| n.id.seq()).max().unwrap_or(0);
        Self { nodes, last_seq, layout }
    }

    pub fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    pub fn nodes(&self) -> &[CanvasNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut CanvasNode> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Every edge, ordered by source node then creation order.
    pub fn edges(&self) -> Vec<Edge> {
        self.nodes
            .iter()
            .flat_map(|n| n.connections.iter().map(|t| Edge { from: n.id.clone(), to: t.clone() }))
            .collect()
    }

    pub fn has_edge(&self, from: &NodeId, to: &NodeId) -> bool {
        self.node(from).is_some_and(|n| n.connects_to(to))
    }

    // -----------------------------------------------------------------------
    // Node edits
    // -----------------------------------------------------------------------

    /// Append a node and return its fresh ID. Always succeeds.
    ///
    /// `label` defaults to `New <kind>`; `position` defaults to the next
    /// automatic placement slot.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        label: Option<String>,
        position: Option<Position>,
    ) -> NodeId {
        let id = self.next_id();
        let label = label.unwrap_or_else(|| format!("New {kind}"));
        let position = position.unwrap_or_else(|| self.layout.default_position(self.nodes.len()));

        debug!(node_id = %id, %kind, x = position.x, y = position.y, "node added");
        self.nodes.push(CanvasNode::new(id.clone(), kind, label, position));
        id
    }

    /// Continue after the highest sequence seen. If the counter is exhausted,
    /// reuse the lowest free `node-N` instead.
    fn next_id(&mut self) -> NodeId {
        if let Some(seq) = self.last_seq.checked_add(1) {
            let id = NodeId::from_seq(seq);
            if !self.contains(&id) {
                self.last_seq = seq;
                return id;
            }
        }

        let mut seq = 1;
        while self.contains(&NodeId::from_seq(seq)) {
            seq += 1;
        }
        warn!(seq, "node id counter exhausted, reusing a free id");
        NodeId::from_seq(seq)
    }

    /// Remove a node together with every edge that references it.
    pub fn delete_node(&mut self, id: &NodeId) -> Outcome {
        let before = self.nodes.len();
        self.nodes.retain(|n| &n.id != id);
        if self.nodes.len() == before {
            warn!(node_id = %id, "delete ignored: unknown node");
            return Outcome::NotFound;
        }

        for node in &mut self.nodes {
            node.connections.retain(|t| t != id);
        }
        debug!(node_id = %id, "node deleted");
        Outcome::Applied
    }

    /// Update a node's position. Edge geometry follows automatically.
    pub fn move_node(&mut self, id: &NodeId, position: Position) -> Outcome {
        match self.node_mut(id) {
            Some(node) => {
                node.position = position;
                debug!(node_id = %id, x = position.x, y = position.y, "node moved");
                Outcome::Applied
            }
            None => {
                warn!(node_id = %id, "move ignored: unknown node");
                Outcome::NotFound
            }
        }
    }

    /// Apply a properties-panel edit.
    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) -> Outcome {
        let Some(node) = self.node_mut(id) else {
            warn!(node_id = %id, "update ignored: unknown node");
            return Outcome::NotFound;
        };

        if let Some(label) = patch.label {
            node.label = label;
        }
        if let Some(kind) = patch.kind {
            node.kind = kind;
        }
        if let Some(config) = patch.config {
            node.config = config;
        }
        debug!(node_id = %id, "node updated");
        Outcome::Applied
    }

    // -----------------------------------------------------------------------
    // Edge edits
    // -----------------------------------------------------------------------

    /// Add the edge `from → to`.
    ///
    /// Leaves the canvas untouched for self loops, duplicates and unknown
    /// endpoints; the returned [`Outcome`] says which.
    pub fn add_edge(&mut self, from: &NodeId, to: &NodeId) -> Outcome {
        if from == to {
            debug!(node_id = %from, "edge rejected: self loop");
            return Outcome::InvalidSelfLoop;
        }
        if !self.contains(to) {
            debug!(%from, %to, "edge rejected: unknown target");
            return Outcome::NotFound;
        }
        let Some(source) = self.node_mut(from) else {
            debug!(%from, %to, "edge rejected: unknown source");
            return Outcome::NotFound;
        };
        if source.connects_to(to) {
            return Outcome::AlreadyExists;
        }

        source.connections.push(to.clone());
        debug!(%from, %to, "edge added");
        Outcome::Applied
    }

    /// Remove the edge `from → to` if present.
    pub fn remove_edge(&mut self, from: &NodeId, to: &NodeId) -> Outcome {
        let Some(source) = self.node_mut(from) else {
            return Outcome::NotFound;
        };
        let before = source.connections.len();
        source.connections.retain(|t| t != to);
        if source.connections.len() == before {
            return Outcome::NotFound;
        }
        debug!(%from, %to, "edge removed");
        Outcome::Applied
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Line segments for every edge, computed from current positions.
    pub fn edge_segments(&self) -> Vec<EdgeSegment> {
        self.nodes
            .iter()
            .flat_map(|source| {
                source.connections.iter().filter_map(move |target_id| {
                    let target = self.node(target_id)?;
                    let start = self.layout.output_anchor(source);
                    let end = self.layout.input_anchor(target);
                    Some(EdgeSegment {
                        edge: Edge { from: source.id.clone(), to: target_id.clone() },
                        start,
                        end,
                        midpoint: start.midpoint(end),
                    })
                })
            })
            .collect()
    }
}
