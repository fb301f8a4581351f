//! Core domain models for the workflow canvas.
//!
//! A canvas is a list of positioned nodes.  Edges are not stored as
//! separate records: each node carries the ordered list of node IDs it
//! points at, and the ordered pair `(source, target)` is the edge identity.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Identifier of a node, unique for the lifetime of a canvas session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Prefix shared by every generated ID (`node-1`, `node-2`, …).
    pub const PREFIX: &'static str = "node-";

    /// Build the ID for sequence number `seq`.
    pub fn from_seq(seq: u64) -> Self {
        Self(format!("{}{seq}", Self::PREFIX))
    }

    /// The sequence number embedded in a generated ID, if this ID has one.
    pub fn seq(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

/// What a workflow step represents on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Source,
    Agent,
    Decision,
    Output,
    /// Protocol connector (MCP).
    Mcp,
}

impl NodeKind {
    /// Every kind, in toolbar order.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Source,
        NodeKind::Agent,
        NodeKind::Decision,
        NodeKind::Output,
        NodeKind::Mcp,
    ];

    /// Toolbar caption for this kind.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Source => "Data Source",
            Self::Agent => "AI Agent",
            Self::Decision => "Decision",
            Self::Output => "Output",
            Self::Mcp => "MCP Connect",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Source => "source",
            Self::Agent => "agent",
            Self::Decision => "decision",
            Self::Output => "output",
            Self::Mcp => "mcp",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for NodeKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source"   => Ok(Self::Source),
            "agent"    => Ok(Self::Agent),
            "decision" => Ok(Self::Decision),
            "output"   => Ok(Self::Output),
            "mcp"      => Ok(Self::Mcp),
            other      => Err(format!("unknown node kind: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points.
    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

// ---------------------------------------------------------------------------
// CanvasNode
// ---------------------------------------------------------------------------

/// A single positioned step on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
    pub position: Position,
    /// Free-form, kind-specific settings shown in the properties panel.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub config: Map<String, Value>,
    /// Outgoing edge targets, in creation order.
    #[serde(default)]
    pub connections: Vec<NodeId>,
}

impl CanvasNode {
    pub fn new(id: NodeId, kind: NodeKind, label: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            position,
            config: Map::new(),
            connections: Vec::new(),
        }
    }

    /// Whether this node has an outgoing edge to `target`.
    pub fn connects_to(&self, target: &NodeId) -> bool {
        self.connections.contains(target)
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// Directed edge, identified by its ordered endpoint pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self { from: from.into(), to: to.into() }
    }

    /// Check if this edge touches a specific node.
    pub fn involves(&self, node: &NodeId) -> bool {
        &self.from == node || &self.to == node
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Geometry constants for anchors and automatic placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Horizontal distance from a node's origin to its output anchor.
    pub node_width: f64,
    /// Vertical distance from a node's origin to both anchors.
    pub anchor_offset_y: f64,
    /// Origin of the first automatically placed node.
    pub placement_origin: Position,
    /// Horizontal step between automatically placed nodes.
    pub placement_step_x: f64,
    /// Vertical step between placement rows.
    pub placement_step_y: f64,
    /// Number of rows automatic placement cycles through.
    pub placement_rows: usize,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            node_width: 240.0,
            anchor_offset_y: 50.0,
            placement_origin: Position::new(100.0, 150.0),
            placement_step_x: 50.0,
            placement_step_y: 100.0,
            placement_rows: 3,
        }
    }
}

impl CanvasLayout {
    /// Where the rubber band and outgoing edges start.
    pub fn output_anchor(&self, node: &CanvasNode) -> Position {
        Position::new(node.position.x + self.node_width, node.position.y + self.anchor_offset_y)
    }

    /// Where incoming edges end.
    pub fn input_anchor(&self, node: &CanvasNode) -> Position {
        Position::new(node.position.x, node.position.y + self.anchor_offset_y)
    }

    /// Default position for a node added when `count` nodes already exist.
    pub fn default_position(&self, count: usize) -> Position {
        let rows = self.placement_rows.max(1);
        Position::new(
            self.placement_origin.x + count as f64 * self.placement_step_x,
            self.placement_origin.y + (count % rows) as f64 * self.placement_step_y,
        )
    }
}

/// Rendered geometry of one edge, derived from current node positions.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSegment {
    pub edge: Edge,
    pub start: Position,
    pub end: Position,
    /// Where the remove handle sits.
    pub midpoint: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_sequence_round_trips() {
        let id = NodeId::from_seq(42);
        assert_eq!(id.as_str(), "node-42");
        assert_eq!(id.seq(), Some(42));
        assert_eq!(NodeId::from("custom").seq(), None);
    }

    #[test]
    fn default_positions_cycle_through_three_rows() {
        let layout = CanvasLayout::default();
        assert_eq!(layout.default_position(0), Position::new(100.0, 150.0));
        assert_eq!(layout.default_position(1), Position::new(150.0, 250.0));
        assert_eq!(layout.default_position(3), Position::new(250.0, 150.0));
    }

    #[test]
    fn anchors_sit_on_node_edges() {
        let layout = CanvasLayout::default();
        let node = CanvasNode::new(NodeId::from_seq(1), NodeKind::Agent, "a", Position::new(10.0, 20.0));
        assert_eq!(layout.output_anchor(&node), Position::new(250.0, 70.0));
        assert_eq!(layout.input_anchor(&node), Position::new(10.0, 70.0));
    }

    #[test]
    fn kind_parses_from_its_display_form() {
        for kind in NodeKind::ALL {
            assert_eq!(kind.to_string().parse::<NodeKind>(), Ok(kind));
        }
        assert!("pipeline".parse::<NodeKind>().is_err());
    }
}
