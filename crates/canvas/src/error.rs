//! Canvas-level error and outcome types.

use thiserror::Error;

use crate::models::NodeId;

/// Errors produced when loading or analysing a whole canvas graph.
///
/// Interactive edits never fail; they report an [`Outcome`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// Two or more nodes share the same ID.
    #[error("duplicate node ID: '{0}'")]
    DuplicateNodeId(NodeId),

    /// A connection references a node ID that doesn't exist on the canvas.
    #[error("node '{source_id}' connects to unknown node '{target_id}'")]
    UnknownNodeReference {
        source_id: NodeId,
        target_id: NodeId,
    },

    /// A node lists itself as a connection target.
    #[error("node '{0}' connects to itself")]
    SelfLoop(NodeId),

    /// A node lists the same target more than once.
    #[error("node '{source_id}' connects to '{target_id}' more than once")]
    ParallelEdge {
        source_id: NodeId,
        target_id: NodeId,
    },

    /// Topological sort detected a cycle.
    #[error("workflow graph contains a cycle")]
    CycleDetected,

    /// The snapshot document could not be parsed.
    #[error("invalid canvas document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CanvasError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result of an interactive edit.
///
/// Anything other than [`Outcome::Applied`] means the canvas was left
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an edit may have been rejected; inspect or explicitly ignore the outcome"]
pub enum Outcome {
    /// The edit changed the canvas.
    Applied,
    /// The edge being added is already present.
    AlreadyExists,
    /// A referenced node (or edge, on removal) is absent.
    NotFound,
    /// The edge would connect a node to itself.
    InvalidSelfLoop,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
