//! JSON import/export of a whole canvas.
//!
//! A snapshot is an in-memory document only; where it is written (if
//! anywhere) is up to the caller.
//!
//! Rules enforced on import:
//! 1. Node IDs must be unique.
//! 2. Every connection must reference a node in the snapshot.
//! 3. No node may connect to itself or list a target twice.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;
use crate::models::{CanvasLayout, CanvasNode};
use crate::session::CanvasSession;
use crate::store::CanvasStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub nodes: Vec<CanvasNode>,
}

impl CanvasSnapshot {
    /// Capture the current nodes of a store.
    pub fn capture(name: Option<String>, store: &CanvasStore) -> Self {
        Self { name, nodes: store.nodes().to_vec() }
    }

    pub fn to_json(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the graph rules without consuming the snapshot.
    pub fn validate(&self) -> Result<(), CanvasError> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            if !ids.insert(&node.id) {
                return Err(CanvasError::DuplicateNodeId(node.id.clone()));
            }
        }

        for node in &self.nodes {
            let mut targets = HashSet::new();
            for target in &node.connections {
                if target == &node.id {
                    return Err(CanvasError::SelfLoop(node.id.clone()));
                }
                if !ids.contains(target) {
                    return Err(CanvasError::UnknownNodeReference {
                        source_id: node.id.clone(),
                        target_id: target.clone(),
                    });
                }
                if !targets.insert(target) {
                    return Err(CanvasError::ParallelEdge {
                        source_id: node.id.clone(),
                        target_id: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate and load into a fresh store. New IDs continue after the
    /// highest `node-N` present.
    pub fn into_store(self, layout: CanvasLayout) -> Result<CanvasStore, CanvasError> {
        self.validate()?;
        Ok(CanvasStore::from_nodes(self.nodes, layout))
    }

    pub fn into_session(self, layout: CanvasLayout) -> Result<CanvasSession, CanvasError> {
        self.into_store(layout).map(CanvasSession::from_store)
    }
}
