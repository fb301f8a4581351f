//! Example graphs a canvas can be opened with.

use serde_json::{json, Map, Value};

use crate::models::{CanvasLayout, CanvasNode, NodeId, NodeKind, Position};
use crate::session::CanvasSession;
use crate::store::CanvasStore;

/// Names listed under "Example Workflows" in the toolbar.
pub const EXAMPLE_WORKFLOWS: [&str; 3] = [
    "Design-to-Code Pipeline",
    "Content Generation",
    "Data Processing Chain",
];

/// The CMS Component Designer workflow:
/// Figma Wireframe → Component Generator → Chrome Testbed.
pub fn cms_component_designer() -> CanvasSession {
    let mut figma = CanvasNode::new(
        NodeId::from_seq(1),
        NodeKind::Source,
        "Figma Wireframe",
        Position::new(50.0, 200.0),
    );
    figma.connections.push(NodeId::from_seq(2));

    let mut generator = CanvasNode::new(
        NodeId::from_seq(2),
        NodeKind::Agent,
        "Component Generator",
        Position::new(300.0, 200.0),
    );
    generator.config = object(json!({
        "agentType": "HTML/React Generator",
        "framework": "React",
        "styling": "Tailwind CSS",
    }));
    generator.connections.push(NodeId::from_seq(3));

    let testbed = CanvasNode::new(
        NodeId::from_seq(3),
        NodeKind::Output,
        "Chrome Testbed",
        Position::new(550.0, 200.0),
    );

    let store = CanvasStore::from_nodes(vec![figma, generator, testbed], CanvasLayout::default());
    CanvasSession::from_store(store)
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;

    #[test]
    fn preset_is_a_three_step_chain() {
        let session = cms_component_designer();
        let store = session.store();
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.edges(),
            vec![Edge::new("node-1", "node-2"), Edge::new("node-2", "node-3")]
        );
        let generator = store.node(&"node-2".into()).unwrap();
        assert_eq!(generator.config["framework"], "React");
    }

    #[test]
    fn new_nodes_continue_after_preset_ids() {
        let mut session = cms_component_designer();
        let id = session.add_node(NodeKind::Decision, None, None);
        assert_eq!(id.as_str(), "node-4");
    }
}
