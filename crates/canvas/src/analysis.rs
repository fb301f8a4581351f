//! Read-only graph analysis over a canvas.
//!
//! The canvas never forbids cycles. These helpers report on the graph
//! shape for callers that want a pipeline view (e.g. the CLI `inspect`
//! command); nothing in the store consults them.

use std::collections::{HashMap, VecDeque};

use crate::error::CanvasError;
use crate::models::NodeId;
use crate::store::CanvasStore;

/// Return the node IDs in topological order.
///
/// Ties are broken by canvas order, so a chain comes back in the order
/// its nodes were added.
///
/// # Errors
/// - [`CanvasError::CycleDetected`] if the graph is not acyclic.
pub fn topological_order(store: &CanvasStore) -> Result<Vec<NodeId>, CanvasError> {
    // Kahn's algorithm. Edges only ever reference present nodes, so every
    // lookup below succeeds.
    let mut in_degree: HashMap<&NodeId, usize> =
        store.nodes().iter().map(|n| (&n.id, 0)).collect();

    for node in store.nodes() {
        for target in &node.connections {
            *in_degree.entry(target).or_insert(0) += 1;
        }
    }

    let mut queue: VecDeque<&NodeId> = store
        .nodes()
        .iter()
        .map(|n| &n.id)
        .filter(|id| in_degree.get(id) == Some(&0))
        .collect();

    let mut sorted = Vec::with_capacity(store.len());

    while let Some(id) = queue.pop_front() {
        sorted.push(id.clone());

        if let Some(node) = store.node(id) {
            for target in &node.connections {
                if let Some(deg) = in_degree.get_mut(target) {
                    *deg -= 1;
                    if *deg == 0 {
                        queue.push_back(target);
                    }
                }
            }
        }
    }

    // If we didn't visit every node the graph contains a cycle.
    if sorted.len() != store.len() {
        return Err(CanvasError::CycleDetected);
    }

    Ok(sorted)
}

/// Whether the canvas graph contains at least one directed cycle.
pub fn has_cycle(store: &CanvasStore) -> bool {
    topological_order(store).is_err()
}

/// Nodes with no incoming edges.
pub fn entry_nodes(store: &CanvasStore) -> Vec<NodeId> {
    store
        .nodes()
        .iter()
        .filter(|n| !store.nodes().iter().any(|other| other.connects_to(&n.id)))
        .map(|n| n.id.clone())
        .collect()
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeKind;

    fn chain(n: usize) -> (CanvasStore, Vec<NodeId>) {
        let mut store = CanvasStore::default();
        let ids: Vec<NodeId> = (0..n).map(|_| store.add_node(NodeKind::Agent, None, None)).collect();
        for pair in ids.windows(2) {
            let _ = store.add_edge(&pair[0], &pair[1]);
        }
        (store, ids)
    }

    #[test]
    fn linear_chain_sorts_in_order() {
        let (store, ids) = chain(3);
        assert_eq!(topological_order(&store).unwrap(), ids);
        assert_eq!(entry_nodes(&store), vec![ids[0].clone()]);
    }

    #[test]
    fn diamond_puts_entry_first_and_sink_last() {
        //   A
        //  / \
        // B   C
        //  \ /
        //   D
        let mut store = CanvasStore::default();
        let a = store.add_node(NodeKind::Source, None, None);
        let b = store.add_node(NodeKind::Agent, None, None);
        let c = store.add_node(NodeKind::Agent, None, None);
        let d = store.add_node(NodeKind::Output, None, None);
        for (from, to) in [(&a, &b), (&a, &c), (&b, &d), (&c, &d)] {
            let _ = store.add_edge(from, to);
        }

        let sorted = topological_order(&store).unwrap();
        assert_eq!(sorted.first(), Some(&a));
        assert_eq!(sorted.last(), Some(&d));
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn cycle_is_reported_but_not_prevented() {
        // A → B → C → A
        let (mut store, ids) = chain(3);
        assert!(store.add_edge(&ids[2], &ids[0]).is_applied());
        assert!(has_cycle(&store));
        assert_eq!(topological_order(&store), Err(CanvasError::CycleDetected));
    }

    #[test]
    fn empty_canvas_is_acyclic() {
        let store = CanvasStore::default();
        assert!(!has_cycle(&store));
        assert!(topological_order(&store).unwrap().is_empty());
    }
}
