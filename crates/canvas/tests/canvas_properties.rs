//! Behavioural tests for the canvas editing model, driven only through the
//! public `CanvasSession` API.

use std::collections::HashSet;

use canvas::preset::cms_component_designer;
use canvas::{CanvasSession, DragEnd, DragState, Edge, NodeId, NodeKind, Outcome, Position};

/// Session with `n` agent nodes and no edges.
fn session_with(n: usize) -> (CanvasSession, Vec<NodeId>) {
    let mut session = CanvasSession::default();
    let ids: Vec<NodeId> = (0..n).map(|_| session.add_node(NodeKind::Agent, None, None)).collect();
    (session, ids)
}

// ============================================================
// Store invariants
// ============================================================

#[test]
fn generated_ids_stay_unique_across_adds_and_deletes() {
    let (mut session, ids) = session_with(5);
    let mut seen: HashSet<NodeId> = ids.iter().cloned().collect();

    for id in &ids[1..4] {
        let _ = session.delete_node(id);
    }
    for kind in NodeKind::ALL {
        let id = session.add_node(kind, None, None);
        assert!(seen.insert(id), "id handed out twice");
    }
    assert_eq!(session.store().len(), 7);
}

#[test]
fn self_edge_never_changes_the_edge_set() {
    let (mut session, ids) = session_with(2);
    let _ = session.add_edge(&ids[0], &ids[1]);
    let before = session.store().edges();

    for id in &ids {
        assert_eq!(session.add_edge(id, id), Outcome::InvalidSelfLoop);
    }
    assert_eq!(session.store().edges(), before);
}

#[test]
fn adding_the_same_edge_twice_leaves_one() {
    let (mut session, ids) = session_with(2);
    assert_eq!(session.add_edge(&ids[0], &ids[1]), Outcome::Applied);
    assert_eq!(session.add_edge(&ids[0], &ids[1]), Outcome::AlreadyExists);

    let matching = session
        .store()
        .edges()
        .into_iter()
        .filter(|e| e == &Edge { from: ids[0].clone(), to: ids[1].clone() })
        .count();
    assert_eq!(matching, 1);
}

#[test]
fn delete_removes_node_and_every_reference_to_it() {
    let (mut session, ids) = session_with(4);
    let hub = &ids[1];
    for other in [&ids[0], &ids[2], &ids[3]] {
        let _ = session.add_edge(other, hub);
        let _ = session.add_edge(hub, other);
    }

    assert_eq!(session.delete_node(hub), Outcome::Applied);
    assert!(session.store().node(hub).is_none());
    assert!(session.store().nodes().iter().all(|n| !n.connects_to(hub)));
    assert!(session.store().edges().iter().all(|e| !e.involves(hub)));
}

#[test]
fn removing_an_edge_twice_is_a_quiet_no_op() {
    let (mut session, ids) = session_with(2);
    let _ = session.add_edge(&ids[0], &ids[1]);

    assert_eq!(session.remove_edge(&ids[0], &ids[1]), Outcome::Applied);
    let after_first = session.store().nodes().to_vec();
    assert_eq!(session.remove_edge(&ids[0], &ids[1]), Outcome::NotFound);
    assert_eq!(session.store().nodes(), after_first.as_slice());
}

// ============================================================
// Connection drag
// ============================================================

#[test]
fn drag_from_output_to_other_input_creates_edge() {
    let (mut session, ids) = session_with(2);
    let (x, y) = (&ids[0], &ids[1]);

    assert!(session.press_output(x, Position::new(10.0, 10.0)));
    session.pointer_moved(Position::new(200.0, 300.0));
    assert_eq!(session.rubber_band().map(|b| b.end), Some(Position::new(200.0, 300.0)));

    let end = session.release_over_input(y);
    assert!(matches!(end, DragEnd::Dropped { outcome: Outcome::Applied, .. }));
    assert!(session.store().has_edge(x, y));
    assert_eq!(session.drag().state(), &DragState::Idle);
}

#[test]
fn drag_released_over_empty_canvas_changes_nothing() {
    let (mut session, ids) = session_with(2);
    let before = session.store().edges();

    session.press_output(&ids[0], Position::default());
    session.pointer_moved(Position::new(999.0, 999.0));
    assert_eq!(session.release_elsewhere(), DragEnd::Cancelled);

    assert_eq!(session.store().edges(), before);
    assert_eq!(session.drag().state(), &DragState::Idle);
    assert!(session.rubber_band().is_none());
}

#[test]
fn drag_onto_existing_edge_reports_duplicate() {
    let (mut session, ids) = session_with(2);
    let _ = session.add_edge(&ids[0], &ids[1]);

    session.press_output(&ids[0], Position::default());
    let end = session.release_over_input(&ids[1]);
    assert!(matches!(end, DragEnd::Dropped { outcome: Outcome::AlreadyExists, .. }));
    assert_eq!(session.store().edges().len(), 1);
}

// ============================================================
// Preset scenario
// ============================================================

#[test]
fn deleting_middle_of_preset_clears_edges_and_selection() {
    let mut session = cms_component_designer();
    let b = NodeId::from("node-2");
    assert_eq!(session.select(&b), Outcome::Applied);

    assert_eq!(session.delete_node(&b), Outcome::Applied);

    let remaining: Vec<&str> = session.store().nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(remaining, vec!["node-1", "node-3"]);
    assert!(session.store().edges().is_empty());
    assert!(session.selected().is_none());
}
