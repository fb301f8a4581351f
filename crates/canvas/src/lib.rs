//! `canvas` crate: the workflow canvas editing model.
//!
//! Positioned nodes, directed edges stored as per-node target lists, the
//! connection-drag gesture, and the session that keeps selection and drag
//! state consistent with the node list. Purely in-memory and synchronous.

pub mod models;
pub mod error;
pub mod store;
pub mod gesture;
pub mod session;
pub mod preset;
pub mod snapshot;
pub mod analysis;

pub use models::{CanvasLayout, CanvasNode, Edge, EdgeSegment, NodeId, NodeKind, Position};
pub use error::{CanvasError, Outcome};
pub use store::{CanvasStore, NodePatch};
pub use gesture::{ConnectionDrag, DragEnd, DragState, RubberBand};
pub use session::CanvasSession;
pub use snapshot::CanvasSnapshot;
pub use analysis::{has_cycle, topological_order};
