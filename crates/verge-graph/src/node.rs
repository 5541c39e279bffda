//! Node storage for the vertex-use graph.

use slotmap::new_key_type;

use crate::coord::Point3;

new_key_type! {
    /// Handle to a node (one directed vertex use) in a [`Graph`](crate::Graph).
    ///
    /// Handles are only meaningful for the graph that created them.
    pub struct NodeId;
}

/// One directed use of a vertex: a node sits at a vertex, on one side of one
/// edge, inside one face cycle.
///
/// Only the two successor pointers are stored. Everything else (edge mate,
/// face predecessor, vertex predecessor) is derived from them in O(1).
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Next node counterclockwise around this node's face cycle.
    pub face_next: NodeId,
    /// Next node around this node's vertex cycle.
    pub vertex_next: NodeId,
    /// Parameter-space coordinates of the vertex this node sits at.
    pub coord: Point3,
    /// Stable integer identity, assigned sequentially at creation. Survives
    /// any amount of structural surgery and is what diagnostics print.
    pub id: u32,
    /// Set on every node of an exterior (boundary) face.
    pub exterior: bool,
}
