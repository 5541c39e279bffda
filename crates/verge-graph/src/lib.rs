#![warn(missing_docs)]

//! Vertex-use planar graph for the verge meshing engine.
//!
//! A mesh is represented as a set of *vertex uses*: one node per vertex, per
//! side, per edge. Two stored successor permutations (around the face and
//! around the vertex) encode the whole topology; the edge mate, face
//! predecessor, and vertex predecessor are derived from them in O(1). The
//! representation tolerates every intermediate shape the meshing passes move
//! through — multi-edges, slings, faces of any size — and two local
//! primitives ([`Graph::split_edge`] and [`Graph::join`]) perform all
//! structural surgery.
//!
//! Algorithms that only need traversal, seam coordinates, the join
//! primitive, and pooled scratch flags are written against the
//! [`VertexUseGraph`] trait instead of the concrete [`Graph`], so they can
//! be driven by a scripted stand-in under test.

mod coord;
mod error;
mod graph;
mod mask;
mod node;
mod summary;

pub use coord::{normalize_to_period, periodic_distance, Axis, Point3, Vec3};
pub use error::GraphError;
pub use graph::Graph;
pub use mask::{Mask, NodeMask};
pub use node::NodeId;
pub use summary::GraphSummary;

use std::fmt::Debug;

/// The graph surface consumed by the refinement and stitching passes.
///
/// The contract is deliberately narrow: cycle traversal, the seam
/// coordinate, the exterior test, edge insertion via `join`, and checkout /
/// return of pooled scratch resources. [`Graph`] implements it; unit tests
/// of the passes implement it on minimal scripted graphs.
pub trait VertexUseGraph {
    /// Node handle. Carries the node's identity.
    type Node: Copy + Eq + Debug;
    /// Checked-out per-node flag set.
    type Mask: NodeMask<Self::Node>;

    /// Next node counterclockwise around the face.
    fn face_succ(&self, node: Self::Node) -> Self::Node;
    /// Previous node around the face.
    fn face_pred(&self, node: Self::Node) -> Self::Node;
    /// Next node around the vertex.
    fn vertex_succ(&self, node: Self::Node) -> Self::Node;
    /// The node on the far side of the same edge.
    fn edge_mate(&self, node: Self::Node) -> Self::Node;
    /// Scalar used for periodic ordering of this node's vertex.
    fn seam_coord(&self, node: Self::Node) -> f64;
    /// True if the node lies in an exterior (boundary) face.
    fn is_exterior(&self, node: Self::Node) -> bool;

    /// Insert a new edge between the vertices under `a` and `b`; returns
    /// the two new nodes, the first at `a`'s vertex and the second at
    /// `b`'s.
    fn join(&mut self, a: Self::Node, b: Self::Node) -> (Self::Node, Self::Node);

    /// Append every node handle to `out`.
    fn collect_nodes(&self, out: &mut Vec<Self::Node>);

    /// Check a cleared mask out of the pool.
    fn grab_mask(&mut self) -> Self::Mask;
    /// Return a mask to the pool.
    fn return_mask(&mut self, mask: Self::Mask);
    /// Check an empty node array out of the pool.
    fn grab_node_array(&mut self) -> Vec<Self::Node>;
    /// Return a node array to the pool.
    fn return_node_array(&mut self, array: Vec<Self::Node>);

    /// Number of nodes in `seed`'s face cycle.
    fn face_loop_len(&self, seed: Self::Node) -> usize {
        let mut len = 1;
        let mut cur = self.face_succ(seed);
        while cur != seed {
            len += 1;
            cur = self.face_succ(cur);
        }
        len
    }
}

impl VertexUseGraph for Graph {
    type Node = NodeId;
    type Mask = Mask;

    fn face_succ(&self, node: NodeId) -> NodeId {
        Graph::face_succ(self, node)
    }

    fn face_pred(&self, node: NodeId) -> NodeId {
        Graph::face_pred(self, node)
    }

    fn vertex_succ(&self, node: NodeId) -> NodeId {
        Graph::vertex_succ(self, node)
    }

    fn edge_mate(&self, node: NodeId) -> NodeId {
        Graph::edge_mate(self, node)
    }

    fn seam_coord(&self, node: NodeId) -> f64 {
        Graph::seam_coord(self, node)
    }

    fn is_exterior(&self, node: NodeId) -> bool {
        Graph::is_exterior(self, node)
    }

    fn join(&mut self, a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        Graph::join(self, a, b)
    }

    fn collect_nodes(&self, out: &mut Vec<NodeId>) {
        Graph::collect_nodes(self, out);
    }

    fn grab_mask(&mut self) -> Mask {
        Graph::grab_mask(self)
    }

    fn return_mask(&mut self, mask: Mask) {
        Graph::return_mask(self, mask);
    }

    fn grab_node_array(&mut self) -> Vec<NodeId> {
        Graph::grab_node_array(self)
    }

    fn return_node_array(&mut self, array: Vec<NodeId>) {
        Graph::return_node_array(self, array);
    }

    fn face_loop_len(&self, seed: NodeId) -> usize {
        Graph::face_loop_len(self, seed)
    }
}
