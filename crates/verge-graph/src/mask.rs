//! Reusable per-node flag sets.
//!
//! Algorithms over the graph routinely need one or two scratch booleans per
//! node (visited, considered, modified). Rather than allocating fresh storage
//! for every pass, a graph keeps a pool of [`Mask`]s: a pass checks one out
//! with [`Graph::grab_mask`](crate::Graph::grab_mask), uses it, and hands it
//! back with [`Graph::return_mask`](crate::Graph::return_mask). Masks are
//! handed out with every bit clear and are cleared again when returned, so a
//! leaked mask costs memory but never corrupts a later pass.

use slotmap::SecondaryMap;

use crate::node::NodeId;

/// Boolean flag per node, queried and updated through [`NodeMask`].
///
/// A `Mask` owns its storage and does not borrow the graph, so several masks
/// can be live while the graph itself is being mutated. Nodes created after
/// checkout simply read as unset.
#[derive(Debug, Default)]
pub struct Mask {
    bits: SecondaryMap<NodeId, bool>,
}

impl Mask {
    pub(crate) fn reset(&mut self) {
        self.bits.clear();
    }
}

/// Set/clear/test interface shared by [`Mask`] and by test doubles.
pub trait NodeMask<N> {
    /// Set the flag on `node`.
    fn set(&mut self, node: N);
    /// Clear the flag on `node`.
    fn clear(&mut self, node: N);
    /// True if the flag is set on `node`.
    fn has(&self, node: N) -> bool;
}

impl NodeMask<NodeId> for Mask {
    fn set(&mut self, node: NodeId) {
        self.bits.insert(node, true);
    }

    fn clear(&mut self, node: NodeId) {
        self.bits.remove(node);
    }

    fn has(&self, node: NodeId) -> bool {
        self.bits.get(node).copied().unwrap_or(false)
    }
}
