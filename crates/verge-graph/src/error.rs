//! Error types for graph construction and validation.

use thiserror::Error;

/// Errors that can occur building or validating a vertex-use graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A loop was requested from an empty point list.
    #[error("a loop requires at least one point")]
    EmptyLoop,

    /// A successor pointer leads to a slot that is not a live node.
    #[error("node {node} has a dangling {cycle} successor")]
    Dangling {
        /// Stable id of the offending node.
        node: u32,
        /// Which cycle the pointer belongs to ("face" or "vertex").
        cycle: &'static str,
    },

    /// The edge-mate derivation failed to come back to the starting node,
    /// or a node came out as its own mate.
    #[error("edge mate of node {node} is not an involution")]
    MateInvolution {
        /// Stable id of the offending node.
        node: u32,
    },

    /// A node is the successor of `count` nodes instead of exactly one, so
    /// the cycle pointers no longer form a permutation.
    #[error("node {node} is the {cycle} successor of {count} nodes")]
    BrokenCycle {
        /// Stable id of the offending node.
        node: u32,
        /// Number of predecessors found.
        count: usize,
        /// Which cycle the pointer belongs to ("face" or "vertex").
        cycle: &'static str,
    },
}
