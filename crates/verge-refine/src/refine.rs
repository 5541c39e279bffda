//! Priority-driven edge-split refinement.
//!
//! One pass over the graph in three stages. Selection scores every
//! undirected edge once and queues the positive ones. Application drains
//! the queue best-first, splitting an edge only when neither incident face
//! has been touched this pass. Closure re-triangulates the quadrilaterals
//! the splits left behind. Rejected candidates are dropped silently; a
//! candidate that loses its faces to a higher-priority neighbor simply
//! waits for the caller's next pass.

use verge_graph::{NodeMask, VertexUseGraph};

use crate::heap::CandidateHeap;

/// Application-supplied behavior for a refinement pass.
///
/// The pass owns the traversal order and the once-per-edge / once-per-face
/// bookkeeping; the hooks own the geometry.
pub trait RefineHooks<G: VertexUseGraph> {
    /// Score the undirected edge represented by `edge`.
    ///
    /// Values at or below zero mean "not a candidate". The graph is borrowed
    /// immutably, so scoring cannot restructure anything. Called exactly
    /// once per undirected edge per pass.
    fn score(&self, graph: &G, edge: G::Node) -> f64;

    /// Split `edge`'s edge, typically at a surface midpoint.
    ///
    /// Returns the two new nodes the split produced (one per side, each at
    /// the new vertex), or `None` to decline; declining is not an error and
    /// simply drops the candidate for this pass.
    fn split(&mut self, graph: &mut G, edge: G::Node) -> Option<(G::Node, G::Node)>;

    /// Observe a freshly inserted edge.
    ///
    /// Runs after every structural join the engine performs, with the two
    /// pre-existing endpoint nodes and the two nodes the join created.
    /// Typical use is propagating per-node attributes kept outside the
    /// graph.
    fn on_join(
        &mut self,
        graph: &mut G,
        old_a: G::Node,
        old_b: G::Node,
        new_a: G::Node,
        new_b: G::Node,
    );

    /// Reserved for a post-split edge-flip stage; the pass never calls it
    /// today and no flipping occurs.
    fn should_flip(&self, _graph: &G, _edge: G::Node) -> bool {
        false
    }
}

/// Counters for one refinement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefineStats {
    /// Edges actually split.
    pub edges_split: usize,
    /// Candidates that scored positive and entered the queue.
    pub candidates_enqueued: usize,
    /// Queued candidates dropped at application time (face already
    /// modified, or the split hook declined).
    pub candidates_skipped: usize,
}

/// Run one refinement pass over the whole graph.
///
/// Visits every node once, scores each undirected edge once, splits the
/// highest-scoring edges first (at most one split per face per pass), then
/// closes the split faces back into triangles. Checked-out masks and
/// arrays are returned on every path.
///
/// # Returns
///
/// Counters for the pass; `edges_split` is zero when the graph is empty or
/// nothing scored positive, which makes a drained graph a fixpoint.
pub fn refine<G, H>(graph: &mut G, hooks: &mut H) -> RefineStats
where
    G: VertexUseGraph,
    H: RefineHooks<G>,
{
    let mut stats = RefineStats::default();
    let mut considered = graph.grab_mask();
    let mut modified = graph.grab_mask();
    let mut nodes = graph.grab_node_array();
    let mut split_sides = graph.grab_node_array();
    let mut heap = CandidateHeap::new();

    // Selection: each undirected edge is scored through one representative
    // side; marking both sides keeps the other representative out.
    graph.collect_nodes(&mut nodes);
    for &node in nodes.iter() {
        let mate = graph.edge_mate(node);
        if considered.has(node) || considered.has(mate) {
            continue;
        }
        let score = hooks.score(graph, node);
        considered.set(node);
        considered.set(mate);
        if score > 0.0 {
            heap.push(node, score);
            stats.candidates_enqueued += 1;
        }
    }
    trace_refine!(
        "refine: {} candidates from {} nodes",
        stats.candidates_enqueued,
        nodes.len()
    );

    // Application: best first, one mutation per face per pass.
    while let Some(candidate) = heap.pop() {
        let node = candidate.node;
        let mate = graph.edge_mate(node);
        if modified.has(node) || modified.has(mate) {
            stats.candidates_skipped += 1;
            continue;
        }
        match hooks.split(graph, node) {
            Some((near, far)) => {
                mark_face(graph, &mut modified, near);
                mark_face(graph, &mut modified, far);
                split_sides.push(near);
                split_sides.push(far);
                stats.edges_split += 1;
            }
            None => {
                stats.candidates_skipped += 1;
            }
        }
    }

    // Closure: connect each recorded split node across its face, leaving
    // exterior sides open.
    for &node in split_sides.iter() {
        if graph.is_exterior(node) {
            continue;
        }
        let across = graph.face_succ(graph.face_succ(node));
        let (new_a, new_b) = graph.join(node, across);
        hooks.on_join(graph, node, across, new_a, new_b);
    }
    trace_refine!(
        "refine: split {} edges, skipped {}",
        stats.edges_split,
        stats.candidates_skipped
    );

    graph.return_node_array(split_sides);
    graph.return_node_array(nodes);
    graph.return_mask(modified);
    graph.return_mask(considered);
    stats
}

fn mark_face<G: VertexUseGraph>(graph: &G, mask: &mut G::Mask, seed: G::Node) {
    let mut cur = seed;
    loop {
        mask.set(cur);
        cur = graph.face_succ(cur);
        if cur == seed {
            break;
        }
    }
}
