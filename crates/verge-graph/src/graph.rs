//! The vertex-use graph.
//!
//! A planar mesh is stored as a set of *nodes*, each one directed use of a
//! vertex. Two permutations of the node set are stored per node:
//!
//! * `face_next` — the next node counterclockwise around the same face;
//! * `vertex_next` — the next node around the same vertex.
//!
//! Everything else is derived. The far side of a node's edge is the
//! vertex-successor of its face-successor, the face predecessor is the edge
//! mate of the vertex successor, and the vertex predecessor is the face
//! successor of the edge mate. As long as the two stored permutations stay
//! consistent, every derived lookup is O(1) and total.
//!
//! Structural surgery happens through two primitives. [`Graph::split_edge`]
//! replaces one edge with two edges meeting at a new vertex.
//! [`Graph::join`] inserts a new edge between the vertices of two existing
//! nodes: if the nodes share a face cycle the face is cut in two, and if
//! they sit in different cycles the cycles merge into one. Both keep the
//! permutations consistent without any global fixup.

use slotmap::{SecondaryMap, SlotMap};

use crate::coord::{normalize_to_period, Axis, Point3, Vec3};
use crate::error::GraphError;
use crate::mask::Mask;
use crate::node::{Node, NodeId};

/// Planar vertex-use graph with pooled scratch resources.
///
/// Node handles are stable: nodes are never deleted, only created by the
/// structural primitives. Passing a handle from a different graph is a
/// contract violation and may panic.
#[derive(Debug)]
pub struct Graph {
    nodes: SlotMap<NodeId, Node>,
    periods: Vec3,
    seam_axis: Axis,
    next_id: u32,
    mask_pool: Vec<Mask>,
    array_pool: Vec<Vec<NodeId>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty graph with no periodic axes and seam axis Z.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            periods: Vec3::zeros(),
            seam_axis: Axis::Z,
            next_id: 0,
            mask_pool: Vec::new(),
            array_pool: Vec::new(),
        }
    }

    fn alloc(&mut self, coord: Point3, exterior: bool) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert_with_key(|key| Node {
            face_next: key,
            vertex_next: key,
            coord,
            id,
            exterior,
        })
    }

    /// Number of nodes. Every edge contributes exactly two, one per side.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all node handles in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys()
    }

    /// Append every node handle to `out` in creation order.
    pub fn collect_nodes(&self, out: &mut Vec<NodeId>) {
        out.extend(self.nodes.keys());
    }

    /// Stable integer id of a node, as printed by diagnostics.
    pub fn node_id(&self, node: NodeId) -> u32 {
        self.nodes[node].id
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Next node counterclockwise around the face.
    pub fn face_succ(&self, node: NodeId) -> NodeId {
        self.nodes[node].face_next
    }

    /// Next node around the vertex.
    pub fn vertex_succ(&self, node: NodeId) -> NodeId {
        self.nodes[node].vertex_next
    }

    /// The node on the far side of the same edge, at the other end.
    pub fn edge_mate(&self, node: NodeId) -> NodeId {
        self.vertex_succ(self.face_succ(node))
    }

    /// Previous node around the face (inverse of [`Graph::face_succ`]).
    pub fn face_pred(&self, node: NodeId) -> NodeId {
        self.edge_mate(self.vertex_succ(node))
    }

    /// Previous node around the vertex (inverse of [`Graph::vertex_succ`]).
    pub fn vertex_pred(&self, node: NodeId) -> NodeId {
        self.face_succ(self.edge_mate(node))
    }

    /// Number of nodes in `seed`'s face cycle.
    pub fn face_loop_len(&self, seed: NodeId) -> usize {
        let mut len = 1;
        let mut cur = self.face_succ(seed);
        while cur != seed {
            len += 1;
            cur = self.face_succ(cur);
        }
        len
    }

    /// Number of distinct face cycles in the graph.
    pub fn face_count(&self) -> usize {
        let mut seen: SecondaryMap<NodeId, ()> = SecondaryMap::new();
        let mut count = 0;
        for seed in self.nodes.keys() {
            if seen.contains_key(seed) {
                continue;
            }
            count += 1;
            let mut cur = seed;
            loop {
                seen.insert(cur, ());
                cur = self.face_succ(cur);
                if cur == seed {
                    break;
                }
            }
        }
        count
    }

    // ------------------------------------------------------------------
    // Coordinates
    // ------------------------------------------------------------------

    /// Parameter-space coordinates of the vertex under `node`.
    pub fn coord(&self, node: NodeId) -> Point3 {
        self.nodes[node].coord
    }

    /// Set the coordinates of this node only.
    ///
    /// Other uses of the same vertex keep their coordinates, which is what
    /// periodic seams want: the same vertex can legitimately carry the two
    /// wrapped representations on its two sides. Use
    /// [`Graph::set_coord_around_vertex`] to move a vertex as a whole.
    pub fn set_coord(&mut self, node: NodeId, coord: Point3) {
        self.nodes[node].coord = coord;
    }

    /// Set the coordinates on every use of the vertex under `node`.
    pub fn set_coord_around_vertex(&mut self, node: NodeId, coord: Point3) {
        let mut cur = node;
        loop {
            self.nodes[cur].coord = coord;
            cur = self.vertex_succ(cur);
            if cur == node {
                break;
            }
        }
    }

    /// Per-axis wrap lengths; `0.0` on an axis means no wrapping.
    pub fn periods(&self) -> Vec3 {
        self.periods
    }

    /// Set the per-axis wrap lengths.
    pub fn set_periods(&mut self, periods: Vec3) {
        self.periods = periods;
    }

    /// Which coordinate axis carries the seam (periodic ordering) value.
    pub fn seam_axis(&self) -> Axis {
        self.seam_axis
    }

    /// Select the coordinate axis read by [`Graph::seam_coord`].
    pub fn set_seam_axis(&mut self, axis: Axis) {
        self.seam_axis = axis;
    }

    /// The scalar used for periodic ordering of this node's vertex.
    pub fn seam_coord(&self, node: NodeId) -> f64 {
        self.nodes[node].coord[self.seam_axis.index()]
    }

    /// Vector from `a`'s vertex to `b`'s vertex with every periodic axis
    /// normalized to its shortest representation.
    pub fn periodic_vector(&self, a: NodeId, b: NodeId) -> Vec3 {
        let mut delta = self.coord(b) - self.coord(a);
        for axis in 0..3 {
            delta[axis] = normalize_to_period(delta[axis], self.periods[axis]);
        }
        delta
    }

    // ------------------------------------------------------------------
    // Exterior marking
    // ------------------------------------------------------------------

    /// True if this node lies in a face marked exterior.
    pub fn is_exterior(&self, node: NodeId) -> bool {
        self.nodes[node].exterior
    }

    /// Mark every node of `seed`'s face cycle as exterior.
    ///
    /// Structural primitives propagate the flag: a node created inside an
    /// exterior face is born exterior.
    pub fn set_exterior_around_face(&mut self, seed: NodeId) {
        let mut cur = seed;
        loop {
            self.nodes[cur].exterior = true;
            cur = self.face_succ(cur);
            if cur == seed {
                break;
            }
        }
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create an isolated edge between two new vertices.
    ///
    /// Returns the two sides of the edge; they are each other's edge mates
    /// and together form a single two-node face cycle wrapping the edge.
    pub fn make_pair(&mut self, coord_a: Point3, coord_b: Point3) -> (NodeId, NodeId) {
        let a = self.alloc(coord_a, false);
        let b = self.alloc(coord_b, false);
        self.nodes[a].face_next = b;
        self.nodes[b].face_next = a;
        // Each vertex has a single use, so the vertex cycles are trivial
        // and mate(a) = vertex_next(face_next(a)) = vertex_next(b) = b.
        (a, b)
    }

    /// Create a closed loop of edges through `points`, in order.
    ///
    /// Returns the seed node of the face cycle that traverses the points in
    /// argument order; the edge mate of the seed belongs to the reversed
    /// cycle on the other side of the loop. A single point yields a sling
    /// (one edge from the vertex back to itself).
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyLoop`] if `points` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use verge_graph::{Graph, Point3};
    ///
    /// let mut graph = Graph::new();
    /// let quad = graph
    ///     .make_loop(&[
    ///         Point3::new(0.0, 0.0, 0.0),
    ///         Point3::new(1.0, 0.0, 0.0),
    ///         Point3::new(1.0, 1.0, 0.0),
    ///         Point3::new(0.0, 1.0, 0.0),
    ///     ])
    ///     .unwrap();
    /// assert_eq!(graph.face_loop_len(quad), 4);
    /// assert_eq!(graph.face_loop_len(graph.edge_mate(quad)), 4);
    /// ```
    pub fn make_loop(&mut self, points: &[Point3]) -> Result<NodeId, GraphError> {
        if points.is_empty() {
            return Err(GraphError::EmptyLoop);
        }
        let n = points.len();
        let mut inner = Vec::with_capacity(n);
        let mut outer = Vec::with_capacity(n);
        for i in 0..n {
            inner.push(self.alloc(points[i], false));
        }
        for i in 0..n {
            outer.push(self.alloc(points[(i + 1) % n], false));
        }
        for i in 0..n {
            let next = (i + 1) % n;
            let prev = (i + n - 1) % n;
            self.nodes[inner[i]].face_next = inner[next];
            self.nodes[outer[i]].face_next = outer[prev];
            self.nodes[inner[i]].vertex_next = outer[prev];
            self.nodes[outer[i]].vertex_next = inner[next];
        }
        Ok(inner[0])
    }

    // ------------------------------------------------------------------
    // Structural surgery
    // ------------------------------------------------------------------

    /// Split `node`'s edge at a new vertex with the given coordinates.
    ///
    /// The edge is replaced by two edges meeting at the new vertex. Both
    /// incident face cycles grow by one node.
    ///
    /// # Returns
    ///
    /// `(nl, nr)` where `nl` is the new node following `node` in its face
    /// cycle and `nr` is the new node following `node`'s edge mate in its
    /// face cycle. Both sit at the new vertex. `node` is now mated with
    /// `nr` across the near half of the edge, and `nl` with the old mate
    /// across the far half. Each new node inherits the exterior flag of the
    /// side it lands in.
    ///
    /// # Example
    ///
    /// ```
    /// use verge_graph::{Graph, Point3};
    ///
    /// let mut graph = Graph::new();
    /// let (a, b) = graph.make_pair(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
    /// let (nl, nr) = graph.split_edge(a, Point3::new(1.0, 0.0, 0.0));
    /// assert_eq!(graph.face_loop_len(a), 4);
    /// assert_eq!(graph.edge_mate(a), nr);
    /// assert_eq!(graph.edge_mate(nl), b);
    /// ```
    pub fn split_edge(&mut self, node: NodeId, coord: Point3) -> (NodeId, NodeId) {
        let mate = self.edge_mate(node);
        let after_node = self.nodes[node].face_next;
        let after_mate = self.nodes[mate].face_next;
        let nl = self.alloc(coord, self.nodes[node].exterior);
        let nr = self.alloc(coord, self.nodes[mate].exterior);

        self.nodes[node].face_next = nl;
        self.nodes[nl].face_next = after_node;
        self.nodes[mate].face_next = nr;
        self.nodes[nr].face_next = after_mate;
        // The new vertex has exactly the two new uses.
        self.nodes[nl].vertex_next = nr;
        self.nodes[nr].vertex_next = nl;
        (nl, nr)
    }

    /// Insert a new edge between the vertices under `a` and `b`.
    ///
    /// If `a` and `b` share a face cycle, that face is cut in two along the
    /// new edge. If they sit in different face cycles, the two cycles merge
    /// into one. `a` and `b` select not just the vertices but the sectors
    /// the new edge is wedged into, so the caller controls which face is
    /// affected when a vertex has several uses. The two nodes must be
    /// distinct.
    ///
    /// # Returns
    ///
    /// `(na, nb)`: `na` sits at `a`'s vertex directed toward `b`'s vertex
    /// and ends up in the cycle that continues with `b`; `nb` sits at `b`'s
    /// vertex directed toward `a`'s vertex and ends up in the cycle that
    /// continues with `a`. Both inherit the coordinates of the vertex they
    /// sit at.
    ///
    /// # Example
    ///
    /// ```
    /// use verge_graph::{Graph, Point3};
    ///
    /// let mut graph = Graph::new();
    /// let quad = graph
    ///     .make_loop(&[
    ///         Point3::new(0.0, 0.0, 0.0),
    ///         Point3::new(1.0, 0.0, 0.0),
    ///         Point3::new(1.0, 1.0, 0.0),
    ///         Point3::new(0.0, 1.0, 0.0),
    ///     ])
    ///     .unwrap();
    /// // Cut along a diagonal: both sides become triangles.
    /// let opposite = graph.face_succ(graph.face_succ(quad));
    /// let (na, _nb) = graph.join(quad, opposite);
    /// assert_eq!(graph.face_loop_len(quad), 3);
    /// assert_eq!(graph.face_loop_len(na), 3);
    /// ```
    pub fn join(&mut self, a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        debug_assert_ne!(a, b, "join requires two distinct nodes");
        let pred_a = self.face_pred(a);
        let pred_b = self.face_pred(b);
        let vs_a = self.nodes[a].vertex_next;
        let vs_b = self.nodes[b].vertex_next;
        let na = self.alloc(self.nodes[a].coord, self.nodes[b].exterior);
        let nb = self.alloc(self.nodes[b].coord, self.nodes[a].exterior);

        self.nodes[pred_a].face_next = na;
        self.nodes[na].face_next = b;
        self.nodes[pred_b].face_next = nb;
        self.nodes[nb].face_next = a;
        // Wedge the new uses into the vertex cycles right after a and b;
        // this is forced by mate(na) = vertex_next(b) and mate(nb) =
        // vertex_next(a).
        self.nodes[na].vertex_next = vs_a;
        self.nodes[a].vertex_next = na;
        self.nodes[nb].vertex_next = vs_b;
        self.nodes[b].vertex_next = nb;
        (na, nb)
    }

    // ------------------------------------------------------------------
    // Pooled scratch resources
    // ------------------------------------------------------------------

    /// Check a mask out of the pool. All bits are clear.
    ///
    /// Pair every grab with a [`Graph::return_mask`] on every path out of
    /// the pass, success or failure.
    pub fn grab_mask(&mut self) -> Mask {
        self.mask_pool.pop().unwrap_or_default()
    }

    /// Return a mask to the pool. The mask is cleared here, so the next
    /// checkout starts blank no matter what the pass left behind.
    pub fn return_mask(&mut self, mut mask: Mask) {
        mask.reset();
        self.mask_pool.push(mask);
    }

    /// Number of masks currently resting in the pool.
    pub fn pooled_masks(&self) -> usize {
        self.mask_pool.len()
    }

    /// Check a node array out of the pool. The array is empty.
    pub fn grab_node_array(&mut self) -> Vec<NodeId> {
        self.array_pool.pop().unwrap_or_default()
    }

    /// Return a node array to the pool, keeping its allocation.
    pub fn return_node_array(&mut self, mut array: Vec<NodeId>) {
        array.clear();
        self.array_pool.push(array);
    }

    /// Number of node arrays currently resting in the pool.
    pub fn pooled_arrays(&self) -> usize {
        self.array_pool.len()
    }

    // ------------------------------------------------------------------
    // Verification
    // ------------------------------------------------------------------

    /// Check that the stored pointers still form a consistent vertex-use
    /// structure.
    ///
    /// # Errors
    ///
    /// The first violation found: a dangling successor, a node with a
    /// predecessor count other than one in either cycle, or an edge-mate
    /// derivation that is not a fixpoint-free involution.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut face_preds: SecondaryMap<NodeId, usize> = SecondaryMap::new();
        let mut vertex_preds: SecondaryMap<NodeId, usize> = SecondaryMap::new();
        for node in self.nodes.values() {
            if !self.nodes.contains_key(node.face_next) {
                return Err(GraphError::Dangling {
                    node: node.id,
                    cycle: "face",
                });
            }
            if !self.nodes.contains_key(node.vertex_next) {
                return Err(GraphError::Dangling {
                    node: node.id,
                    cycle: "vertex",
                });
            }
            let seen = face_preds.get(node.face_next).copied().unwrap_or(0);
            face_preds.insert(node.face_next, seen + 1);
            let seen = vertex_preds.get(node.vertex_next).copied().unwrap_or(0);
            vertex_preds.insert(node.vertex_next, seen + 1);
        }
        for (key, node) in self.nodes.iter() {
            let nf = face_preds.get(key).copied().unwrap_or(0);
            if nf != 1 {
                return Err(GraphError::BrokenCycle {
                    node: node.id,
                    count: nf,
                    cycle: "face",
                });
            }
            let nv = vertex_preds.get(key).copied().unwrap_or(0);
            if nv != 1 {
                return Err(GraphError::BrokenCycle {
                    node: node.id,
                    count: nv,
                    cycle: "vertex",
                });
            }
        }
        for (key, node) in self.nodes.iter() {
            let mate = self.edge_mate(key);
            if mate == key || self.edge_mate(mate) != key {
                return Err(GraphError::MateInvolution { node: node.id });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(graph: &mut Graph) -> NodeId {
        graph
            .make_loop(&[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ])
            .unwrap()
    }

    fn loop_ids(graph: &Graph, seed: NodeId) -> Vec<u32> {
        let mut ids = vec![graph.node_id(seed)];
        let mut cur = graph.face_succ(seed);
        while cur != seed {
            ids.push(graph.node_id(cur));
            cur = graph.face_succ(cur);
        }
        ids
    }

    #[test]
    fn test_make_pair_topology() {
        let mut graph = Graph::new();
        let (a, b) = graph.make_pair(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(graph.edge_mate(a), b);
        assert_eq!(graph.edge_mate(b), a);
        assert_eq!(graph.face_loop_len(a), 2);
        assert_eq!(graph.vertex_succ(a), a);
        assert_eq!(graph.face_pred(a), b);
        graph.validate().unwrap();
    }

    #[test]
    fn test_make_loop_rejects_empty() {
        let mut graph = Graph::new();
        assert!(matches!(graph.make_loop(&[]), Err(GraphError::EmptyLoop)));
    }

    #[test]
    fn test_make_loop_cycles() {
        let mut graph = Graph::new();
        let seed = square(&mut graph);
        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.face_count(), 2);
        assert_eq!(graph.face_loop_len(seed), 4);
        assert_eq!(graph.face_loop_len(graph.edge_mate(seed)), 4);
        // face_pred inverts face_succ all the way around.
        let mut cur = seed;
        for _ in 0..4 {
            let next = graph.face_succ(cur);
            assert_eq!(graph.face_pred(next), cur);
            cur = next;
        }
        // Every vertex carries exactly two uses.
        for node in graph.node_ids().collect::<Vec<_>>() {
            assert_eq!(graph.vertex_succ(graph.vertex_succ(node)), node);
            assert_ne!(graph.vertex_succ(node), node);
        }
        graph.validate().unwrap();
    }

    #[test]
    fn test_single_point_loop_is_sling() {
        let mut graph = Graph::new();
        let seed = graph.make_loop(&[Point3::origin()]).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.face_loop_len(seed), 1);
        assert_eq!(graph.face_loop_len(graph.edge_mate(seed)), 1);
        graph.validate().unwrap();
    }

    #[test]
    fn test_split_edge_grows_both_sides() {
        let mut graph = Graph::new();
        let seed = square(&mut graph);
        let outer = graph.edge_mate(seed);
        let (nl, nr) = graph.split_edge(seed, Point3::new(0.5, 0.0, 0.0));
        assert_eq!(graph.face_loop_len(seed), 5);
        assert_eq!(graph.face_loop_len(outer), 5);
        assert_eq!(graph.face_succ(seed), nl);
        assert_eq!(graph.edge_mate(seed), nr);
        assert_eq!(graph.edge_mate(nl), outer);
        assert_eq!(graph.coord(nl), Point3::new(0.5, 0.0, 0.0));
        assert_eq!(graph.coord(nr), Point3::new(0.5, 0.0, 0.0));
        graph.validate().unwrap();
    }

    #[test]
    fn test_split_edge_keeps_exterior_sides() {
        let mut graph = Graph::new();
        let seed = square(&mut graph);
        let outer = graph.edge_mate(seed);
        graph.set_exterior_around_face(outer);
        let (nl, nr) = graph.split_edge(seed, Point3::new(0.5, 0.0, 0.0));
        assert!(!graph.is_exterior(nl));
        assert!(graph.is_exterior(nr));
        graph.validate().unwrap();
    }

    #[test]
    fn test_join_diagonal_cuts_face() {
        let mut graph = Graph::new();
        let seed = square(&mut graph);
        let opposite = graph.face_succ(graph.face_succ(seed));
        let before = graph.face_count();
        let (na, nb) = graph.join(seed, opposite);
        assert_eq!(graph.face_count(), before + 1);
        assert_eq!(graph.face_loop_len(seed), 3);
        assert_eq!(graph.face_loop_len(na), 3);
        assert_eq!(graph.edge_mate(na), nb);
        assert_eq!(graph.coord(na), graph.coord(seed));
        assert_eq!(graph.coord(nb), graph.coord(opposite));
        // The new uses were wedged into the vertex cycles.
        assert_eq!(graph.vertex_succ(seed), na);
        assert_eq!(graph.vertex_succ(opposite), nb);
        graph.validate().unwrap();
    }

    #[test]
    fn test_join_merges_disjoint_cycles() {
        let mut graph = Graph::new();
        let first = graph
            .make_loop(&[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.5, 1.0, 0.0),
            ])
            .unwrap();
        let second = graph
            .make_loop(&[
                Point3::new(3.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(3.5, 1.0, 0.0),
            ])
            .unwrap();
        let before = graph.face_count();
        let (na, nb) = graph.join(first, second);
        // Two cycles became one; the strut is walkable in both directions.
        assert_eq!(graph.face_count(), before - 1);
        assert_eq!(graph.face_loop_len(first), 3 + 3 + 2);
        assert_eq!(graph.edge_mate(na), nb);
        graph.validate().unwrap();
    }

    #[test]
    fn test_join_adjacent_makes_two_gon() {
        let mut graph = Graph::new();
        let seed = square(&mut graph);
        let next = graph.face_succ(seed);
        let (na, nb) = graph.join(seed, next);
        // The parallel edge pinches off a two-sided face with the original
        // edge; the ring keeps its four corners via the replacement node.
        assert_eq!(graph.face_loop_len(seed), 2);
        assert_eq!(graph.face_succ(nb), seed);
        assert_eq!(graph.face_loop_len(na), 4);
        graph.validate().unwrap();
    }

    #[test]
    fn test_ids_are_stable_across_surgery() {
        let mut graph = Graph::new();
        let seed = square(&mut graph);
        let ids_before = loop_ids(&graph, seed);
        let opposite = graph.face_succ(graph.face_succ(seed));
        graph.join(seed, opposite);
        assert_eq!(graph.node_id(seed), ids_before[0]);
        assert_eq!(graph.node_id(opposite), ids_before[2]);
        // New nodes continue the sequence rather than renumbering.
        assert_eq!(graph.node_count(), 10);
        let all: Vec<u32> = graph.node_ids().map(|n| graph.node_id(n)).collect();
        assert_eq!(all, (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_periodic_vector_wraps_seam() {
        let mut graph = Graph::new();
        graph.set_periods(Vec3::new(360.0, 0.0, 0.0));
        let (a, b) = graph.make_pair(
            Point3::new(350.0, 0.0, 0.0),
            Point3::new(10.0, 2.0, 0.0),
        );
        let delta = graph.periodic_vector(a, b);
        assert!((delta.x - 20.0).abs() < 1e-12);
        assert!((delta.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_seam_axis_selection() {
        let mut graph = Graph::new();
        graph.set_seam_axis(Axis::X);
        let (a, _) = graph.make_pair(Point3::new(7.0, 8.0, 9.0), Point3::origin());
        assert_eq!(graph.seam_coord(a), 7.0);
        graph.set_seam_axis(Axis::Z);
        assert_eq!(graph.seam_coord(a), 9.0);
    }

    #[test]
    fn test_node_array_pool_recycles() {
        let mut graph = Graph::new();
        square(&mut graph);
        let mut array = graph.grab_node_array();
        graph.collect_nodes(&mut array);
        assert_eq!(array.len(), 8);
        graph.return_node_array(array);
        let array = graph.grab_node_array();
        assert!(array.is_empty());
        graph.return_node_array(array);
        assert_eq!(graph.pooled_arrays(), 1);
    }

    #[test]
    fn test_validate_catches_broken_face_cycle() {
        let mut graph = Graph::new();
        let seed = square(&mut graph);
        let next = graph.face_succ(seed);
        // Short-circuit the face cycle past one node.
        let skip = graph.face_succ(next);
        graph.nodes[seed].face_next = skip;
        assert!(matches!(
            graph.validate(),
            Err(GraphError::BrokenCycle { cycle: "face", .. })
        ));
    }

    #[test]
    fn test_validate_catches_mate_fixpoint() {
        let mut graph = Graph::new();
        let (a, b) = graph.make_pair(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        // Swap the vertex pointers so each node becomes its own mate while
        // both cycles stay permutations.
        graph.nodes[a].vertex_next = b;
        graph.nodes[b].vertex_next = a;
        assert!(matches!(
            graph.validate(),
            Err(GraphError::MateInvolution { .. })
        ));
    }
}
