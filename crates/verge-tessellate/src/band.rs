//! Band tessellation for revolved surfaces.
//!
//! A band is the piece of surface between two rims at `t = 0` and `t = 1`.
//! The rims may carry different segment counts (a cone tessellated coarser
//! near its apex, a sphere zone against a cylinder), which is exactly the
//! case the cyclic stitcher exists for. The pipeline is: build the two rim
//! loops in `(theta, t)` parameter space, stitch the band closed across the
//! `2π` seam, then run chord-error refinement passes until every edge's
//! midpoint deviation is inside tolerance or the pass cap is hit.

use std::f64::consts::TAU;

use slotmap::SecondaryMap;
use thiserror::Error;
use verge_graph::{Axis, Graph, GraphError, NodeId, Point3, Vec3};
use verge_refine::{refine, stitch_cycles_by_period, RefineHooks, StitchError};

use crate::surface::RevolvedSurface;

/// Errors from band tessellation.
#[derive(Error, Debug)]
pub enum TessellateError {
    /// A rim needs at least three segments to enclose area.
    #[error("a rim needs at least 3 segments, got {0}")]
    TooFewSegments(u32),

    /// The chord tolerance must be a positive length.
    #[error("chord tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    /// The stitcher could not close the band.
    #[error(transparent)]
    Stitch(#[from] StitchError),

    /// Rim construction failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Quality knobs for [`tessellate_band`].
#[derive(Debug, Clone, Copy)]
pub struct BandOptions {
    /// Segments on the `t = 0` rim.
    pub rim_a_segments: u32,
    /// Segments on the `t = 1` rim.
    pub rim_b_segments: u32,
    /// Largest allowed midpoint deviation of a chord from the surface.
    pub chord_tolerance: f64,
    /// Cap on refinement passes; each pass splits every face at most once.
    pub max_refine_passes: u32,
}

impl Default for BandOptions {
    fn default() -> Self {
        Self {
            rim_a_segments: 32,
            rim_b_segments: 32,
            chord_tolerance: 0.05,
            max_refine_passes: 4,
        }
    }
}

impl BandOptions {
    /// Set the segment counts of the two rims.
    pub fn with_segments(mut self, rim_a: u32, rim_b: u32) -> Self {
        self.rim_a_segments = rim_a;
        self.rim_b_segments = rim_b;
        self
    }

    /// Set the chord tolerance driving refinement.
    pub fn with_chord_tolerance(mut self, tolerance: f64) -> Self {
        self.chord_tolerance = tolerance;
        self
    }

    /// Set the cap on refinement passes.
    pub fn with_max_refine_passes(mut self, passes: u32) -> Self {
        self.max_refine_passes = passes;
        self
    }
}

/// A tessellated band: the graph plus the counters the pipeline produced.
#[derive(Debug)]
pub struct Band {
    /// The stitched and refined parameter-space graph. Seam axis X wraps at
    /// `2π`; map nodes to 3D through the surface's evaluator.
    pub graph: Graph,
    /// Nodes on the `t = 0` rim before refinement.
    pub rim_a_len: usize,
    /// Nodes on the `t = 1` rim before refinement.
    pub rim_b_len: usize,
    /// Struts the stitcher inserted to close the band.
    pub struts_added: usize,
    /// Edges split by each refinement pass, in order.
    pub splits_per_pass: Vec<usize>,
    /// Outward unit normal per node, maintained across splits and joins.
    pub normals: SecondaryMap<NodeId, Vec3>,
}

/// Refinement hooks scoring edges by chordal deviation from a revolved
/// surface, carrying per-node normals as an external attribute.
pub struct ChordHooks<'a> {
    surface: &'a RevolvedSurface,
    tolerance: f64,
    /// Outward unit normal per node. Seeded by the caller for existing
    /// nodes; split and join keep it total over new nodes.
    pub normals: SecondaryMap<NodeId, Vec3>,
}

impl<'a> ChordHooks<'a> {
    /// Hooks for `surface` with the given chord tolerance.
    pub fn new(surface: &'a RevolvedSurface, tolerance: f64) -> Self {
        Self {
            surface,
            tolerance,
            normals: SecondaryMap::new(),
        }
    }

    /// Record the surface normal for every node currently in the graph.
    pub fn seed_normals(&mut self, graph: &Graph) {
        for node in graph.node_ids() {
            let p = graph.coord(node);
            self.normals.insert(node, self.surface.normal_at(p.x, p.y));
        }
    }
}

impl RefineHooks<Graph> for ChordHooks<'_> {
    fn score(&self, graph: &Graph, edge: NodeId) -> f64 {
        chord_deviation(graph, self.surface, edge) - self.tolerance
    }

    fn split(&mut self, graph: &mut Graph, edge: NodeId) -> Option<(NodeId, NodeId)> {
        let far = graph.edge_mate(edge);
        let mid = graph.coord(edge) + graph.periodic_vector(edge, far) * 0.5;
        let (nl, nr) = graph.split_edge(edge, mid);
        let normal = self.surface.normal_at(mid.x, mid.y);
        self.normals.insert(nl, normal);
        self.normals.insert(nr, normal);
        Some((nl, nr))
    }

    fn on_join(
        &mut self,
        _graph: &mut Graph,
        old_a: NodeId,
        old_b: NodeId,
        new_a: NodeId,
        new_b: NodeId,
    ) {
        // A joined node sits at an existing vertex; it shares that vertex's
        // normal.
        if let Some(normal) = self.normals.get(old_a).copied() {
            self.normals.insert(new_a, normal);
        }
        if let Some(normal) = self.normals.get(old_b).copied() {
            self.normals.insert(new_b, normal);
        }
    }
}

/// Midpoint deviation of `edge`'s 3D chord from the surface, measured at
/// the periodic parameter midpoint.
fn chord_deviation(graph: &Graph, surface: &RevolvedSurface, edge: NodeId) -> f64 {
    let far = graph.edge_mate(edge);
    let pa = graph.coord(edge);
    let pb = graph.coord(far);
    let mid = pa + graph.periodic_vector(edge, far) * 0.5;
    let chord_mid =
        (surface.point_at(pa.x, pa.y).coords + surface.point_at(pb.x, pb.y).coords) * 0.5;
    (surface.point_at(mid.x, mid.y).coords - chord_mid).norm()
}

/// Largest chord deviation over all edges of the graph.
pub fn max_chord_error(graph: &Graph, surface: &RevolvedSurface) -> f64 {
    let mut worst: f64 = 0.0;
    for node in graph.node_ids() {
        let mate = graph.edge_mate(node);
        if graph.node_id(node) < graph.node_id(mate) {
            worst = worst.max(chord_deviation(graph, surface, node));
        }
    }
    worst
}

/// Tessellate the band of `surface` between its two rims.
///
/// Builds one rim loop per segment count, closes the band with the cyclic
/// stitcher across the `2π` seam, then refines by chord error until a pass
/// splits nothing or [`BandOptions::max_refine_passes`] is reached. The two
/// rim caps are marked exterior and stay open.
///
/// # Errors
///
/// [`TessellateError::TooFewSegments`] or
/// [`TessellateError::InvalidTolerance`] for unusable options;
/// [`TessellateError::Stitch`] if the rims cannot be stitched.
///
/// # Example
///
/// ```
/// use verge_tessellate::{tessellate_band, BandOptions, RevolvedSurface};
///
/// let surface = RevolvedSurface::Cylinder { radius: 5.0, height: 2.0 };
/// let band = tessellate_band(&surface, &BandOptions::default()).unwrap();
/// assert_eq!(band.struts_added, 64);
/// band.graph.validate().unwrap();
/// ```
pub fn tessellate_band(
    surface: &RevolvedSurface,
    options: &BandOptions,
) -> Result<Band, TessellateError> {
    let fewest = options.rim_a_segments.min(options.rim_b_segments);
    if fewest < 3 {
        return Err(TessellateError::TooFewSegments(fewest));
    }
    if !(options.chord_tolerance > 0.0) {
        return Err(TessellateError::InvalidTolerance(options.chord_tolerance));
    }

    let mut graph = Graph::new();
    graph.set_seam_axis(Axis::X);
    graph.set_periods(Vec3::new(TAU, 0.0, 0.0));

    // Rim A winds theta up, rim B winds it down, so the band-facing cycles
    // sweep the seam in the same direction during the stitch walk.
    let rim_a = graph.make_loop(&rim_points(options.rim_a_segments, 0.0, false))?;
    let rim_b = graph.make_loop(&rim_points(options.rim_b_segments, 1.0, true))?;
    graph.set_exterior_around_face(graph.edge_mate(rim_a));
    graph.set_exterior_around_face(graph.edge_mate(rim_b));

    let mut hooks = ChordHooks::new(surface, options.chord_tolerance);
    hooks.seed_normals(&graph);

    let stitch = stitch_cycles_by_period(&mut graph, rim_a, rim_b, TAU, &mut hooks)?;

    let mut splits_per_pass = Vec::new();
    for _ in 0..options.max_refine_passes {
        let stats = refine(&mut graph, &mut hooks);
        splits_per_pass.push(stats.edges_split);
        if stats.edges_split == 0 {
            break;
        }
    }

    Ok(Band {
        graph,
        rim_a_len: stitch.loop_a_len,
        rim_b_len: stitch.loop_b_len,
        struts_added: stitch.struts_added,
        splits_per_pass,
        normals: hooks.normals,
    })
}

fn rim_points(segments: u32, t: f64, reversed: bool) -> Vec<Point3> {
    let n = segments as usize;
    (0..n)
        .map(|i| {
            let step = if reversed { (n - i) % n } else { i };
            let theta = step as f64 * TAU / n as f64;
            Point3::new(theta, t, 0.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cone() -> RevolvedSurface {
        RevolvedSurface::Cone {
            base_radius: 4.0,
            top_radius: 2.0,
            height: 3.0,
        }
    }

    #[test]
    fn test_rejects_too_few_segments() {
        let options = BandOptions::default().with_segments(2, 8);
        assert!(matches!(
            tessellate_band(&cone(), &options),
            Err(TessellateError::TooFewSegments(2))
        ));
    }

    #[test]
    fn test_rejects_nonpositive_tolerance() {
        let options = BandOptions::default().with_chord_tolerance(0.0);
        assert!(matches!(
            tessellate_band(&cone(), &options),
            Err(TessellateError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_mismatched_rims_stitch_and_refine() {
        let options = BandOptions::default()
            .with_segments(8, 5)
            .with_chord_tolerance(0.2)
            .with_max_refine_passes(8);
        let band = tessellate_band(&cone(), &options).unwrap();
        assert_eq!(band.rim_a_len, 8);
        assert_eq!(band.rim_b_len, 5);
        assert_eq!(band.struts_added, 13);
        band.graph.validate().unwrap();
        // The coarse rim violates the tolerance, so refinement did work and
        // then converged below it.
        assert!(band.splits_per_pass[0] > 0);
        assert_eq!(band.splits_per_pass.last(), Some(&0));
        assert!(max_chord_error(&band.graph, &cone()) <= 0.2 + 1e-12);
    }

    #[test]
    fn test_interior_faces_stay_triangles() {
        let options = BandOptions::default()
            .with_segments(8, 5)
            .with_chord_tolerance(0.2)
            .with_max_refine_passes(8);
        let band = tessellate_band(&cone(), &options).unwrap();
        let summary = band.graph.summary();
        assert_eq!(summary.exterior_faces.len(), 2);
        for (index, face) in summary.face_loops.iter().enumerate() {
            if !summary.exterior_faces.contains(&index) {
                assert_eq!(face.len(), 3, "face {index} is not a triangle");
            }
        }
    }

    #[test]
    fn test_normals_cover_every_node() {
        let options = BandOptions::default()
            .with_segments(8, 5)
            .with_chord_tolerance(0.2)
            .with_max_refine_passes(8);
        let band = tessellate_band(&cone(), &options).unwrap();
        for node in band.graph.node_ids() {
            let normal = band.normals.get(node);
            assert!(normal.is_some(), "node without a normal");
            assert!((normal.unwrap().norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fine_cylinder_needs_no_refinement() {
        let surface = RevolvedSurface::Cylinder {
            radius: 5.0,
            height: 2.0,
        };
        let band = tessellate_band(&surface, &BandOptions::default()).unwrap();
        assert_eq!(band.splits_per_pass, vec![0]);
        assert_eq!(band.struts_added, 64);
    }
}
