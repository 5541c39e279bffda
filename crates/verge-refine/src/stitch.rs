//! Cyclic seam stitching for periodic rims.
//!
//! Two rims of a tube-like surface arrive as two closed face cycles whose
//! seam coordinate wraps with some period (a revolution angle, a height on a
//! closed surface). The stitcher triangulates the annulus between them: one
//! strut pairs the closest start nodes, then a greedy walk advances along
//! whichever rim offers the shorter periodic hop, dropping a strut at every
//! step. Distances are always measured around the period, so a rim that
//! crosses the seam is stitched across it rather than the long way around.

use thiserror::Error;
use verge_graph::{periodic_distance, NodeMask, VertexUseGraph};

use crate::refine::RefineHooks;

/// Counters for one completed stitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StitchStats {
    /// Nodes in the first rim, measured before stitching.
    pub loop_a_len: usize,
    /// Nodes in the second rim, measured before stitching.
    pub loop_b_len: usize,
    /// Edges inserted, the initial strut included. On convergence this is
    /// the sum of the rim lengths.
    pub struts_added: usize,
}

/// Failure of a stitch.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StitchError {
    /// Both walk fronts ran into nodes already consumed before the band was
    /// closed. The rims are not stitchable as given (mismatched or
    /// non-manifold topology); struts already inserted are left in place
    /// and recovery is the caller's decision.
    #[error(
        "stitch deadlocked after {struts_added} struts between rims of \
         {loop_a_len} and {loop_b_len} nodes"
    )]
    Deadlocked {
        /// Nodes in the first rim.
        loop_a_len: usize,
        /// Nodes in the second rim.
        loop_b_len: usize,
        /// Edges inserted before the deadlock.
        struts_added: usize,
    },
}

/// Triangulate the band between two closed rims of a periodic surface.
///
/// `loop_a` and `loop_b` name the band-facing face cycles of the two rims;
/// `z_period` is the wrap length of the seam coordinate (`0.0` for a seam
/// that does not wrap). The start strut pairs `loop_a` with the rim-B node
/// at the smallest periodic seam distance; after that the walk advances the
/// rim whose next node is the shorter periodic hop from the opposite front,
/// falling back to the other rim when the preferred node was already
/// consumed. [`RefineHooks::on_join`] fires after every insertion, the
/// initial strut included.
///
/// The walk stops when the two fronts converge on the last band triangle or
/// when the strut count reaches the sum of the rim lengths. A degenerate
/// (empty or single-node) rim is not rejected and the outcome for one is
/// unspecified; keeping such rims out is the caller's job.
///
/// # Errors
///
/// [`StitchError::Deadlocked`] when both fronts hit consumed nodes first.
/// Struts already inserted stay in the graph; there is no rollback. The
/// checked-out mask is returned to the pool on this path too.
pub fn stitch_cycles_by_period<G, H>(
    graph: &mut G,
    loop_a: G::Node,
    loop_b: G::Node,
    z_period: f64,
    hooks: &mut H,
) -> Result<StitchStats, StitchError>
where
    G: VertexUseGraph,
    H: RefineHooks<G>,
{
    let loop_a_len = graph.face_loop_len(loop_a);
    let loop_b_len = graph.face_loop_len(loop_b);

    // Start pairing: the rim-B node closest to A's start, measured around
    // the period.
    let start = graph.seam_coord(loop_a);
    let mut b_start = loop_b;
    let mut best = periodic_distance(start, graph.seam_coord(loop_b), z_period);
    let mut scan = graph.face_succ(loop_b);
    while scan != loop_b {
        let d = periodic_distance(start, graph.seam_coord(scan), z_period);
        if d < best {
            best = d;
            b_start = scan;
        }
        scan = graph.face_succ(scan);
    }
    trace_refine!(
        "stitch: rims {} + {}, start gap {:.4}",
        loop_a_len,
        loop_b_len,
        best
    );

    let mut used = graph.grab_mask();
    let (na, nb) = graph.join(loop_a, b_start);
    hooks.on_join(graph, loop_a, b_start, na, nb);
    used.set(na);
    used.set(nb);
    let mut struts_added = 1;
    let bound = loop_a_len + loop_b_len;

    // The fronts of the walk: cur_a and cur_b flank the newest strut inside
    // the band, with face_succ(cur_a) == cur_b.
    let mut cur_a = na;
    let mut cur_b = b_start;

    while struts_added < bound {
        let cand_a = graph.face_pred(cur_a);
        let cand_b = graph.face_succ(cur_b);
        if cand_a == cand_b {
            // Fronts converged: the remaining band is a single triangle.
            break;
        }
        let advance_a = if used.has(cand_a) {
            if used.has(cand_b) {
                trace_refine!("stitch: deadlocked after {} struts", struts_added);
                graph.return_mask(used);
                return Err(StitchError::Deadlocked {
                    loop_a_len,
                    loop_b_len,
                    struts_added,
                });
            }
            false
        } else if used.has(cand_b) {
            true
        } else {
            let dist_a =
                periodic_distance(graph.seam_coord(cand_a), graph.seam_coord(cur_b), z_period);
            let dist_b =
                periodic_distance(graph.seam_coord(cur_a), graph.seam_coord(cand_b), z_period);
            dist_a <= dist_b
        };
        if advance_a {
            let (next_a, far) = graph.join(cand_a, cur_b);
            hooks.on_join(graph, cand_a, cur_b, next_a, far);
            used.set(cand_a);
            cur_a = next_a;
        } else {
            let (next_a, far) = graph.join(cur_a, cand_b);
            hooks.on_join(graph, cur_a, cand_b, next_a, far);
            used.set(cand_b);
            cur_a = next_a;
            cur_b = cand_b;
        }
        struts_added += 1;
    }

    graph.return_mask(used);
    Ok(StitchStats {
        loop_a_len,
        loop_b_len,
        struts_added,
    })
}
