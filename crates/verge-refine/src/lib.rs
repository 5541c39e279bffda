#![warn(missing_docs)]

//! Priority-driven edge refinement and cyclic seam stitching.
//!
//! Two single-pass, run-to-completion algorithms over a
//! [`VertexUseGraph`](verge_graph::VertexUseGraph):
//!
//! * [`refine`] — scores every undirected edge through a caller-supplied
//!   hook, then splits the highest-scoring edges first, at most once per
//!   face per pass, and re-triangulates the faces it opened.
//! * [`stitch_cycles_by_period`] — closes the annulus between two
//!   independently built rims of a tube-like surface by greedily inserting
//!   struts, walking both rims by shortest periodic seam distance.
//!
//! Both mutate the graph only through its join/split primitives and report
//! counters back to the caller. Enable the `trace-refine` feature to get a
//! stderr trace of candidate selection, strut insertion, and failures.

/// Trace logging macro - only prints when the trace-refine feature is enabled
#[allow(unused_macros)]
#[cfg(feature = "trace-refine")]
macro_rules! trace_refine {
    ($($arg:tt)*) => {
        eprintln!($($arg)*)
    };
}

/// No-op version when the trace-refine feature is disabled
#[allow(unused_macros)]
#[cfg(not(feature = "trace-refine"))]
macro_rules! trace_refine {
    ($($arg:tt)*) => {};
}

mod heap;
mod refine;
mod stitch;

pub use heap::{Candidate, CandidateHeap};
pub use refine::{refine, RefineHooks, RefineStats};
pub use stitch::{stitch_cycles_by_period, StitchError, StitchStats};
