#![warn(missing_docs)]

//! Band tessellation for surfaces of revolution.
//!
//! The natural driver for the verge engine: build the two rim loops of a
//! revolved-surface band in `(theta, t)` parameter space, close the band
//! with the cyclic stitcher across the `2π` seam, then raise the resolution
//! with chord-error refinement passes until every edge is inside tolerance.
//!
//! # Example
//!
//! ```
//! use verge_tessellate::{tessellate_band, BandOptions, RevolvedSurface};
//!
//! let cone = RevolvedSurface::Cone {
//!     base_radius: 4.0,
//!     top_radius: 2.0,
//!     height: 3.0,
//! };
//! let options = BandOptions::default().with_segments(16, 8);
//! let band = tessellate_band(&cone, &options).unwrap();
//! assert_eq!(band.struts_added, 24);
//! ```

mod band;
mod surface;

pub use band::{
    max_chord_error, tessellate_band, Band, BandOptions, ChordHooks, TessellateError,
};
pub use surface::RevolvedSurface;
