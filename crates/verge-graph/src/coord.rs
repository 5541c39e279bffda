//! Coordinate types and periodic-interval arithmetic.
//!
//! Graphs whose parameter space wraps (angles around an axis of revolution,
//! seam coordinates on closed surfaces) carry a period per axis. A period of
//! `0.0` means the axis does not wrap. All comparisons of wrapped coordinates
//! go through [`normalize_to_period`] so that the two representations of the
//! same physical position compare equal.

/// 3D point in parameter space (f64).
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector (f64).
pub type Vec3 = nalgebra::Vector3<f64>;

/// Coordinate axis selector for seam lookups and per-axis periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First parameter axis.
    X,
    /// Second parameter axis.
    Y,
    /// Third parameter axis.
    Z,
}

impl Axis {
    /// Index of this axis into a point or vector.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Shift `delta` by whole periods into the half-open interval
/// `(-period/2, +period/2]`.
///
/// A `period` of `0.0` disables wrapping and returns `delta` unchanged.
/// Negative periods behave like their absolute value.
///
/// # Example
///
/// ```
/// use verge_graph::normalize_to_period;
///
/// assert_eq!(normalize_to_period(350.0, 360.0), -10.0);
/// assert_eq!(normalize_to_period(180.0, 360.0), 180.0);
/// assert_eq!(normalize_to_period(-180.0, 360.0), 180.0);
/// assert_eq!(normalize_to_period(7.25, 0.0), 7.25);
/// ```
pub fn normalize_to_period(delta: f64, period: f64) -> f64 {
    if period == 0.0 {
        return delta;
    }
    let p = period.abs();
    delta - p * (delta / p - 0.5).ceil()
}

/// Shortest distance from `a` to `b` on an axis that wraps with `period`.
///
/// Always nonnegative and at most `period/2` for a periodic axis. With a
/// `period` of `0.0` this is the plain absolute difference.
pub fn periodic_distance(a: f64, b: f64, period: f64) -> f64 {
    normalize_to_period(b - a, period).abs()
}
