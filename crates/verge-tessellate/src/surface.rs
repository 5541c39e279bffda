//! Revolved-surface evaluators.
//!
//! Every surface here is parameterized as `(theta, t)`: `theta` is the
//! revolution angle, periodic with `2π`, and `t` runs from one rim of the
//! band to the other over `[0, 1]`. The band tessellator stores these
//! parameters as graph coordinates and maps them back to 3D through
//! [`RevolvedSurface::point_at`].

use verge_graph::{Point3, Vec3};

/// A surface of revolution around the world Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevolvedSurface {
    /// Conical frustum: radius interpolates from `base_radius` at `t = 0`
    /// to `top_radius` at `t = 1` while z climbs to `height`.
    Cone {
        /// Radius at the bottom rim.
        base_radius: f64,
        /// Radius at the top rim.
        top_radius: f64,
        /// Height of the band.
        height: f64,
    },
    /// Right circular cylinder of the given radius and height.
    Cylinder {
        /// Radius of the tube.
        radius: f64,
        /// Height of the band.
        height: f64,
    },
    /// Zone of a sphere between two latitudes (radians, equator at zero).
    SphereZone {
        /// Sphere radius.
        radius: f64,
        /// Latitude at `t = 0`.
        lat_min: f64,
        /// Latitude at `t = 1`.
        lat_max: f64,
    },
}

impl RevolvedSurface {
    /// Evaluate the world-space point at `(theta, t)`.
    ///
    /// `theta` is taken modulo `2π` implicitly, so the two wrapped
    /// representations of a seam vertex evaluate to the same point.
    pub fn point_at(&self, theta: f64, t: f64) -> Point3 {
        match *self {
            RevolvedSurface::Cone {
                base_radius,
                top_radius,
                height,
            } => {
                let r = base_radius + (top_radius - base_radius) * t;
                Point3::new(r * theta.cos(), r * theta.sin(), height * t)
            }
            RevolvedSurface::Cylinder { radius, height } => {
                Point3::new(radius * theta.cos(), radius * theta.sin(), height * t)
            }
            RevolvedSurface::SphereZone {
                radius,
                lat_min,
                lat_max,
            } => {
                let lat = lat_min + (lat_max - lat_min) * t;
                Point3::new(
                    radius * lat.cos() * theta.cos(),
                    radius * lat.cos() * theta.sin(),
                    radius * lat.sin(),
                )
            }
        }
    }

    /// Outward unit normal at `(theta, t)`.
    pub fn normal_at(&self, theta: f64, t: f64) -> Vec3 {
        match *self {
            RevolvedSurface::Cone {
                base_radius,
                top_radius,
                height,
            } => {
                let slope = base_radius - top_radius;
                Vec3::new(height * theta.cos(), height * theta.sin(), slope).normalize()
            }
            RevolvedSurface::Cylinder { .. } => Vec3::new(theta.cos(), theta.sin(), 0.0),
            RevolvedSurface::SphereZone {
                lat_min, lat_max, ..
            } => {
                let lat = lat_min + (lat_max - lat_min) * t;
                Vec3::new(
                    lat.cos() * theta.cos(),
                    lat.cos() * theta.sin(),
                    lat.sin(),
                )
            }
        }
    }
}
