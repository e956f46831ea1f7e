//! Collider geometry and the distance predicates used for contact detection
//!
//! Spheres carry a center and radius. Planes are infinite and described by
//! the equation `dot(normal, X) + offset = 0`, where `offset` is derived from
//! an anchor point on the plane and must be refreshed whenever the anchor or
//! the normal changes.

use crate::error::{ensure_finite, ensure_positive, PhysicsError, Result};
use cgmath::{EuclideanSpace, InnerSpace, MetricSpace, Point3, Vector3};

/// Sphere collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereGeometry {
    pub center: Point3<f32>,
    radius: f32,
}

impl SphereGeometry {
    pub fn new(center: Point3<f32>, radius: f32) -> Result<Self> {
        ensure_point("center", center)?;
        let radius = ensure_positive("radius", radius)?;
        Ok(Self { center, radius })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Infinite plane collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneGeometry {
    anchor: Point3<f32>,
    normal: Vector3<f32>,
    offset: f32,
}

impl PlaneGeometry {
    /// Creates a plane through `anchor` facing along `normal`
    ///
    /// The normal is normalized here; a zero-length or non-finite normal is
    /// rejected.
    pub fn new(anchor: Point3<f32>, normal: Vector3<f32>) -> Result<Self> {
        ensure_point("anchor", anchor)?;
        let normal = unit_normal(normal)?;
        let mut plane = Self {
            anchor,
            normal,
            offset: 0.0,
        };
        plane.refresh_offset();
        Ok(plane)
    }

    /// Horizontal plane at height `y` facing up
    pub fn ground(y: f32) -> Self {
        let mut plane = Self {
            anchor: Point3::new(0.0, y, 0.0),
            normal: Vector3::unit_y(),
            offset: 0.0,
        };
        plane.refresh_offset();
        plane
    }

    pub fn anchor(&self) -> Point3<f32> {
        self.anchor
    }

    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Moves the plane, keeping its orientation
    pub fn set_anchor(&mut self, anchor: Point3<f32>) {
        self.anchor = anchor;
        self.refresh_offset();
    }

    /// Reorients the plane, renormalizing the given direction
    pub fn set_normal(&mut self, normal: Vector3<f32>) -> Result<()> {
        self.normal = unit_normal(normal)?;
        self.refresh_offset();
        Ok(())
    }

    /// Recomputes the cached offset from the anchor and the normal
    pub fn refresh_offset(&mut self) {
        self.offset = -self.normal.dot(self.anchor.to_vec());
    }

    /// Flips the normal so it opposes `velocity`
    ///
    /// If the approaching body moves along the normal (positive dot product)
    /// the normal and the offset are negated. Returns whether a flip happened.
    /// Collision response relies on the normal facing the incoming body, so
    /// this must run before every plane/sphere test.
    pub fn orient_against(&mut self, velocity: Vector3<f32>) -> bool {
        if self.normal.dot(velocity) > 0.0 {
            self.normal = -self.normal;
            self.refresh_offset();
            true
        } else {
            false
        }
    }

    /// Signed distance from the plane to `point` along the normal
    pub fn signed_distance(&self, point: Point3<f32>) -> f32 {
        self.offset + point.to_vec().dot(self.normal)
    }
}

/// Unsigned distance between a plane and the center of a sphere
pub fn plane_sphere_distance(plane: &PlaneGeometry, sphere: &SphereGeometry) -> f32 {
    plane.signed_distance(sphere.center).abs()
}

/// A sphere touches a plane when its center is within one radius of it
pub fn plane_sphere_colliding(plane: &PlaneGeometry, sphere: &SphereGeometry) -> bool {
    plane_sphere_distance(plane, sphere) <= sphere.radius
}

/// Distance between two sphere centers
pub fn sphere_sphere_distance(a: &SphereGeometry, b: &SphereGeometry) -> f32 {
    a.center.distance(b.center)
}

/// Two spheres touch when their centers are within the sum of the radii
pub fn spheres_colliding(a: &SphereGeometry, b: &SphereGeometry) -> bool {
    sphere_sphere_distance(a, b) <= a.radius + b.radius
}

fn unit_normal(normal: Vector3<f32>) -> Result<Vector3<f32>> {
    ensure_vector("normal", normal)?;
    let length = normal.magnitude();
    if length <= f32::EPSILON {
        return Err(PhysicsError::InvalidParameter {
            name: "normal",
            value: length,
            reason: "must have non-zero length",
        });
    }
    Ok(normal / length)
}

pub(crate) fn ensure_vector(name: &'static str, v: Vector3<f32>) -> Result<()> {
    ensure_finite(name, v.x)?;
    ensure_finite(name, v.y)?;
    ensure_finite(name, v.z)?;
    Ok(())
}

pub(crate) fn ensure_point(name: &'static str, p: Point3<f32>) -> Result<()> {
    ensure_vector(name, p.to_vec())
}
