//! Velocity-only collision response
//!
//! Both rules are perfectly elastic and leave positions untouched; there is
//! no penetration correction.

use cgmath::{InnerSpace, MetricSpace, Point3, Vector3};

/// Below this speed or separation a direction cannot be normalized
pub const DEGENERACY_EPSILON: f32 = 1.0e-6;

/// Mirrors a velocity about a plane normal, preserving speed
///
/// `normal` must be unit length and face the incoming body (see
/// [`super::geometry::PlaneGeometry::orient_against`]). The incoming
/// direction is reflected as `r = 2(n·l)n - l` and the new velocity is
/// `-r * |v|`.
///
/// A body at rest has no direction to reflect; its velocity is returned
/// unchanged instead of producing NaN.
pub fn reflect_off_plane(normal: Vector3<f32>, velocity: Vector3<f32>) -> Vector3<f32> {
    let speed = velocity.magnitude();
    if speed <= DEGENERACY_EPSILON {
        return velocity;
    }

    let incoming = velocity / speed;
    let reflected = normal * (2.0 * normal.dot(incoming)) - incoming;
    -reflected.normalize() * speed
}

/// State of one sphere taking part in a two-body exchange
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impactor {
    pub center: Point3<f32>,
    pub mass: f32,
    pub velocity: Vector3<f32>,
}

/// Elastic two-body collision along the line of centers
///
/// With `d = normalize(center_b - center_a)`:
///
/// ```text
/// v_b' = v_b + 2d · (m_a / (m_a + m_b)) · dot(v_a - v_b, d)
/// v_a' = (m_a·v_a + m_b·v_b - m_b·v_b') / m_a
/// ```
///
/// Momentum and kinetic energy are conserved; velocity components
/// perpendicular to `d` are unchanged. Returns `None` when the centers
/// coincide, since the line of centers is then undefined.
///
/// # Examples
///
/// ```
/// use physx_sandbox::physics::resolver::{exchange_elastic, Impactor};
/// use cgmath::{Point3, Vector3};
///
/// let a = Impactor { center: Point3::new(0.0, 0.0, 0.0), mass: 1.0, velocity: Vector3::new(1.0, 0.0, 0.0) };
/// let b = Impactor { center: Point3::new(2.0, 0.0, 0.0), mass: 1.0, velocity: Vector3::new(0.0, 0.0, 0.0) };
///
/// // Equal masses swap velocities head-on
/// let (va, vb) = exchange_elastic(&a, &b).unwrap();
/// assert!(va.x.abs() < 1e-6);
/// assert!((vb.x - 1.0).abs() < 1e-6);
/// ```
pub fn exchange_elastic(a: &Impactor, b: &Impactor) -> Option<(Vector3<f32>, Vector3<f32>)> {
    if a.center.distance(b.center) <= DEGENERACY_EPSILON {
        return None;
    }

    let d = (b.center - a.center).normalize();
    let relative = a.velocity - b.velocity;
    let share = a.mass / (a.mass + b.mass);
    let vb = b.velocity + d * (2.0 * share * relative.dot(d));
    let va = (a.velocity * a.mass + b.velocity * b.mass - vb * b.mass) / a.mass;
    Some((va, vb))
}
