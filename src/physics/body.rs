use super::geometry::{ensure_vector, PlaneGeometry, SphereGeometry};
use super::host::HostId;
use crate::error::{ensure_positive, Result};
use cgmath::{InnerSpace, Point3, Vector3, Zero};

/// Mass given to colliders that should never move in practice
///
/// Walls and ground planes get a large but finite mass so the elastic
/// formulas stay well defined.
pub const IMMOVABLE_MASS: f32 = 1.0e6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Discriminant of [`Shape`], useful for dispatching on shape pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Plane,
    Sphere,
}

/// Collider geometry carried by a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Plane(PlaneGeometry),
    Sphere(SphereGeometry),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Plane(_) => ShapeKind::Plane,
            Shape::Sphere(_) => ShapeKind::Sphere,
        }
    }
}

/// One participant in the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub shape: Shape,
    mass: f32,
    pub velocity: Vector3<f32>,
    /// Net force from the last force evaluation; rebuilt every step
    pub force: Vector3<f32>,
    pub gravity_enabled: bool,
    pub air_resistance_enabled: bool,
    /// Scene object that owns this body's transform, if any
    pub host: Option<HostId>,
}

impl Body {
    /// Creates a sphere body
    ///
    /// # Arguments
    ///
    /// * `center` - World position
    /// * `radius` - Collision radius, must be positive
    /// * `mass` - Must be positive and finite
    /// * `velocity` - Initial velocity in world units per second
    ///
    /// # Examples
    ///
    /// ```
    /// use physx_sandbox::physics::body::Body;
    /// use cgmath::{Point3, Vector3};
    ///
    /// let ball = Body::sphere(Point3::new(0.0, 5.0, 0.0), 1.0, 2.0, Vector3::new(0.0, -5.0, 0.0))
    ///     .unwrap()
    ///     .with_gravity();
    ///
    /// assert_eq!(ball.mass(), 2.0);
    /// assert!(Body::sphere(Point3::new(0.0, 0.0, 0.0), -1.0, 2.0, Vector3::new(0.0, 0.0, 0.0)).is_err());
    /// ```
    pub fn sphere(
        center: Point3<f32>,
        radius: f32,
        mass: f32,
        velocity: Vector3<f32>,
    ) -> Result<Self> {
        let geometry = SphereGeometry::new(center, radius)?;
        Self::new(Shape::Sphere(geometry), mass, velocity)
    }

    /// Creates a plane body through `anchor` facing along `normal`
    pub fn plane(anchor: Point3<f32>, normal: Vector3<f32>, mass: f32) -> Result<Self> {
        let geometry = PlaneGeometry::new(anchor, normal)?;
        Self::new(Shape::Plane(geometry), mass, Vector3::zero())
    }

    /// Creates a plane body with [`IMMOVABLE_MASS`]
    pub fn static_plane(anchor: Point3<f32>, normal: Vector3<f32>) -> Result<Self> {
        Self::plane(anchor, normal, IMMOVABLE_MASS)
    }

    fn new(shape: Shape, mass: f32, velocity: Vector3<f32>) -> Result<Self> {
        let mass = ensure_positive("mass", mass)?;
        ensure_vector("velocity", velocity)?;
        Ok(Self {
            id: BodyId(0),
            shape,
            mass,
            velocity,
            force: Vector3::zero(),
            gravity_enabled: false,
            air_resistance_enabled: false,
            host: None,
        })
    }

    pub fn with_gravity(mut self) -> Self {
        self.gravity_enabled = true;
        self
    }

    pub fn with_air_resistance(mut self) -> Self {
        self.air_resistance_enabled = true;
        self
    }

    /// Binds the body to the scene object that renders it
    pub fn with_host(mut self, host: HostId) -> Self {
        self.host = Some(host);
        self
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Sphere center, or the anchor point of a plane
    pub fn position(&self) -> Point3<f32> {
        match &self.shape {
            Shape::Sphere(sphere) => sphere.center,
            Shape::Plane(plane) => plane.anchor(),
        }
    }

    /// Moves the body; planes refresh their cached offset
    pub fn set_position(&mut self, position: Point3<f32>) {
        match &mut self.shape {
            Shape::Sphere(sphere) => sphere.center = position,
            Shape::Plane(plane) => plane.set_anchor(position),
        }
    }

    pub fn radius(&self) -> Option<f32> {
        match &self.shape {
            Shape::Sphere(sphere) => Some(sphere.radius()),
            Shape::Plane(_) => None,
        }
    }

    pub fn as_sphere(&self) -> Option<&SphereGeometry> {
        match &self.shape {
            Shape::Sphere(sphere) => Some(sphere),
            Shape::Plane(_) => None,
        }
    }

    pub fn as_plane(&self) -> Option<&PlaneGeometry> {
        match &self.shape {
            Shape::Plane(plane) => Some(plane),
            Shape::Sphere(_) => None,
        }
    }

    pub fn as_plane_mut(&mut self) -> Option<&mut PlaneGeometry> {
        match &mut self.shape {
            Shape::Plane(plane) => Some(plane),
            Shape::Sphere(_) => None,
        }
    }

    /// Advances the position by `velocity * dt`
    pub fn drift(&mut self, dt: f32) {
        let position = self.position() + self.velocity * dt;
        self.set_position(position);
    }

    /// Advances the velocity by the current force over `dt`
    pub fn kick(&mut self, dt: f32) {
        self.velocity += (self.force / self.mass) * dt;
    }

    pub fn momentum(&self) -> Vector3<f32> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.magnitude2()
    }

    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_construction() {
        let body = Body::sphere(Point3::new(1.0, 2.0, 3.0), 0.5, 4.0, Vector3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(body.kind(), ShapeKind::Sphere);
        assert_eq!(body.radius(), Some(0.5));
        assert_eq!(body.position(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(body.force, Vector3::zero());
        assert!(!body.gravity_enabled);
        assert!(!body.air_resistance_enabled);
        assert!(body.host.is_none());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let origin = Point3::new(0.0, 0.0, 0.0);
        let still = Vector3::zero();
        assert!(Body::sphere(origin, 1.0, 0.0, still).is_err());
        assert!(Body::sphere(origin, 1.0, -2.0, still).is_err());
        assert!(Body::sphere(origin, 0.0, 1.0, still).is_err());
        assert!(Body::sphere(origin, 1.0, 1.0, Vector3::new(f32::NAN, 0.0, 0.0)).is_err());
        assert!(Body::plane(origin, Vector3::unit_y(), f32::INFINITY).is_err());
        assert!(Body::plane(origin, still, 1.0).is_err());
    }

    #[test]
    fn test_static_plane_is_heavy_and_still() {
        let ground = Body::static_plane(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0)).unwrap();
        assert_eq!(ground.kind(), ShapeKind::Plane);
        assert_eq!(ground.mass(), IMMOVABLE_MASS);
        assert_eq!(ground.velocity, Vector3::zero());
        assert_eq!(ground.as_plane().unwrap().normal(), Vector3::unit_y());
        assert!(ground.radius().is_none());
    }

    #[test]
    fn test_set_position_refreshes_plane_offset() {
        let mut wall = Body::static_plane(Point3::new(0.0, 0.0, 0.0), Vector3::unit_x()).unwrap();
        wall.set_position(Point3::new(4.0, 0.0, 0.0));
        assert!((wall.as_plane().unwrap().offset() + 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_drift_and_kick() {
        let mut body = Body::sphere(Point3::new(0.0, 0.0, 0.0), 1.0, 2.0, Vector3::new(1.0, 0.0, 0.0)).unwrap();
        body.drift(0.5);
        assert_eq!(body.position(), Point3::new(0.5, 0.0, 0.0));

        body.force = Vector3::new(0.0, 4.0, 0.0);
        body.kick(0.5);
        assert_eq!(body.velocity, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_momentum_and_energy() {
        let body = Body::sphere(Point3::new(0.0, 0.0, 0.0), 1.0, 2.0, Vector3::new(3.0, 4.0, 0.0)).unwrap();
        assert_eq!(body.momentum(), Vector3::new(6.0, 8.0, 0.0));
        assert!((body.kinetic_energy() - 25.0).abs() < 1e-5);
        assert!((body.speed() - 5.0).abs() < 1e-6);
    }
}
