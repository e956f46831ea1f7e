//! Per-body force model
//!
//! Forces are not accumulated across steps. Each evaluation starts from zero
//! and adds the contributions whose flags are enabled on the body:
//!
//! - gravity: `mass * (0, -g, 0)`
//! - linear (Stokes) drag, spheres only: `-mass * 6π·μ·radius * velocity`
//!
//! The drag viscosity `μ` defaults to zero, so drag is wired in but inert
//! until a scene sets it.

use super::body::{Body, Shape};
use cgmath::{Vector3, Zero};
use serde::Deserialize;
use std::f32::consts::PI;

/// Standard gravitational acceleration, world units per second squared
pub const STANDARD_GRAVITY: f32 = 9.81;

/// Default drag viscosity; zero disables drag
pub const DEFAULT_AIR_VISCOSITY: f32 = 0.0;

/// Tunable constants for force evaluation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForceModel {
    /// Downward acceleration applied to gravity-enabled bodies
    pub gravity: f32,
    /// Viscosity `μ` in the Stokes drag term
    pub air_viscosity: f32,
}

impl Default for ForceModel {
    fn default() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            air_viscosity: DEFAULT_AIR_VISCOSITY,
        }
    }
}

impl ForceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_air_viscosity(mut self, air_viscosity: f32) -> Self {
        self.air_viscosity = air_viscosity;
        self
    }

    /// Weight of a body of the given mass
    pub fn gravity_force(&self, mass: f32) -> Vector3<f32> {
        Vector3::new(0.0, -self.gravity, 0.0) * mass
    }

    /// Linear drag opposing the body's velocity; zero for planes
    pub fn drag_force(&self, body: &Body) -> Vector3<f32> {
        match &body.shape {
            Shape::Sphere(sphere) => {
                let coefficient = 6.0 * PI * self.air_viscosity * sphere.radius();
                -body.velocity * (body.mass() * coefficient)
            }
            Shape::Plane(_) => Vector3::zero(),
        }
    }

    /// Sum of the enabled contributions, evaluated from the current state
    pub fn net_force(&self, body: &Body) -> Vector3<f32> {
        let mut force = Vector3::zero();
        if body.gravity_enabled {
            force += self.gravity_force(body.mass());
        }
        if body.air_resistance_enabled {
            force += self.drag_force(body);
        }
        force
    }

    /// Overwrites `body.force` with [`ForceModel::net_force`] and returns it
    pub fn recompute_force(&self, body: &mut Body) -> Vector3<f32> {
        body.force = self.net_force(body);
        body.force
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;

    fn ball(velocity: Vector3<f32>) -> Body {
        Body::sphere(Point3::new(0.0, 0.0, 0.0), 0.5, 2.0, velocity).unwrap()
    }

    #[test]
    fn test_no_flags_no_force() {
        let model = ForceModel::default();
        let mut body = ball(Vector3::new(1.0, 2.0, 3.0));
        body.force = Vector3::new(9.0, 9.0, 9.0);
        assert_eq!(model.recompute_force(&mut body), Vector3::zero());
        assert_eq!(body.force, Vector3::zero());
    }

    #[test]
    fn test_gravity_contribution() {
        let model = ForceModel::default();
        let mut body = ball(Vector3::zero()).with_gravity();
        let force = model.recompute_force(&mut body);
        assert!((force.y + 2.0 * STANDARD_GRAVITY).abs() < 1e-5);
        assert_eq!(force.x, 0.0);
        assert_eq!(force.z, 0.0);
    }

    #[test]
    fn test_force_is_not_accumulated() {
        let model = ForceModel::default();
        let mut body = ball(Vector3::zero()).with_gravity();
        model.recompute_force(&mut body);
        let second = model.recompute_force(&mut body);
        assert!((second.y + 2.0 * STANDARD_GRAVITY).abs() < 1e-5);
    }

    #[test]
    fn test_default_drag_is_inert() {
        let model = ForceModel::default();
        let mut body = ball(Vector3::new(4.0, 0.0, 0.0)).with_air_resistance();
        assert_eq!(model.recompute_force(&mut body), Vector3::zero());
    }

    #[test]
    fn test_drag_opposes_velocity() {
        let model = ForceModel::default().with_air_viscosity(0.1);
        let body = ball(Vector3::new(4.0, 0.0, 0.0)).with_air_resistance();
        let drag = model.net_force(&body);
        let expected = -4.0 * 2.0 * 6.0 * PI * 0.1 * 0.5;
        assert!((drag.x - expected).abs() < 1e-4);
        assert_eq!(drag.y, 0.0);
    }

    #[test]
    fn test_planes_feel_no_drag() {
        let model = ForceModel::default().with_air_viscosity(1.0);
        let mut plane = Body::static_plane(Point3::new(0.0, 0.0, 0.0), Vector3::unit_y()).unwrap();
        plane.velocity = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(model.drag_force(&plane), Vector3::zero());
    }
}
