//! Single-attractor orbital dynamics
//!
//! The first registered body is the attractor ("sun"). It exerts an
//! inverse-square pull on every other body but is never moved itself, and
//! the other bodies do not attract each other.
//!
//! The attractor's mass doubles as the gravitational constant: magnitudes are
//! `m_i * m_sun / r²`, so a scene-scaled mass such as 100 keeps orbits at a
//! visually sensible speed.

use super::body::{Body, ShapeKind};
use super::registry::BodyRegistry;
use super::resolver::DEGENERACY_EPSILON;
use super::strategy::PhysicsStrategy;
use cgmath::{InnerSpace, MetricSpace, Vector3, Zero};

/// Default attractor mass used by the solar-system scene
pub const DEFAULT_ATTRACTOR_MASS: f32 = 100.0;

#[derive(Debug, Clone, Default)]
pub struct GravitationalPhysics {
    registry: BodyRegistry,
    time: f32,
}

impl GravitationalPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated seconds since creation
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn attractor(&self) -> Option<&Body> {
        self.registry.bodies().first()
    }
}

impl PhysicsStrategy for GravitationalPhysics {
    fn name(&self) -> &str {
        "Gravitational"
    }

    fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut BodyRegistry {
        &mut self.registry
    }

    /// Semi-implicit Euler step toward the attractor
    ///
    /// For every sphere after the first body: reset the force, compute the pull from
    /// the attractor at the current position, drift the position with the old
    /// velocity, then kick the velocity with the new force.
    fn step(&mut self, dt: f32) {
        self.time += dt;

        let Some((sun, planets)) = self.registry.bodies_mut().split_first_mut() else {
            return;
        };
        let sun_position = sun.position();
        let sun_mass = sun.mass();

        // Planes are static colliders and are never integrated
        for body in planets.iter_mut().filter(|b| b.kind() == ShapeKind::Sphere) {
            body.force = Vector3::zero();

            let distance = body.position().distance(sun_position);
            if distance > DEGENERACY_EPSILON {
                let magnitude = body.mass() * sun_mass / (distance * distance);
                let direction = (sun_position - body.position()).normalize();
                body.force += direction * magnitude;
            } else {
                log::warn!(
                    "body {:?} coincides with the attractor, skipping attraction",
                    body.id
                );
            }

            body.drift(dt);
            body.kick(dt);
        }

        log::trace!("gravitational step dt={dt} t={}", self.time);
    }
}
