//! Ready-made scenes
//!
//! A [`Scenario`] bundles the host scene with the bodies that live in it, in
//! registration order, and the strategy that should drive them.

use crate::config::SandboxConfig;
use crate::error::{PhysicsError, Result};
use crate::gfx::scene::Scene;
use crate::physics::{Body, StrategyKind, TransformHost};
use cgmath::{Point3, Vector3, Zero};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScenarioKind {
    /// Four planets orbiting a fixed sun
    SolarSystem,
    /// One ball dropped onto the ground
    BouncingBall,
    /// A grid of balls inside four walls
    BallPit,
}

impl ScenarioKind {
    pub fn build(self, config: &SandboxConfig) -> Result<Scenario> {
        match self {
            ScenarioKind::SolarSystem => solar_system(config),
            ScenarioKind::BouncingBall => bouncing_ball(),
            ScenarioKind::BallPit => ball_pit(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub scene: Scene,
    pub bodies: Vec<Body>,
    pub strategy: StrategyKind,
}

impl Scenario {
    fn new(name: &'static str, strategy: StrategyKind) -> Self {
        Self {
            name,
            scene: Scene::new(),
            bodies: Vec::new(),
            strategy,
        }
    }

    /// Adds a sphere object and a body hosted by it
    fn sphere(&mut self, name: &str, body: Body) {
        let radius = body.radius().unwrap_or(1.0);
        let host = self.scene.add_sphere(name, radius, body.position());
        self.bodies.push(body.with_host(host));
    }

    /// Adds a static plane object; `rotation` (degrees) turns its +Y face
    fn wall(&mut self, name: &str, size: f32, position: Point3<f32>, rotation: Vector3<f32>) -> Result<()> {
        let host = self.scene.add_plane(name, size, size, position, rotation);
        let normal = self
            .scene
            .object(host)
            .map(|object| object.up_axis())
            .ok_or(PhysicsError::UnknownHost(host))?;
        let body = Body::static_plane(position, normal)?.with_host(host);
        self.bodies.push(body);
        Ok(())
    }
}

/// Sun at the origin with four planets on circular-ish orbits
///
/// The sun is registered first so the gravitational strategy treats it as
/// the attractor.
pub fn solar_system(config: &SandboxConfig) -> Result<Scenario> {
    let mut scenario = Scenario::new("Solar System", StrategyKind::Gravitational);
    let origin = Point3::new(0.0, 0.0, 0.0);

    let planets = [
        ("mercury", 1.0, 8.0, 5.0, Vector3::new(0.0, 20f32.sqrt(), 0.0)),
        ("venus", 2.0, 12.0, 15.0, Vector3::new(0.0, 0.0, 6f32.sqrt())),
        ("earth", 2.0, 16.0, 25.0, Vector3::new(0.0, 2.0, 0.0)),
        ("mars", 1.5, 6.0, 30.0, Vector3::new(0.0, 0.0, 3f32.sqrt())),
    ];

    let sun = Body::sphere(origin, 5.0, config.gravitational_attractor_mass, Vector3::zero())?;
    scenario.sphere("sun", sun);
    for (name, radius, mass, distance, velocity) in planets {
        let planet = Body::sphere(Point3::new(distance, 0.0, 0.0), radius, mass, velocity)?;
        scenario.sphere(name, planet);
    }

    Ok(scenario)
}

/// Ground plane through the origin and a unit ball thrown down from y = 5
pub fn bouncing_ball() -> Result<Scenario> {
    let mut scenario = Scenario::new("Bouncing Ball", StrategyKind::Collision);

    scenario.wall("ground", 20.0, Point3::new(0.0, 0.0, 0.0), Vector3::zero())?;
    let ball = Body::sphere(Point3::new(0.0, 5.0, 0.0), 1.0, 1.0, Vector3::new(0.0, -5.0, 0.0))?;
    scenario.sphere("ball", ball.with_gravity());

    Ok(scenario)
}

/// Ground, four walls and a 3x3 grid of balls with spread-out velocities
pub fn ball_pit() -> Result<Scenario> {
    const HALF_EXTENT: f32 = 10.0;
    let mut scenario = Scenario::new("Ball Pit", StrategyKind::Collision);

    scenario.wall("ground", 2.0 * HALF_EXTENT, Point3::new(0.0, 0.0, 0.0), Vector3::zero())?;
    scenario.wall("wall +x", 2.0 * HALF_EXTENT, Point3::new(HALF_EXTENT, 0.0, 0.0), Vector3::new(0.0, 0.0, 90.0))?;
    scenario.wall("wall -x", 2.0 * HALF_EXTENT, Point3::new(-HALF_EXTENT, 0.0, 0.0), Vector3::new(0.0, 0.0, -90.0))?;
    scenario.wall("wall +z", 2.0 * HALF_EXTENT, Point3::new(0.0, 0.0, HALF_EXTENT), Vector3::new(-90.0, 0.0, 0.0))?;
    scenario.wall("wall -z", 2.0 * HALF_EXTENT, Point3::new(0.0, 0.0, -HALF_EXTENT), Vector3::new(90.0, 0.0, 0.0))?;

    for row in 0..3 {
        for col in 0..3 {
            let x = (col as f32 - 1.0) * 4.0;
            let z = (row as f32 - 1.0) * 4.0;
            let position = Point3::new(x, 3.0 + (row * 3 + col) as f32 * 0.5, z);
            let velocity = Vector3::new((1 - col) as f32 * 1.5, 0.0, (row as f32 - 1.0) * 2.0);
            let ball = Body::sphere(position, 0.5, 1.0, velocity)?;
            scenario.sphere(&format!("ball {row}{col}"), ball.with_gravity());
        }
    }

    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{BodyId, CollisionPhysics, PhysicsStrategy, ShapeKind, IMMOVABLE_MASS};
    use cgmath::InnerSpace;

    #[test]
    fn test_solar_system_layout() {
        let scenario = solar_system(&SandboxConfig::default()).unwrap();

        assert_eq!(scenario.strategy, StrategyKind::Gravitational);
        assert_eq!(scenario.bodies.len(), 5);
        assert_eq!(scenario.scene.len(), 5);
        assert_eq!(scenario.bodies[0].mass(), 100.0);
        assert_eq!(scenario.bodies[0].radius(), Some(5.0));
        assert!((scenario.bodies[1].velocity.y - 20f32.sqrt()).abs() < 1e-6);
        assert_eq!(scenario.bodies[4].position(), Point3::new(30.0, 0.0, 0.0));
    }

    #[test]
    fn test_attractor_mass_from_config() {
        let config = SandboxConfig::default().with_attractor_mass(250.0);
        let scenario = solar_system(&config).unwrap();
        assert_eq!(scenario.bodies[0].mass(), 250.0);
    }

    #[test]
    fn test_bouncing_ball_layout() {
        let scenario = bouncing_ball().unwrap();
        assert_eq!(scenario.bodies[0].kind(), ShapeKind::Plane);
        assert!(!scenario.bodies[0].gravity_enabled);
        assert!(scenario.bodies[1].gravity_enabled);
        assert_eq!(scenario.bodies[1].velocity, Vector3::new(0.0, -5.0, 0.0));
    }

    #[test]
    fn test_ball_pit_layout() {
        let scenario = ball_pit().unwrap();
        let planes = scenario.bodies.iter().filter(|b| b.kind() == ShapeKind::Plane).count();
        assert_eq!(planes, 5);
        assert!(scenario.bodies[..5].iter().all(|b| b.mass() == IMMOVABLE_MASS));
        assert_eq!(scenario.bodies.len(), 14);
        assert!(scenario.bodies.iter().all(|b| b.host.is_some()));
        assert!(scenario
            .bodies
            .iter()
            .filter(|b| b.kind() == ShapeKind::Sphere)
            .all(|b| b.gravity_enabled));
    }

    #[test]
    fn test_walls_face_their_rotation_before_attach() {
        let scenario = ball_pit().unwrap();
        let expected = [
            Vector3::unit_y(),
            -Vector3::unit_x(),
            Vector3::unit_x(),
            -Vector3::unit_z(),
            Vector3::unit_z(),
        ];

        for (i, (body, normal)) in scenario.bodies.iter().zip(expected).enumerate() {
            let plane = body.as_plane().unwrap();
            assert!((plane.normal() - normal).magnitude() < 1e-5);
            // Inward-facing walls put the origin 10 units on their positive side
            let offset = if i == 0 { 0.0 } else { 10.0 };
            assert!((plane.offset() - offset).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ball_pit_bodies_collide_without_host_pull() {
        let scenario = ball_pit().unwrap();
        let mut physics = CollisionPhysics::default();
        for wall in scenario.bodies.into_iter().take(5) {
            physics.add_body(wall);
        }
        physics.add_body(
            Body::sphere(Point3::new(0.0, 0.5, 0.0), 0.5, 1.0, Vector3::new(0.0, -2.0, 0.0)).unwrap(),
        );

        physics.step(0.0);

        // Only the ground is within reach; the walls are 10 units away
        assert_eq!(physics.contacts().len(), 1);
        assert_eq!(physics.contacts()[0].first, BodyId(0));
        assert!(physics.bodies()[5].velocity.y > 0.0);
    }
}
