//! Sphere/plane collision sandbox
//!
//! Each step has two phases:
//!
//! 1. **Detection and response.** Every ordered pair `(i, j)` with `j < i`
//!    is visited, `i` outer and `j` inner. Plane/sphere pairs orient the
//!    plane normal against the sphere's velocity, test the distance and
//!    reflect the sphere. Sphere/sphere pairs exchange velocity elastically.
//!    Plane/plane pairs are skipped. Only velocities change here.
//! 2. **Integration.** Every sphere is integrated from its velocity and the
//!    force model; planes are static and never move.
//!
//! The pair order decides which plane normal gets flipped and which sphere is
//! the reference operand of an exchange, so it is fixed and deterministic.

use super::body::{Body, BodyId, Shape, ShapeKind};
use super::forces::ForceModel;
use super::geometry::{plane_sphere_distance, sphere_sphere_distance};
use super::registry::BodyRegistry;
use super::resolver::{exchange_elastic, reflect_off_plane, Impactor};
use super::strategy::PhysicsStrategy;
use serde::Deserialize;

/// How positions are advanced in the integration phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationScheme {
    /// Drift, recompute force, kick, then drift again
    ///
    /// The position moves twice per step, the second time with the
    /// post-kick velocity.
    #[default]
    Staged,
    /// Drift, recompute force, kick
    SemiImplicit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    PlaneSphere,
    SphereSphere,
}

/// A contact resolved during the last step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Plane for plane/sphere contacts, the outer-loop body otherwise
    pub first: BodyId,
    pub second: BodyId,
    pub kind: ContactKind,
    /// Plane-to-center or center-to-center distance at detection
    pub distance: f32,
}

/// Settings for [`CollisionPhysics`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionSettings {
    pub forces: ForceModel,
    pub integration: IntegrationScheme,
}

impl CollisionSettings {
    pub fn with_forces(mut self, forces: ForceModel) -> Self {
        self.forces = forces;
        self
    }

    pub fn with_integration(mut self, integration: IntegrationScheme) -> Self {
        self.integration = integration;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollisionPhysics {
    registry: BodyRegistry,
    settings: CollisionSettings,
    contacts: Vec<Contact>,
}

impl CollisionPhysics {
    pub fn new(settings: CollisionSettings) -> Self {
        Self {
            registry: BodyRegistry::new(),
            settings,
            contacts: Vec::new(),
        }
    }

    pub fn settings(&self) -> &CollisionSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut CollisionSettings {
        &mut self.settings
    }

    /// Contacts resolved by the most recent [`PhysicsStrategy::step`]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn detect_and_respond(&mut self) {
        let bodies = self.registry.bodies_mut();
        for i in 0..bodies.len() {
            let (lower, upper) = bodies.split_at_mut(i);
            let p = &mut upper[0];
            for (j, q) in lower.iter_mut().enumerate() {
                let contact = match (p.kind(), q.kind()) {
                    (ShapeKind::Plane, ShapeKind::Sphere) => collide_plane_sphere(p, q),
                    (ShapeKind::Sphere, ShapeKind::Plane) => collide_plane_sphere(q, p),
                    (ShapeKind::Sphere, ShapeKind::Sphere) => collide_spheres(p, q),
                    (ShapeKind::Plane, ShapeKind::Plane) => None,
                };
                if let Some(contact) = contact {
                    log::debug!("contact {:?} between bodies {} and {}", contact.kind, i, j);
                    self.contacts.push(contact);
                }
            }
        }
    }

    fn integrate(&mut self, dt: f32) {
        let forces = self.settings.forces;
        let scheme = self.settings.integration;
        for body in self.registry.bodies_mut() {
            if body.kind() != ShapeKind::Sphere {
                continue;
            }
            body.drift(dt);
            forces.recompute_force(body);
            body.kick(dt);
            if scheme == IntegrationScheme::Staged {
                body.drift(dt);
            }
        }
    }
}

impl PhysicsStrategy for CollisionPhysics {
    fn name(&self) -> &str {
        "Collision"
    }

    fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut BodyRegistry {
        &mut self.registry
    }

    fn step(&mut self, dt: f32) {
        self.contacts.clear();
        self.detect_and_respond();
        self.integrate(dt);
        log::trace!(
            "collision step dt={dt} bodies={} contacts={}",
            self.registry.len(),
            self.contacts.len()
        );
    }
}

/// Orient, test, then reflect a sphere off a plane
///
/// The plane normal is flipped to face the sphere before the test; the flip
/// persists on the plane body.
fn collide_plane_sphere(plane_body: &mut Body, sphere_body: &mut Body) -> Option<Contact> {
    let (Shape::Plane(plane), Shape::Sphere(sphere)) = (&mut plane_body.shape, &sphere_body.shape)
    else {
        return None;
    };

    plane.orient_against(sphere_body.velocity);
    let distance = plane_sphere_distance(plane, sphere);
    if distance > sphere.radius() {
        return None;
    }

    sphere_body.velocity = reflect_off_plane(plane.normal(), sphere_body.velocity);
    Some(Contact {
        first: plane_body.id,
        second: sphere_body.id,
        kind: ContactKind::PlaneSphere,
        distance,
    })
}

/// Test two spheres and exchange velocity along their line of centers
///
/// `one` is the outer-loop body, so the line of centers points from it
/// toward `two`.
fn collide_spheres(one: &mut Body, two: &mut Body) -> Option<Contact> {
    let (Shape::Sphere(a), Shape::Sphere(b)) = (&one.shape, &two.shape) else {
        return None;
    };

    let distance = sphere_sphere_distance(a, b);
    if distance > a.radius() + b.radius() {
        return None;
    }

    let first = Impactor {
        center: a.center,
        mass: one.mass(),
        velocity: one.velocity,
    };
    let second = Impactor {
        center: b.center,
        mass: two.mass(),
        velocity: two.velocity,
    };
    match exchange_elastic(&first, &second) {
        Some((v1, v2)) => {
            one.velocity = v1;
            two.velocity = v2;
        }
        None => {
            log::warn!(
                "bodies {:?} and {:?} share a center, skipping response",
                one.id,
                two.id
            );
        }
    }

    Some(Contact {
        first: one.id,
        second: two.id,
        kind: ContactKind::SphereSphere,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Point3, Vector3, Zero};

    fn ground() -> Body {
        Body::static_plane(Point3::new(0.0, 0.0, 0.0), Vector3::unit_y()).unwrap()
    }

    fn ball(position: [f32; 3], velocity: [f32; 3]) -> Body {
        Body::sphere(
            Point3::new(position[0], position[1], position[2]),
            1.0,
            1.0,
            Vector3::new(velocity[0], velocity[1], velocity[2]),
        )
        .unwrap()
    }

    #[test]
    fn test_plane_sphere_bounce() {
        let mut physics = CollisionPhysics::default();
        let plane = physics.add_body(ground());
        let sphere = physics.add_body(ball([0.0, 0.5, 0.0], [1.0, -4.0, 0.0]));

        physics.step(0.0);

        assert_eq!(physics.contacts().len(), 1);
        let contact = physics.contacts()[0];
        assert_eq!(contact.kind, ContactKind::PlaneSphere);
        assert_eq!(contact.first, plane);
        assert_eq!(contact.second, sphere);

        let v = physics.registry().get(sphere).unwrap().velocity;
        assert!((v.x - 1.0).abs() < 1e-5);
        assert!((v.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_registered_before_plane_still_bounces() {
        let mut physics = CollisionPhysics::default();
        let sphere = physics.add_body(ball([0.0, 0.5, 0.0], [0.0, -4.0, 0.0]));
        physics.add_body(ground());

        physics.step(0.0);

        assert_eq!(physics.contacts().len(), 1);
        let v = physics.registry().get(sphere).unwrap().velocity;
        assert!((v.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_plane_normal_flips_to_face_sphere() {
        let mut physics = CollisionPhysics::default();
        let plane = physics.add_body(ground());
        // Below the plane and moving up into it
        physics.add_body(ball([0.0, -0.5, 0.0], [0.0, 3.0, 0.0]));

        physics.step(0.0);

        let normal = physics.registry().get(plane).unwrap().as_plane().unwrap().normal();
        assert_eq!(normal, -Vector3::unit_y());
        assert!(physics.bodies()[1].velocity.y < 0.0);
    }

    #[test]
    fn test_no_contact_when_clear() {
        let mut physics = CollisionPhysics::default();
        physics.add_body(ground());
        physics.add_body(ball([0.0, 3.0, 0.0], [0.0, -1.0, 0.0]));

        physics.step(1.0 / 60.0);
        assert!(physics.contacts().is_empty());
    }

    #[test]
    fn test_sphere_sphere_exchange() {
        let mut physics = CollisionPhysics::default();
        let a = physics.add_body(ball([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]));
        let b = physics.add_body(ball([1.5, 0.0, 0.0], [-1.0, 0.0, 0.0]));

        physics.step(0.0);

        assert_eq!(physics.contacts().len(), 1);
        assert_eq!(physics.contacts()[0].kind, ContactKind::SphereSphere);
        // Outer loop body first
        assert_eq!(physics.contacts()[0].first, b);
        assert!((physics.registry().get(a).unwrap().velocity.x + 1.0).abs() < 1e-5);
        assert!((physics.registry().get(b).unwrap().velocity.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_planes_never_interact_or_move() {
        let mut physics = CollisionPhysics::default();
        let mut wall = Body::static_plane(Point3::new(0.0, 0.0, 0.0), Vector3::unit_x()).unwrap().with_gravity();
        wall.velocity = Vector3::new(0.0, 1.0, 0.0);
        physics.add_body(ground().with_gravity());
        physics.add_body(wall);

        physics.step(1.0);

        assert!(physics.contacts().is_empty());
        assert_eq!(physics.bodies()[0].position(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(physics.bodies()[1].position(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(physics.bodies()[1].force, Vector3::zero());
    }

    #[test]
    fn test_staged_integration_drifts_twice() {
        let mut physics = CollisionPhysics::default();
        physics.add_body(ball([0.0, 10.0, 0.0], [2.0, 0.0, 0.0]).with_gravity());

        let dt = 0.1;
        physics.step(dt);

        let body = &physics.bodies()[0];
        let g = physics.settings().forces.gravity;
        // x: two drifts at constant speed; y: second drift uses the kicked velocity
        assert!((body.position().x - 0.4).abs() < 1e-5);
        assert!((body.position().y - (10.0 - g * dt * dt)).abs() < 1e-5);
        assert!((body.velocity.y + g * dt).abs() < 1e-5);
    }

    #[test]
    fn test_semi_implicit_integration_drifts_once() {
        let settings = CollisionSettings::default().with_integration(IntegrationScheme::SemiImplicit);
        let mut physics = CollisionPhysics::new(settings);
        physics.add_body(ball([0.0, 10.0, 0.0], [2.0, 0.0, 0.0]).with_gravity());

        let dt = 0.1;
        physics.step(dt);

        let body = &physics.bodies()[0];
        assert!((body.position().x - 0.2).abs() < 1e-5);
        assert!((body.position().y - 10.0).abs() < 1e-5);
        assert!((body.velocity.y + physics.settings().forces.gravity * dt).abs() < 1e-5);
    }

    #[test]
    fn test_force_recomputed_each_step() {
        let mut physics = CollisionPhysics::default();
        let id = physics.add_body(ball([0.0, 10.0, 0.0], [0.0, 0.0, 0.0]));
        physics.registry_mut().get_mut(id).unwrap().force = Vector3::new(100.0, 0.0, 0.0);

        physics.step(0.1);

        let body = physics.registry().get(id).unwrap();
        assert_eq!(body.force, Vector3::zero());
        assert_eq!(body.velocity, Vector3::zero());
    }

    #[test]
    fn test_resting_sphere_on_plane_stays_finite() {
        let mut physics = CollisionPhysics::default();
        physics.add_body(ground());
        physics.add_body(ball([0.0, 1.0, 0.0], [0.0, 0.0, 0.0]));

        physics.step(0.0);

        assert_eq!(physics.contacts().len(), 1);
        assert_eq!(physics.bodies()[1].velocity, Vector3::zero());
    }

    #[test]
    fn test_coincident_spheres_stay_finite() {
        let mut physics = CollisionPhysics::default();
        physics.add_body(ball([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]));
        physics.add_body(ball([0.0, 0.0, 0.0], [-1.0, 0.0, 0.0]));

        physics.step(0.0);

        for body in physics.bodies() {
            assert!(body.velocity.magnitude().is_finite());
        }
    }
}
