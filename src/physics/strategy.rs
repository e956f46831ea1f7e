//! The interface shared by the two simulation strategies
//!
//! A strategy owns a [`BodyRegistry`] and advances it with `step(dt)`. Host
//! synchronisation is layered on top: the caller pulls starting poses from
//! the scene once, then pushes positions back after every step so the
//! render pass sees the new state.

use super::body::{Body, BodyId, Shape};
use super::host::HostRegistry;
use super::registry::BodyRegistry;
use crate::error::{PhysicsError, Result};
use serde::Deserialize;

/// Which strategy a scene runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Single-attractor inverse-square orbits
    Gravitational,
    /// Sphere/plane contact detection and elastic response
    #[default]
    Collision,
}

/// A discrete-time physics step over a registry of bodies
pub trait PhysicsStrategy {
    /// Human-readable name for logs
    fn name(&self) -> &str;

    fn registry(&self) -> &BodyRegistry;

    fn registry_mut(&mut self) -> &mut BodyRegistry;

    /// Advances every body by `dt` seconds
    ///
    /// Runs to completion and never fails. `dt` is used as given, including
    /// large spikes.
    fn step(&mut self, dt: f32);

    /// Registers a body; must be called before simulation starts
    fn add_body(&mut self, body: Body) -> BodyId {
        self.registry_mut().add(body)
    }

    fn bodies(&self) -> &[Body] {
        self.registry().bodies()
    }

    /// Refreshes every hosted body's geometry from its host's transform
    ///
    /// Spheres take the host position as their center. Planes take the host
    /// position as their anchor and the host up axis as their normal, which
    /// also refreshes the cached offset.
    fn pull_from_hosts(&mut self, hosts: &dyn HostRegistry) -> Result<()> {
        for body in self.registry_mut().bodies_mut() {
            let Some(id) = body.host else {
                continue;
            };
            let host = hosts.host(id).ok_or(PhysicsError::UnknownHost(id))?;
            let position = host.world_position();
            match &mut body.shape {
                Shape::Sphere(sphere) => sphere.center = position,
                Shape::Plane(plane) => {
                    plane.set_normal(host.up_axis())?;
                    plane.set_anchor(position);
                }
            }
        }
        Ok(())
    }

    /// Writes each hosted sphere's position back to its host
    ///
    /// Planes are static colliders and are left alone. Bodies whose host has
    /// disappeared are skipped.
    fn sync_hosts(&self, hosts: &mut dyn HostRegistry) {
        for body in self.bodies() {
            let (Some(id), Shape::Sphere(sphere)) = (body.host, &body.shape) else {
                continue;
            };
            match hosts.host_mut(id) {
                Some(host) => {
                    let c = sphere.center;
                    host.set_world_position(c.x, c.y, c.z);
                    host.update_transforms();
                }
                None => log::warn!("body {:?} points at missing host {:?}", body.id, id),
            }
        }
    }
}
