//! Geometry-only view of the objects that own a body's world transform
//!
//! Bodies never own their transform. The scene layer owns it and exposes
//! these traits so the physics core can read a starting pose and write back
//! integrated positions without knowing about meshes or matrices.

use cgmath::{Point3, Vector3};

/// Handle to a host object inside a [`HostRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId(pub usize);

/// An object with a world transform that the physics core can drive
pub trait TransformHost {
    /// Current world position
    fn world_position(&self) -> Point3<f32>;

    /// Overwrite the world position component-wise
    fn set_world_position(&mut self, x: f32, y: f32, z: f32);

    /// Local +Y axis rotated into world space
    ///
    /// Planes use this as their surface normal.
    fn up_axis(&self) -> Vector3<f32>;

    /// Rebuild any cached transform after the position or orientation changed
    fn update_transforms(&mut self);
}

/// Lookup from [`HostId`] to the host object
pub trait HostRegistry {
    fn host(&self, id: HostId) -> Option<&dyn TransformHost>;

    fn host_mut(&mut self, id: HostId) -> Option<&mut dyn TransformHost>;
}
