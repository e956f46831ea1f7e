use cgmath::{Point3, Vector3};

use super::object::{Object, SPHERE_SECTORS};
use crate::physics::host::{HostId, HostRegistry, TransformHost};

/// Main scene containing the objects that physics bodies are hosted by
///
/// Objects are addressed by [`HostId`], their index in insertion order.
/// Objects are never removed while a simulation runs, so ids stay valid.
#[derive(Debug, Clone)]
pub struct Scene {
    pub objects: Vec<Object>,
    pub ambient_color: [f32; 3],
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            ambient_color: [1.0, 1.0, 1.0],
        }
    }

    /// Refreshes every object's cached model matrix
    pub fn update(&mut self) {
        for object in self.objects.iter_mut() {
            object.update_transforms();
        }
    }

    /// Adds an object and returns its id
    pub fn add_object(&mut self, mut object: Object) -> HostId {
        object.update_transforms();
        self.objects.push(object);
        HostId(self.objects.len() - 1)
    }

    /// Adds a sphere centered at `position`
    pub fn add_sphere(&mut self, name: &str, radius: f32, position: Point3<f32>) -> HostId {
        let mut object = Object::sphere(name, radius, SPHERE_SECTORS);
        object.set_world_position(position.x, position.y, position.z);
        self.add_object(object)
    }

    /// Adds a plane through `position`, rotated by Euler angles in degrees
    ///
    /// An unrotated plane faces +Y.
    pub fn add_plane(
        &mut self,
        name: &str,
        width: f32,
        depth: f32,
        position: Point3<f32>,
        rotation: Vector3<f32>,
    ) -> HostId {
        let mut object = Object::plane(name, width, depth);
        object.set_world_position(position.x, position.y, position.z);
        object.set_rotation(rotation);
        self.add_object(object)
    }

    pub fn object(&self, id: HostId) -> Option<&Object> {
        self.objects.get(id.0)
    }

    pub fn object_mut(&mut self, id: HostId) -> Option<&mut Object> {
        self.objects.get_mut(id.0)
    }

    /// Looks an object up by name
    pub fn find(&self, name: &str) -> Option<HostId> {
        self.objects.iter().position(|o| o.name == name).map(HostId)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl HostRegistry for Scene {
    fn host(&self, id: HostId) -> Option<&dyn TransformHost> {
        self.object(id).map(|o| o as &dyn TransformHost)
    }

    fn host_mut(&mut self, id: HostId) -> Option<&mut dyn TransformHost> {
        self.object_mut(id).map(|o| o as &mut dyn TransformHost)
    }
}
