use cgmath::{Deg, EuclideanSpace, InnerSpace, Matrix3, Matrix4, Point3, SquareMatrix, Vector3};

use crate::gfx::geometry::{generate_plane, generate_sphere, GeometryData};
use crate::physics::host::TransformHost;

/// Default sphere tessellation (sectors; stacks are half of this)
pub const SPHERE_SECTORS: u32 = 30;

/// Shape an object was generated from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere { radius: f32 },
    Plane { width: f32, depth: f32 },
}

/// A renderable object that owns its world transform
///
/// Translation, Euler rotation (degrees) and scale are the editable state;
/// the model matrix is cached and only rebuilt by [`Object::update_transforms`].
#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub primitive: Primitive,
    pub geometry: GeometryData,
    pub visible: bool,
    translation: Vector3<f32>,
    rotation: Vector3<f32>,
    scale: Vector3<f32>,
    transform: Matrix4<f32>, // cgmath 4x4 transformation matrix
}

impl Object {
    /// Create a new Object with identity transformation
    pub fn new(name: impl Into<String>, primitive: Primitive, geometry: GeometryData) -> Self {
        Self {
            name: name.into(),
            primitive,
            geometry,
            visible: true,
            translation: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            transform: Matrix4::identity(),
        }
    }

    /// UV sphere of the given radius
    pub fn sphere(name: impl Into<String>, radius: f32, sectors: u32) -> Self {
        let geometry = generate_sphere(radius, sectors, sectors / 2);
        Self::new(name, Primitive::Sphere { radius }, geometry)
    }

    /// Flat plane in local XZ with its normal along local +Y
    pub fn plane(name: impl Into<String>, width: f32, depth: f32) -> Self {
        let geometry = generate_plane(width, depth, 1, 1);
        Self::new(name, Primitive::Plane { width, depth }, geometry)
    }

    pub fn translation(&self) -> Vector3<f32> {
        self.translation
    }

    /// Euler angles in degrees, applied X then Y then Z
    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn scale(&self) -> Vector3<f32> {
        self.scale
    }

    /// Cached model matrix as of the last [`Object::update_transforms`]
    pub fn transform(&self) -> Matrix4<f32> {
        self.transform
    }

    /// Set translation
    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.translation = translation;
    }

    /// Set rotation in degrees
    pub fn set_rotation(&mut self, rotation: Vector3<f32>) {
        self.rotation = rotation;
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = Vector3::new(scale, scale, scale);
    }

    /// Set non-uniform scale
    pub fn set_scale_xyz(&mut self, scale: Vector3<f32>) {
        self.scale = scale;
    }

    fn rotation_matrix(&self) -> Matrix3<f32> {
        Matrix3::from_angle_x(Deg(self.rotation.x))
            * Matrix3::from_angle_y(Deg(self.rotation.y))
            * Matrix3::from_angle_z(Deg(self.rotation.z))
    }

    /// Rebuild the model matrix from translation, rotation and scale
    pub fn update_transforms(&mut self) {
        let t = Matrix4::from_translation(self.translation);
        let r = Matrix4::from(self.rotation_matrix());
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        self.transform = t * r * s; // Order matters: T * R * S
    }
}

impl TransformHost for Object {
    fn world_position(&self) -> Point3<f32> {
        Point3::from_vec(self.translation)
    }

    fn set_world_position(&mut self, x: f32, y: f32, z: f32) {
        self.translation = Vector3::new(x, y, z);
    }

    fn up_axis(&self) -> Vector3<f32> {
        (self.rotation_matrix() * Vector3::unit_y()).normalize()
    }

    fn update_transforms(&mut self) {
        Object::update_transforms(self);
    }
}
