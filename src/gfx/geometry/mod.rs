//! # Procedural Geometry Generation
//!
//! Meshes for the two collider shapes, generated on the CPU so scenes need no
//! model files.
//!
//! ## Usage
//!
//! ```rust
//! use physx_sandbox::gfx::geometry::{generate_plane, generate_sphere};
//!
//! // A sphere of radius 2 with 30 sectors and 15 stacks
//! let sphere = generate_sphere(2.0, 30, 15);
//!
//! // A 20x20 ground plane with 4 subdivisions per side
//! let ground = generate_plane(20.0, 20.0, 4, 4);
//! assert_eq!(ground.vertex_count(), 25);
//! ```

pub mod primitives;

pub use primitives::*;

/// Generated geometry data, kept on the CPU for the renderer to upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Smallest and largest coordinate on each axis, or `None` when empty
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = *self.vertices.first()?;
        let bounds = self.vertices.iter().fold((first, first), |(mut min, mut max), v| {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
            (min, max)
        });
        Some(bounds)
    }
}
