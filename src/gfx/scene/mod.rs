//! # Scene Management Module
//!
//! CPU-side scene bookkeeping: named objects with procedural meshes and a
//! cached model matrix. Objects double as physics hosts through
//! [`crate::physics::host::TransformHost`].
//!
//! ## Usage
//!
//! ```rust
//! use physx_sandbox::gfx::scene::Scene;
//! use cgmath::{Point3, Vector3};
//!
//! let mut scene = Scene::new();
//! let floor = scene.add_plane("floor", 20.0, 20.0, Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0));
//! let ball = scene.add_sphere("ball", 1.0, Point3::new(0.0, 5.0, 0.0));
//!
//! scene.update();
//! assert_eq!(scene.len(), 2);
//! ```

pub mod object;
pub mod scene;

// Re-export main types
pub use object::{Object, Primitive};
pub use scene::Scene;
