//! # Graphics Module
//!
//! The host side of the sandbox: procedural geometry and the scene of
//! transformable objects the physics core writes positions into.
//!
//! - **Geometry** ([`geometry`]) - Procedural sphere and plane meshes
//! - **Scene Management** ([`scene`]) - Objects, transforms and host lookup

pub mod geometry;
pub mod scene;

// Re-export commonly used types
pub use scene::{Object, Scene};
