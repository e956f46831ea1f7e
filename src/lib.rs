// src/lib.rs
//! Physics sandbox
//!
//! A small physics core embedded in a CPU-side 3D scene host. Bodies are
//! spheres and static planes advanced by one of two strategies: a
//! single-attractor inverse-square orbit model, or a brute-force
//! sphere/plane collision sandbox with elastic response.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod physics;
pub mod prelude;
pub mod scenarios;
pub mod simulation;

// Re-export main types for convenience
pub use app::SandboxApp;

/// Creates a default sandbox instance with an empty scene
pub fn default() -> SandboxApp {
    SandboxApp::new()
}
