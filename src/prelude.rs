//! # Sandbox Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ## Usage
//!
//! ```rust
//! use physx_sandbox::prelude::*;
//!
//! let mut physics = CollisionPhysics::default();
//! physics.add_body(Body::static_plane(Point3::new(0.0, 0.0, 0.0), Vector3::unit_y()).unwrap());
//! physics.add_body(
//!     Body::sphere(Point3::new(0.0, 0.5, 0.0), 1.0, 1.0, Vector3::new(0.0, -2.0, 0.0))
//!         .unwrap()
//!         .with_gravity(),
//! );
//!
//! physics.step(1.0 / 60.0);
//! assert_eq!(physics.contacts().len(), 1);
//! assert!(physics.bodies()[1].velocity.y > 0.0);
//! ```

// Re-export core application types
pub use crate::app::SandboxApp;
pub use crate::config::SandboxConfig;
pub use crate::error::{ConfigError, PhysicsError};
pub use crate::scenarios::{Scenario, ScenarioKind};

// Re-export physics types
pub use crate::physics::{
    Body, BodyId, CollisionPhysics, CollisionSettings, Contact, ContactKind, ForceModel,
    GravitationalPhysics, HostId, HostRegistry, IntegrationScheme, PhysicsStrategy, Shape,
    ShapeKind, StrategyKind, TransformHost, IMMOVABLE_MASS,
};

// Re-export graphics and scene types
pub use crate::gfx::geometry::{generate_plane, generate_sphere, GeometryData};
pub use crate::gfx::scene::{Object, Primitive, Scene};

// Re-export simulation framework
pub use crate::simulation::{PhysicsSimulation, Simulation, SimulationManager};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Point3, Vector3, Zero};
