//! Physics core
//!
//! Bodies are point-mass spheres or infinite static planes. Two interchangeable
//! strategies advance them once per frame:
//!
//! - [`GravitationalPhysics`]: every body is pulled toward the first one
//! - [`CollisionPhysics`]: brute-force pairwise contact detection with elastic
//!   response, plus gravity and optional drag
//!
//! The core depends only on the [`host`] traits, never on the rendering
//! scene.

pub mod body;
pub mod collision;
pub mod forces;
pub mod geometry;
pub mod gravitational;
pub mod host;
pub mod registry;
pub mod resolver;
pub mod strategy;

pub use body::{Body, BodyId, Shape, ShapeKind, IMMOVABLE_MASS};
pub use collision::{CollisionPhysics, CollisionSettings, Contact, ContactKind, IntegrationScheme};
pub use forces::ForceModel;
pub use gravitational::GravitationalPhysics;
pub use host::{HostId, HostRegistry, TransformHost};
pub use registry::BodyRegistry;
pub use strategy::{PhysicsStrategy, StrategyKind};
