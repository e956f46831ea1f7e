//! Simulation system
//!
//! Frame-driven lifecycle around the physics strategies: a [`Simulation`]
//! trait, a [`SimulationManager`] that owns the active one, and
//! [`PhysicsSimulation`] which adapts a strategy to the scene.

pub mod manager;
pub mod physics;
pub mod traits;

pub use manager::SimulationManager;
pub use physics::PhysicsSimulation;
pub use traits::Simulation;
