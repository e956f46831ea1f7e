//! Core simulation traits for the sandbox
//!
//! Defines the interface a simulation implements to be driven by the
//! [`SimulationManager`](super::manager::SimulationManager) frame loop.

use crate::error::Result;
use crate::gfx::scene::Scene;

/// Core trait for simulations driven by the sandbox
///
/// The manager calls these lifecycle methods to run the simulation against
/// the scene that hosts its bodies.
pub trait Simulation {
    /// Initialize the simulation
    ///
    /// Called once when the simulation is attached. Fails if the simulation
    /// refers to scene objects that do not exist.
    ///
    /// # Arguments
    /// * `scene` - Mutable reference to the scene the simulation reads its starting state from
    fn initialize(&mut self, scene: &mut Scene) -> Result<()>;

    /// Update simulation state
    ///
    /// Called every frame (or every fixed step) to advance the simulation.
    ///
    /// # Arguments
    /// * `delta_time` - Time step in seconds
    /// * `scene` - Mutable reference to scene for updating object positions
    fn update(&mut self, delta_time: f32, scene: &mut Scene);

    /// Get simulation name for logs
    fn name(&self) -> &str;

    /// Whether simulation is currently running
    fn is_running(&self) -> bool;

    /// Start/pause simulation
    fn set_running(&mut self, running: bool);

    /// Reset simulation to initial state
    fn reset(&mut self, scene: &mut Scene);

    /// Optional: Custom cleanup when simulation is removed
    fn cleanup(&mut self, _scene: &mut Scene) {
        // Default: no cleanup needed
    }
}
