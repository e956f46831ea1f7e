//! Simulation manager for the sandbox
//!
//! Manages the lifecycle of the active simulation and feeds it frame times.

use super::traits::Simulation;
use crate::error::Result;
use crate::gfx::scene::Scene;

/// Drives at most one simulation at a time
pub struct SimulationManager {
    simulation: Option<Box<dyn Simulation>>,
    is_paused: bool,
    time_scale: f32,
    accumulated_time: f32,
    fixed_timestep: Option<f32>, // For deterministic simulations
}

impl Default for SimulationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationManager {
    pub fn new() -> Self {
        Self {
            simulation: None,
            is_paused: false,
            time_scale: 1.0,
            accumulated_time: 0.0,
            fixed_timestep: None,
        }
    }

    /// Attach a simulation, replacing the current one
    ///
    /// The previous simulation is cleaned up first. If the new simulation
    /// fails to initialize, no simulation is attached.
    ///
    /// # Arguments
    /// * `simulation` - Boxed simulation implementing the Simulation trait
    /// * `scene` - Scene to initialize the simulation with
    pub fn attach_simulation(&mut self, mut simulation: Box<dyn Simulation>, scene: &mut Scene) -> Result<()> {
        if let Some(mut old_sim) = self.simulation.take() {
            log::info!("replacing simulation '{}'", old_sim.name());
            old_sim.cleanup(scene);
        }

        simulation.initialize(scene)?;
        simulation.set_running(true);
        log::info!("attached simulation '{}'", simulation.name());
        self.simulation = Some(simulation);
        self.is_paused = false;
        self.accumulated_time = 0.0;
        Ok(())
    }

    /// Remove current simulation
    pub fn detach_simulation(&mut self, scene: &mut Scene) {
        if let Some(mut sim) = self.simulation.take() {
            sim.cleanup(scene);
        }
    }

    /// Update simulation (called every frame)
    ///
    /// `delta_time` is scaled by the time scale and otherwise passed through
    /// unchanged, so a long frame produces one large step. With a fixed
    /// timestep, the scaled time is accumulated and consumed in whole steps.
    ///
    /// # Arguments
    /// * `delta_time` - Time elapsed since last frame in seconds
    /// * `scene` - Scene to update with simulation results
    pub fn update(&mut self, delta_time: f32, scene: &mut Scene) {
        if self.is_paused {
            return;
        }

        if let Some(simulation) = &mut self.simulation {
            let scaled_delta = delta_time * self.time_scale;

            if let Some(fixed_dt) = self.fixed_timestep {
                self.accumulated_time += scaled_delta;

                while self.accumulated_time >= fixed_dt {
                    simulation.update(fixed_dt, scene);
                    self.accumulated_time -= fixed_dt;
                }
            } else {
                simulation.update(scaled_delta, scene);
            }
        }
    }

    /// Reset the attached simulation to its initial state
    pub fn reset(&mut self, scene: &mut Scene) {
        self.accumulated_time = 0.0;
        if let Some(simulation) = &mut self.simulation {
            simulation.reset(scene);
        }
    }

    pub fn current_simulation_name(&self) -> Option<&str> {
        self.simulation.as_ref().map(|s| s.name())
    }

    /// `true` if a simulation exists and is not paused
    pub fn is_running(&self) -> bool {
        !self.is_paused && self.simulation.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
        if let Some(simulation) = &mut self.simulation {
            simulation.set_running(!paused);
        }
    }

    /// Enable fixed timestep mode, or `None` for variable timestep
    pub fn set_fixed_timestep(&mut self, timestep: Option<f32>) {
        self.fixed_timestep = timestep.filter(|dt| *dt > 0.0);
        self.accumulated_time = 0.0;
    }

    pub fn fixed_timestep(&self) -> Option<f32> {
        self.fixed_timestep
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set time scale (1.0 = normal speed)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0); // Prevent negative time
    }

    pub fn has_simulation(&self) -> bool {
        self.simulation.is_some()
    }
}
