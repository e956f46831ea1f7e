//! Adapter that runs a physics strategy as a [`Simulation`]
//!
//! On attach the strategy pulls starting poses from the scene and the
//! resulting bodies are snapshotted. Every update steps the strategy once and
//! pushes sphere positions back into the scene.

use super::traits::Simulation;
use crate::error::Result;
use crate::gfx::scene::Scene;
use crate::physics::{Body, PhysicsStrategy};

pub struct PhysicsSimulation {
    name: String,
    running: bool,
    strategy: Box<dyn PhysicsStrategy>,
    initial_state: Vec<Body>,
    steps: u64,
    simulated_time: f64,
}

impl PhysicsSimulation {
    pub fn new(name: impl Into<String>, strategy: Box<dyn PhysicsStrategy>) -> Self {
        Self {
            name: name.into(),
            running: false,
            strategy,
            initial_state: Vec::new(),
            steps: 0,
            simulated_time: 0.0,
        }
    }

    pub fn strategy(&self) -> &dyn PhysicsStrategy {
        self.strategy.as_ref()
    }

    pub fn strategy_mut(&mut self) -> &mut dyn PhysicsStrategy {
        self.strategy.as_mut()
    }

    pub fn bodies(&self) -> &[Body] {
        self.strategy.bodies()
    }

    /// Steps taken since attach or the last reset
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Sum of every `dt` stepped since attach or the last reset
    pub fn simulated_time(&self) -> f64 {
        self.simulated_time
    }

    /// Mean step size, or zero before the first step
    pub fn mean_step(&self) -> f64 {
        match self.steps {
            0 => 0.0,
            n => self.simulated_time / n as f64,
        }
    }
}

impl Simulation for PhysicsSimulation {
    fn initialize(&mut self, scene: &mut Scene) -> Result<()> {
        self.strategy.pull_from_hosts(scene)?;
        self.initial_state = self.strategy.registry().snapshot();
        self.strategy.sync_hosts(scene);
        self.running = true;
        self.steps = 0;
        self.simulated_time = 0.0;
        log::info!(
            "{}: {} bodies under {} physics",
            self.name,
            self.initial_state.len(),
            self.strategy.name()
        );
        Ok(())
    }

    fn update(&mut self, delta_time: f32, scene: &mut Scene) {
        if !self.running {
            return;
        }
        self.strategy.step(delta_time);
        self.strategy.sync_hosts(scene);
        self.steps += 1;
        self.simulated_time += f64::from(delta_time);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn reset(&mut self, scene: &mut Scene) {
        self.strategy.registry_mut().restore(&self.initial_state);
        self.strategy.sync_hosts(scene);
        self.steps = 0;
        self.simulated_time = 0.0;
        log::debug!("{}: reset to initial state", self.name);
    }
}
