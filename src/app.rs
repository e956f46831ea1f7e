use crate::config::SandboxConfig;
use crate::error::Result;
use crate::gfx::scene::Scene;
use crate::scenarios::Scenario;
use crate::simulation::{PhysicsSimulation, Simulation, SimulationManager};

/// Headless frame loop: a scene plus the simulation that moves it
pub struct SandboxApp {
    scene: Scene,
    simulation_manager: SimulationManager,
    frame_count: u64,
}

impl Default for SandboxApp {
    fn default() -> Self {
        Self::new()
    }
}

impl SandboxApp {
    /// Create an empty sandbox with no simulation attached
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            simulation_manager: SimulationManager::new(),
            frame_count: 0,
        }
    }

    /// Builds the scenario's scene and attaches a physics simulation for it
    ///
    /// The configured strategy wins over the scenario's own, and the
    /// configured time scale and fixed timestep are applied to the manager.
    pub fn from_scenario(scenario: Scenario, config: &SandboxConfig) -> Result<Self> {
        let Scenario {
            name,
            scene,
            bodies,
            strategy,
        } = scenario;

        let mut strategy = config.build_strategy(config.strategy.unwrap_or(strategy));
        for body in bodies {
            strategy.add_body(body);
        }

        let mut app = Self {
            scene,
            ..Self::new()
        };
        app.simulation_manager.set_time_scale(config.time_scale);
        app.simulation_manager.set_fixed_timestep(config.fixed_timestep);
        app.attach_simulation(Box::new(PhysicsSimulation::new(name, strategy)))?;
        Ok(app)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn simulation_manager(&self) -> &SimulationManager {
        &self.simulation_manager
    }

    pub fn simulation_manager_mut(&mut self) -> &mut SimulationManager {
        &mut self.simulation_manager
    }

    /// Attach a simulation, replacing any current one
    pub fn attach_simulation(&mut self, simulation: Box<dyn Simulation>) -> Result<()> {
        self.simulation_manager
            .attach_simulation(simulation, &mut self.scene)
    }

    /// Advances one frame: simulation update, then transform refresh
    pub fn frame(&mut self, delta_time: f32) {
        self.simulation_manager.update(delta_time, &mut self.scene);
        self.scene.update();
        self.frame_count += 1;
    }

    /// Runs `frames` frames of `delta_time` seconds each
    pub fn run_frames(&mut self, frames: u32, delta_time: f32) {
        for _ in 0..frames {
            self.frame(delta_time);
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn reset(&mut self) {
        self.simulation_manager.reset(&mut self.scene);
        self.scene.update();
        self.frame_count = 0;
    }
}
