//! Runtime sandbox configuration, optionally loaded from a TOML file
//!
//! Every field has a default, so a file only needs the keys it overrides:
//!
//! ```toml
//! strategy = "collision"
//! integration = "semi_implicit"
//! fixed_timestep = 0.016666668
//!
//! [forces]
//! gravity = 3.7
//! ```

use crate::error::{ensure_finite, ensure_positive, ConfigError, PhysicsError};
use crate::physics::collision::{CollisionPhysics, CollisionSettings, IntegrationScheme};
use crate::physics::forces::ForceModel;
use crate::physics::gravitational::{GravitationalPhysics, DEFAULT_ATTRACTOR_MASS};
use crate::physics::strategy::{PhysicsStrategy, StrategyKind};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Overrides the scenario's own strategy when set
    pub strategy: Option<StrategyKind>,
    pub forces: ForceModel,
    pub integration: IntegrationScheme,
    /// Multiplier applied to every frame time
    pub time_scale: f32,
    /// Step size in seconds; frames are accumulated into whole steps
    pub fixed_timestep: Option<f32>,
    /// Mass of the attractor, which also acts as the gravitational constant
    pub gravitational_attractor_mass: f32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            strategy: None,
            forces: ForceModel::default(),
            integration: IntegrationScheme::default(),
            time_scale: 1.0,
            fixed_timestep: None,
            gravitational_attractor_mass: DEFAULT_ATTRACTOR_MASS,
        }
    }
}

impl SandboxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        ensure_finite("forces.gravity", self.forces.gravity)?;
        ensure_non_negative("forces.air_viscosity", self.forces.air_viscosity)?;
        ensure_non_negative("time_scale", self.time_scale)?;
        if let Some(dt) = self.fixed_timestep {
            ensure_positive("fixed_timestep", dt)?;
        }
        ensure_positive("gravitational_attractor_mass", self.gravitational_attractor_mass)?;
        Ok(())
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_forces(mut self, forces: ForceModel) -> Self {
        self.forces = forces;
        self
    }

    pub fn with_integration(mut self, integration: IntegrationScheme) -> Self {
        self.integration = integration;
        self
    }

    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_fixed_timestep(mut self, fixed_timestep: Option<f32>) -> Self {
        self.fixed_timestep = fixed_timestep;
        self
    }

    pub fn with_attractor_mass(mut self, mass: f32) -> Self {
        self.gravitational_attractor_mass = mass;
        self
    }

    pub fn collision_settings(&self) -> CollisionSettings {
        CollisionSettings::default()
            .with_forces(self.forces)
            .with_integration(self.integration)
    }

    /// Builds an empty strategy of the given kind from these settings
    pub fn build_strategy(&self, kind: StrategyKind) -> Box<dyn PhysicsStrategy> {
        match kind {
            StrategyKind::Gravitational => Box::new(GravitationalPhysics::new()),
            StrategyKind::Collision => Box::new(CollisionPhysics::new(self.collision_settings())),
        }
    }
}

fn ensure_non_negative(name: &'static str, value: f32) -> Result<f32, PhysicsError> {
    let value = ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(PhysicsError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}
