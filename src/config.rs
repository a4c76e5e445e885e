//! Simulation configuration
//!
//! TOML-backed configuration covering the physics run parameters and the
//! per-body initial conditions produced by the ephemeris fetch utility.

use crate::physics::bodies::Body;
use crate::physics::math::{Scalar, Vector};
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PhysicsConfig {
    /// Integrator name or alias, resolved through the registry
    pub integrator: String,
    /// Step size in days
    pub step_size_days: Scalar,
    /// Number of integration steps per run
    pub total_steps: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            integrator: "velocity_verlet".to_string(),
            step_size_days: 1.0,
            total_steps: 365,
        }
    }
}

/// Initial conditions for one body at the chosen epoch
///
/// Mass in kg, position in AU, velocity in AU/day — the same vectors the
/// fetch utility serializes from the ephemeris service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mass: Scalar,
    pub position: [Scalar; 3],
    pub velocity: [Scalar; 3],
}

impl BodyConfig {
    pub fn to_body(&self) -> Body {
        Body::new(
            self.mass,
            Vector::from_array(self.position),
            Vector::from_array(self.velocity),
        )
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file
    /// doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {path}: {e}. Using defaults.");
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {path} not found. Using defaults.");
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
