//! Simulation input contract types.
//!
//! These are serializable so a run can be described in a TOML file:
//!
//! ```toml
//! frames = 240
//! substeps_per_frame = 10
//!
//! [cloth]
//! res_x = 51
//! res_y = 51
//!
//! [solver]
//! solver_iterations = 10
//!
//! [sphere]
//! center = [0.0, 0.0, 0.0]
//! radius = 5.0
//! ```

use std::path::Path;

use drape_contact::SphereCollider;
use drape_math::Vec3;
use drape_solver::{ClothConfig, SolverConfig};
use drape_types::constants;
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// The sphere obstacle of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereSpec {
    /// Center at t = 0.
    pub center: [f32; 3],
    pub radius: f32,
    /// Constant velocity of the center. `None` keeps the sphere static.
    pub velocity: Option<[f32; 3]>,
}

impl Default for SphereSpec {
    fn default() -> Self {
        Self {
            center: [0.0; 3],
            radius: 5.0,
            velocity: None,
        }
    }
}

impl SphereSpec {
    /// Collider at simulated time `t` (seconds).
    pub fn collider_at(&self, t: f64) -> SphereCollider {
        let mut center = Vec3::from_array(self.center);
        if let Some(v) = self.velocity {
            center += Vec3::from_array(v) * t as f32;
        }
        SphereCollider::new(center, self.radius)
    }
}

/// Complete description of a simulation run.
///
/// The default is the hanging-cloth demo: a 51×51 cloth pinned at two
/// corners above a radius-5 sphere, 240 frames of 10 substeps each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInput {
    /// Rendered frames.
    pub frames: u32,
    /// Solver substeps per rendered frame.
    pub substeps_per_frame: u32,
    pub cloth: ClothConfig,
    pub solver: SolverConfig,
    pub sphere: SphereSpec,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            frames: 240,
            substeps_per_frame: constants::DEFAULT_SUBSTEPS,
            cloth: ClothConfig::default(),
            solver: SolverConfig::default(),
            sphere: SphereSpec::default(),
        }
    }
}

impl SimulationInput {
    /// Parses a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> DrapeResult<Self> {
        toml::from_str(text).map_err(|e| DrapeError::Serialization(format!("invalid TOML: {e}")))
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> DrapeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> DrapeResult<String> {
        toml::to_string_pretty(self).map_err(|e| DrapeError::Serialization(e.to_string()))
    }

    /// Total solver substeps of the run.
    pub fn total_substeps(&self) -> u64 {
        self.frames as u64 * self.substeps_per_frame as u64
    }

    /// Simulated duration of the run (seconds).
    pub fn duration(&self) -> f64 {
        self.total_substeps() as f64 * self.solver.dt as f64
    }
}
