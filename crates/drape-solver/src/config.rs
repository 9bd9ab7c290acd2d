//! Cloth and solver configuration.
//!
//! `ClothConfig` fixes the topology at construction time; `SolverConfig`
//! holds the parameters passed to every substep.

use drape_math::Vec3;
use drape_mesh::GridDimensions;
use drape_types::constants;
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::step::StepParams;

/// Construction parameters for a cloth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    /// Particles along X.
    pub res_x: usize,
    /// Particles along Z.
    pub res_y: usize,
    /// Rest distance between horizontally adjacent particles.
    pub spacing_x: f32,
    /// Rest distance between vertically adjacent particles.
    pub spacing_y: f32,
    /// Scale applied to every distance-constraint correction, in (0, 1].
    pub stiffness: f32,
    /// Pin the two corners of the last row.
    pub has_pin_constraint: bool,
    /// Translation of the whole grid in world space.
    pub world_offset: [f32; 3],
    /// Mass of every free particle (kg).
    pub particle_mass: f32,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            res_x: 51,
            res_y: 51,
            spacing_x: 0.45,
            spacing_y: 0.6,
            stiffness: 1.0,
            has_pin_constraint: true,
            world_offset: [-10.0, 10.0, -20.0],
            particle_mass: constants::DEFAULT_PARTICLE_MASS,
        }
    }
}

impl ClothConfig {
    /// A small square cloth at the origin, useful for tests and quick runs.
    pub fn square(res: usize, spacing: f32) -> Self {
        Self {
            res_x: res,
            res_y: res,
            spacing_x: spacing,
            spacing_y: spacing,
            world_offset: [0.0; 3],
            ..Default::default()
        }
    }

    /// Returns validated grid dimensions.
    pub fn dimensions(&self) -> DrapeResult<GridDimensions> {
        GridDimensions::new(self.res_x, self.res_y, self.spacing_x, self.spacing_y)
    }

    /// World offset as a vector.
    pub fn offset(&self) -> Vec3 {
        Vec3::from_array(self.world_offset)
    }

    /// Validates all construction parameters.
    pub fn validate(&self) -> DrapeResult<()> {
        self.dimensions()?;
        if !(self.stiffness > 0.0 && self.stiffness <= 1.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "stiffness must be in (0, 1], got {}",
                self.stiffness
            )));
        }
        if !(self.particle_mass.is_finite() && self.particle_mass > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "particle_mass must be positive and finite, got {}",
                self.particle_mass
            )));
        }
        if !self.offset().is_finite() {
            return Err(DrapeError::InvalidConfig(
                "world_offset must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the per-substep solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Substep length (seconds).
    pub dt: f32,

    /// Continuous damping rate in [0, 1). Velocity is scaled by
    /// `(1 - damping_rate)^dt` each substep.
    pub damping_rate: f32,

    /// Enforce pin constraints during projection.
    pub has_pin_constraint: bool,

    /// Projection iterations per substep.
    pub solver_iterations: u32,

    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            dt: constants::DEFAULT_DT,
            damping_rate: constants::DEFAULT_DAMPING_RATE,
            has_pin_constraint: true,
            solver_iterations: constants::DEFAULT_SOLVER_ITERATIONS,
            gravity: [0.0, -constants::GRAVITY, 0.0],
        }
    }
}

impl SolverConfig {
    /// Creates a config for debugging (few iterations).
    pub fn debug() -> Self {
        Self {
            solver_iterations: 2,
            ..Default::default()
        }
    }

    /// Creates a high-quality config (more iterations).
    pub fn high_quality() -> Self {
        Self {
            solver_iterations: 30,
            ..Default::default()
        }
    }

    /// Per-substep parameters for [`Cloth::advance`](crate::Cloth::advance).
    pub fn step_params(&self) -> StepParams {
        StepParams {
            dt: self.dt,
            damping_rate: self.damping_rate,
            pin_enabled: self.has_pin_constraint,
            iterations: self.solver_iterations,
            gravity: Vec3::from_array(self.gravity),
        }
    }

    /// Validates the solver parameters.
    pub fn validate(&self) -> DrapeResult<()> {
        self.step_params().validate()
    }
}
