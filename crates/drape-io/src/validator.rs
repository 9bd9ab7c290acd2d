//! Input validation.
//!
//! Everything a run needs is checked here, before any cloth is built.

use drape_types::{DrapeError, DrapeResult};

use crate::contract::{SimulationInput, SphereSpec};

/// Validates a complete simulation input.
///
/// Checks:
/// - Cloth grid, stiffness and particle mass
/// - Solver dt, damping rate, iterations and gravity
/// - Sphere center, radius and velocity
/// - Frame loop counts
pub fn validate_input(input: &SimulationInput) -> DrapeResult<()> {
    input.cloth.validate()?;
    input.solver.validate()?;
    validate_sphere(&input.sphere)?;

    if input.frames == 0 {
        return Err(DrapeError::InvalidConfig("frames must be >= 1".into()));
    }
    if input.substeps_per_frame == 0 {
        return Err(DrapeError::InvalidConfig(
            "substeps_per_frame must be >= 1".into(),
        ));
    }
    if input.cloth.has_pin_constraint != input.solver.has_pin_constraint {
        tracing::warn!(
            cloth = input.cloth.has_pin_constraint,
            solver = input.solver.has_pin_constraint,
            "pin settings of cloth and solver differ"
        );
    }

    Ok(())
}

fn validate_sphere(sphere: &SphereSpec) -> DrapeResult<()> {
    if !(sphere.radius.is_finite() && sphere.radius >= 0.0) {
        return Err(DrapeError::InvalidConfig(format!(
            "sphere radius must be finite and non-negative, got {}",
            sphere.radius
        )));
    }
    if sphere.center.iter().any(|c| !c.is_finite()) {
        return Err(DrapeError::InvalidConfig("sphere center must be finite".into()));
    }
    if let Some(v) = sphere.velocity {
        if v.iter().any(|c| !c.is_finite()) {
            return Err(DrapeError::InvalidConfig(
                "sphere velocity must be finite".into(),
            ));
        }
    }
    Ok(())
}
