//! Per-substep parameters and outcomes.

use std::fmt;

use drape_contact::ContactResult;
use drape_math::Vec3;
use drape_types::constants::GRAVITY;
use drape_types::{ConstraintId, DrapeError, DrapeResult, ParticleId};

/// Inputs of one call to [`Cloth::advance`](crate::Cloth::advance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    /// Substep length (seconds). Must be positive.
    pub dt: f32,
    /// Continuous damping rate in [0, 1).
    pub damping_rate: f32,
    /// Enforce pin constraints this call.
    pub pin_enabled: bool,
    /// Projection iterations, at least 1.
    pub iterations: u32,
    /// External acceleration applied to free particles.
    pub gravity: Vec3,
}

impl StepParams {
    /// Parameters with standard gravity `(0, -9.8, 0)`.
    pub fn new(dt: f32, damping_rate: f32, pin_enabled: bool, iterations: u32) -> Self {
        Self {
            dt,
            damping_rate,
            pin_enabled,
            iterations,
            gravity: Vec3::new(0.0, -GRAVITY, 0.0),
        }
    }

    /// Checks the call preconditions.
    pub fn validate(&self) -> DrapeResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if !(0.0..1.0).contains(&self.damping_rate) {
            return Err(DrapeError::InvalidConfig(format!(
                "damping_rate must be in [0, 1), got {}",
                self.damping_rate
            )));
        }
        if self.iterations == 0 {
            return Err(DrapeError::InvalidConfig(
                "solver iterations must be >= 1".into(),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(DrapeError::InvalidConfig("gravity must be finite".into()));
        }
        Ok(())
    }
}

/// Statistics of a completed substep.
#[derive(Debug, Clone, PartialEq)]
pub struct StepStats {
    /// Projection iterations performed.
    pub iterations: u32,
    /// Largest |dist - rest_length| seen during the last iteration's sweep.
    pub final_residual: f32,
    /// Sphere contacts summed over all iterations.
    pub contacts: ContactResult,
    /// Wall-clock time for this substep (seconds).
    pub wall_time: f64,
}

/// Why a substep was abandoned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbortReason {
    /// The two endpoints of a constraint nearly coincide.
    DegenerateSeparation {
        constraint: ConstraintId,
        particles: [ParticleId; 2],
        iteration: u32,
        separation: f32,
    },
    /// Both endpoints of a constraint have zero inverse mass.
    ZeroInverseMass {
        constraint: ConstraintId,
        iteration: u32,
    },
}

impl AbortReason {
    /// Constraint that triggered the abort.
    pub fn constraint(&self) -> ConstraintId {
        match *self {
            AbortReason::DegenerateSeparation { constraint, .. } => constraint,
            AbortReason::ZeroInverseMass { constraint, .. } => constraint,
        }
    }

    /// Iteration during which the abort happened.
    pub fn iteration(&self) -> u32 {
        match *self {
            AbortReason::DegenerateSeparation { iteration, .. } => iteration,
            AbortReason::ZeroInverseMass { iteration, .. } => iteration,
        }
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::DegenerateSeparation {
                constraint,
                particles: [a, b],
                iteration,
                separation,
            } => write!(
                f,
                "degenerate separation {separation:.3e} between {a} and {b} on {constraint} (iteration {iteration})"
            ),
            AbortReason::ZeroInverseMass {
                constraint,
                iteration,
            } => write!(
                f,
                "both endpoints of {constraint} have zero inverse mass (iteration {iteration})"
            ),
        }
    }
}

/// Result of one substep.
///
/// An aborted substep leaves positions and velocities exactly as the
/// previous completed substep left them.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Completed(StepStats),
    Aborted(AbortReason),
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed(_))
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, StepOutcome::Aborted(_))
    }

    /// Statistics, if the substep completed.
    pub fn stats(&self) -> Option<&StepStats> {
        match self {
            StepOutcome::Completed(stats) => Some(stats),
            StepOutcome::Aborted(_) => None,
        }
    }

    /// Abort reason, if the substep was abandoned.
    pub fn abort_reason(&self) -> Option<&AbortReason> {
        match self {
            StepOutcome::Completed(_) => None,
            StepOutcome::Aborted(reason) => Some(reason),
        }
    }
}
