//! Position-based projection kernels.
//!
//! These operate on predicted positions only. Velocities and committed
//! positions are touched solely by pin enforcement and by
//! [`SimulationState::reconcile`](crate::SimulationState::reconcile).

use drape_types::constants::EPSILON;
use drape_types::{ConstraintId, ParticleId};

use crate::constraints::{DistanceConstraints, PinConstraint};
use crate::state::SimulationState;
use crate::step::AbortReason;

/// One Gauss–Seidel sweep over all distance constraints.
///
/// Each correction is written back immediately, so later constraints in the
/// same sweep see it. Returns the largest `|dist - rest_length|` observed
/// before correction, or the abort reason for the first constraint whose
/// endpoints coincide or are both immovable. On abort the remaining
/// constraints are not visited.
pub fn project_distance(
    state: &mut SimulationState,
    constraints: &DistanceConstraints,
    stiffness: f32,
    iteration: u32,
) -> Result<f32, AbortReason> {
    let mut residual = 0.0f32;

    for k in 0..constraints.len() {
        let [i, j] = constraints.pairs[k];
        let rest_length = constraints.rest_lengths[k];

        let delta = state.predicted[i] - state.predicted[j];
        let dist = delta.length();
        if dist < EPSILON {
            return Err(AbortReason::DegenerateSeparation {
                constraint: ConstraintId(k as u32),
                particles: [ParticleId(i as u32), ParticleId(j as u32)],
                iteration,
                separation: dist,
            });
        }

        let w1 = state.inverse_mass[i];
        let w2 = state.inverse_mass[j];
        let w_sum = w1 + w2;
        if w_sum < EPSILON {
            return Err(AbortReason::ZeroInverseMass {
                constraint: ConstraintId(k as u32),
                iteration,
            });
        }

        let violation = dist - rest_length;
        residual = residual.max(violation.abs());

        let n = delta / dist;
        let c = n * (violation / w_sum) * stiffness;
        state.predicted[i] -= c * w1;
        state.predicted[j] += c * w2;
    }

    Ok(residual)
}

/// Snap pinned particles back to their pin positions.
///
/// Both the committed and the predicted position are overwritten, so a pinned
/// particle reconciles with zero velocity.
pub fn enforce_pins(state: &mut SimulationState, pins: &[PinConstraint]) {
    for pin in pins {
        state.positions[pin.particle] = pin.position;
        state.predicted[pin.particle] = pin.position;
    }
}
