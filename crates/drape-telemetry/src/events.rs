//! Simulation event types.
//!
//! Events are small value types tagged with the substep index they
//! belong to.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Substep number (0-indexed).
    pub timestep: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Substep started.
    TimestepBegin {
        /// Simulated time at the start of the substep (seconds).
        sim_time: f64,
    },

    /// Substep completed.
    TimestepEnd {
        /// Wall-clock time for the substep (seconds).
        wall_time: f64,
    },

    /// Projection iteration completed.
    SolverIteration {
        /// Iteration number within the substep.
        iteration: u32,
        /// Largest |dist - rest_length| seen while projecting.
        residual: f64,
    },

    /// Sphere contacts resolved during a substep, summed over iterations.
    ContactDetection {
        /// Particles pushed out of the sphere.
        contact_count: u32,
        /// Largest penetration left after pushout.
        max_penetration: f32,
    },

    /// Energy snapshot at the current state.
    Energy {
        /// Kinetic energy of free particles (0.5 * m * v^2).
        kinetic: f64,
    },

    /// Substep abandoned because a constraint degenerated.
    StepAborted {
        /// Iteration during which projection stopped.
        iteration: u32,
        /// Human-readable abort reason.
        reason: String,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given substep.
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }

    /// Whether this event reports an aborted substep.
    pub fn is_abort(&self) -> bool {
        matches!(self.kind, EventKind::StepAborted { .. })
    }
}
