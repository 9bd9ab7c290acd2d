//! # drape-solver
//!
//! Position-based dynamics for a rectangular cloth: constraint
//! construction, per-substep integration, and the cloth aggregate.
//!
//! ## Key Types
//!
//! - [`Cloth`] — Owns particles, constraints, and the render index list
//! - [`SimulationState`] — Per-particle buffers (positions, velocities, masses)
//! - [`ConstraintSet`] — Distance constraints and pin targets
//! - [`ClothConfig`] / [`SolverConfig`] — Construction and per-substep parameters
//! - [`StepOutcome`] — `Completed` or `Aborted` result of one substep

pub mod cloth;
pub mod config;
pub mod constraints;
pub mod pbd;
pub mod state;
pub mod step;

pub use cloth::Cloth;
pub use config::{ClothConfig, SolverConfig};
pub use constraints::{ConstraintSet, DistanceConstraint, DistanceConstraints, NeighborKind, PinConstraint};
pub use state::{Particle, SimulationState};
pub use step::{AbortReason, StepOutcome, StepParams, StepStats};
