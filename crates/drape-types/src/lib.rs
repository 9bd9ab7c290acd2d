//! # drape-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Drape cloth simulation workspace.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other Drape crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{DrapeError, DrapeResult};
pub use ids::{ConstraintId, ParticleId};
