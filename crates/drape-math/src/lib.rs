//! # drape-math
//!
//! Math primitives for the Drape simulation workspace.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, etc.)
//! - Helpers for turning particle buffers into flat arrays
//! - The continuous damping factor used by the integrator

pub mod buffers;
pub mod damping;

// Re-export glam types as the canonical math types for Drape.
pub use glam::Vec3;

pub use buffers::{deinterleave, interleave, max_displacement};
pub use damping::damping_factor;
