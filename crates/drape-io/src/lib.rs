//! # drape-io
//!
//! Simulation input contract and validation.
//!
//! Defines the boundary types the CLI and benchmark scenarios use to
//! describe a run: cloth construction, solver parameters, the sphere
//! obstacle, and the frame loop.

pub mod contract;
pub mod validator;

pub use contract::{SimulationInput, SphereSpec};
pub use validator::validate_input;
