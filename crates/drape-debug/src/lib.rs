//! # drape-debug
//!
//! Inspection hooks called from inside the solver loop, and binary
//! snapshots of particle state for offline inspection.

pub mod hooks;
pub mod snapshot;

pub use hooks::{BusHook, InspectionHook, NullHook, TelemetryHook};
pub use snapshot::StateSnapshot;
