//! # drape-telemetry
//!
//! Event bus for simulation telemetry. The solver side emits structured
//! events (substep timing, iteration residuals, contacts, energy, aborted
//! substeps) that are consumed by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
