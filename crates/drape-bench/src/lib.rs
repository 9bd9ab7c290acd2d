//! # drape-bench
//!
//! Procedural scenarios, the fixed-timestep frame loop that drives them,
//! and metric collection with CSV export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::{BenchmarkRunner, RunResult};
pub use scenarios::{Scenario, ScenarioKind};
