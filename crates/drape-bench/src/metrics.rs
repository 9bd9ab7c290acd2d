//! Metrics collected during a scenario run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    pub scenario: String,
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Rendered frames.
    pub frames: u32,
    /// Substeps attempted.
    pub substeps: u32,
    /// Substeps abandoned on degenerate constraints.
    pub aborted_substeps: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per completed substep (seconds).
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    /// Kinetic energy of free particles after the last frame.
    pub final_kinetic_energy: f64,
    /// Largest particle displacement from the rest position.
    pub max_displacement: f32,
    /// Largest relative constraint stretch after the last frame.
    pub max_stretch: f32,
    /// Average projection iterations per completed substep.
    pub avg_iterations: f32,
}

impl BenchmarkMetrics {
    pub fn to_csv_header() -> String {
        "scenario,vertex_count,triangle_count,frames,substeps,aborted,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,final_ke,max_displacement,max_stretch,avg_iterations".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6},{:.6},{:.1}",
            self.scenario,
            self.vertex_count,
            self.triangle_count,
            self.frames,
            self.substeps,
            self.aborted_substeps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.max_stretch,
            self.avg_iterations,
        )
    }

    /// Header plus one row per entry.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
