//! Contact response bookkeeping.

use serde::{Deserialize, Serialize};

/// Result of one collision pass over the particles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactResult {
    /// Number of particles that were at or inside the collider.
    pub resolved_count: u32,
    /// Maximum penetration depth remaining after the correction.
    pub max_residual_penetration: f32,
    /// Sum of correction lengths applied.
    pub total_correction: f32,
}

impl ContactResult {
    /// Folds another pass into this one (counts add, maxima combine).
    pub fn merge(&mut self, other: &ContactResult) {
        self.resolved_count += other.resolved_count;
        self.max_residual_penetration = self
            .max_residual_penetration
            .max(other.max_residual_penetration);
        self.total_correction += other.total_correction;
    }
}
