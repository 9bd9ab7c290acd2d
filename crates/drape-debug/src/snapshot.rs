//! State snapshot serialization for inspection.
//!
//! Snapshots capture particle positions and velocities at one point in
//! time, encoded with `bincode`.

use drape_math::{deinterleave, interleave, Vec3};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// Particle state at one substep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Substep index when this snapshot was taken.
    pub timestep: u32,
    /// Simulation time in seconds.
    pub sim_time: f64,
    /// Positions (flat: [x0, y0, z0, x1, y1, z1, ...]).
    pub positions: Vec<f32>,
    /// Velocities (flat: [vx0, vy0, vz0, ...]).
    pub velocities: Vec<f32>,
    /// Number of particles.
    pub vertex_count: usize,
}

impl StateSnapshot {
    /// Captures positions and velocities.
    ///
    /// # Panics
    /// If the two buffers have different lengths.
    pub fn from_state(timestep: u32, sim_time: f64, positions: &[Vec3], velocities: &[Vec3]) -> Self {
        assert_eq!(positions.len(), velocities.len());
        Self {
            timestep,
            sim_time,
            positions: interleave(positions),
            velocities: interleave(velocities),
            vertex_count: positions.len(),
        }
    }

    /// Position of particle `i`.
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    /// Positions as vectors.
    pub fn position_vectors(&self) -> Vec<Vec3> {
        deinterleave(&self.positions)
    }

    /// Velocities as vectors.
    pub fn velocity_vectors(&self) -> Vec<Vec3> {
        deinterleave(&self.velocities)
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> DrapeResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| DrapeError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format, checking buffer lengths.
    pub fn from_bytes(data: &[u8]) -> DrapeResult<Self> {
        let snap: Self = bincode::deserialize(data)
            .map_err(|e| DrapeError::Serialization(format!("snapshot decode failed: {e}")))?;
        let expected = snap.vertex_count * 3;
        if snap.positions.len() != expected || snap.velocities.len() != expected {
            return Err(DrapeError::Serialization(format!(
                "snapshot buffers do not match vertex count {}",
                snap.vertex_count
            )));
        }
        Ok(snap)
    }
}
