//! Per-particle simulation buffers.
//!
//! This is the primary mutable data structure during simulation.
//! The solver reads and writes these buffers each substep; nothing
//! else writes them.
//!
//! # Layout
//!
//! All arrays have length `particle_count`, indexed row-major like the grid:
//! ```text
//! positions:  [p0, p1, p2, ...]
//! predicted:  [q0, q1, q2, ...]   scratch, valid only during a substep
//! velocities: [v0, v1, v2, ...]
//! ```

use drape_math::{damping_factor, Vec3};
use drape_mesh::TriangleMesh;
use drape_types::{DrapeError, DrapeResult};

/// A copy of one particle's data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub predicted_position: Vec3,
    pub velocity: Vec3,
    /// Zero for a pinned (infinitely heavy) particle.
    pub inverse_mass: f32,
}

impl Particle {
    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.inverse_mass == 0.0
    }
}

/// Per-particle simulation buffers.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Number of particles.
    pub particle_count: usize,

    // ─── Position (current) ───
    pub positions: Vec<Vec3>,

    // ─── Predicted position (scratch for projection) ───
    pub predicted: Vec<Vec3>,

    // ─── Velocity ───
    pub velocities: Vec<Vec3>,

    // ─── Inverse mass (0 = pinned) ───
    pub inverse_mass: Vec<f32>,
}

impl SimulationState {
    /// Initialize simulation state from a mesh and per-particle mass.
    ///
    /// Copies positions from the mesh. Velocities start at zero.
    /// Pinned particles get `inverse_mass = 0.0`.
    pub fn from_mesh(
        mesh: &TriangleMesh,
        particle_mass: f32,
        pinned: &[bool],
    ) -> DrapeResult<Self> {
        let n = mesh.vertex_count();

        if pinned.len() != n {
            return Err(DrapeError::InvalidMesh(format!(
                "Pinned array length ({}) != particle count ({})",
                pinned.len(),
                n
            )));
        }
        if !(particle_mass.is_finite() && particle_mass > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "particle mass must be positive and finite, got {particle_mass}"
            )));
        }

        let w = 1.0 / particle_mass;
        let inverse_mass = pinned.iter().map(|&p| if p { 0.0 } else { w }).collect();

        Ok(Self {
            particle_count: n,
            positions: mesh.positions.clone(),
            predicted: mesh.positions.clone(),
            velocities: vec![Vec3::ZERO; n],
            inverse_mass,
        })
    }

    /// Returns a copy of particle `i`.
    #[inline]
    pub fn particle(&self, i: usize) -> Particle {
        Particle {
            position: self.positions[i],
            predicted_position: self.predicted[i],
            velocity: self.velocities[i],
            inverse_mass: self.inverse_mass[i],
        }
    }

    /// Compute predicted positions under gravity and damping.
    ///
    /// For every free particle not listed in `exempt`:
    /// `v' = (v + dt * w * g) * (1 - damping_rate)^dt`. Every particle then gets
    /// `predicted = position + dt * v'` (with `v' = v` when no force applied).
    ///
    /// Stored velocities are not modified; they are rewritten by
    /// [`reconcile`](Self::reconcile).
    pub fn predict(&mut self, dt: f32, damping_rate: f32, gravity: Vec3, exempt: &[usize]) {
        let damping = damping_factor(damping_rate, dt);
        for i in 0..self.particle_count {
            let w = self.inverse_mass[i];
            let mut v = self.velocities[i];
            if w != 0.0 && !exempt.contains(&i) {
                v += gravity * (dt * w);
                v *= damping;
            }
            self.predicted[i] = self.positions[i] + dt * v;
        }
    }

    /// Commit predicted positions: `v = (predicted - position) / dt`,
    /// then `position = predicted`.
    pub fn reconcile(&mut self, dt: f32) {
        for i in 0..self.particle_count {
            self.velocities[i] = (self.predicted[i] - self.positions[i]) / dt;
            self.positions[i] = self.predicted[i];
        }
    }

    /// Compute total kinetic energy of free particles: 0.5 * Σ m_i * ||v_i||².
    pub fn kinetic_energy(&self) -> f64 {
        let mut energy = 0.0f64;
        for i in 0..self.particle_count {
            let w = self.inverse_mass[i];
            if w > 0.0 {
                let m = 1.0 / w as f64;
                energy += 0.5 * m * self.velocities[i].length_squared() as f64;
            }
        }
        energy
    }

    /// Number of particles with zero inverse mass.
    pub fn pinned_count(&self) -> usize {
        self.inverse_mass.iter().filter(|&&w| w == 0.0).count()
    }
}
