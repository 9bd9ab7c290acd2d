//! Core triangle mesh type.
//!
//! Positions are stored as `drape_math::Vec3`; triangle indices are a flat
//! `[t0v0, t0v1, t0v2, t1v0, ...]` list ready for an element buffer.

use drape_math::Vec3;
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// A triangle mesh: vertex positions and a flat index list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions in world space.
    pub positions: Vec<Vec3>,

    /// Triangle indices, three consecutive entries per triangle.
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        self.positions[i]
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Index count is a multiple of 3
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> DrapeResult<()> {
        let n = self.vertex_count();

        if self.indices.len() % 3 != 0 {
            return Err(DrapeError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(DrapeError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(DrapeError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        if self.positions.iter().any(|p| !p.is_finite()) {
            return Err(DrapeError::InvalidMesh(
                "Mesh contains non-finite positions".into(),
            ));
        }

        Ok(())
    }
}
