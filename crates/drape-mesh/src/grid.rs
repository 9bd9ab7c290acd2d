//! Grid dimensions and row-major particle indexing.
//!
//! Particle `(i, j)` (column `i`, row `j`) lives at linear index
//! `j * res_x + i`. Dimensions are immutable once validated.

use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// Particle counts and rest spacings of a rectangular cloth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Particles along X (columns).
    pub res_x: usize,
    /// Particles along Z (rows).
    pub res_y: usize,
    /// Rest distance between horizontally adjacent particles.
    pub spacing_x: f32,
    /// Rest distance between vertically adjacent particles.
    pub spacing_y: f32,
}

impl GridDimensions {
    /// Creates validated grid dimensions.
    pub fn new(res_x: usize, res_y: usize, spacing_x: f32, spacing_y: f32) -> DrapeResult<Self> {
        let dims = Self {
            res_x,
            res_y,
            spacing_x,
            spacing_y,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Checks that the grid has at least 2×2 particles and positive,
    /// finite spacings.
    pub fn validate(&self) -> DrapeResult<()> {
        if self.res_x < 2 || self.res_y < 2 {
            return Err(DrapeError::InvalidGrid(format!(
                "resolution must be at least 2x2, got {}x{}",
                self.res_x, self.res_y
            )));
        }
        if self.res_x.checked_mul(self.res_y).map_or(true, |n| n > u32::MAX as usize) {
            return Err(DrapeError::InvalidGrid(format!(
                "{}x{} particles do not fit 32-bit indices",
                self.res_x, self.res_y
            )));
        }
        for (name, s) in [("spacing_x", self.spacing_x), ("spacing_y", self.spacing_y)] {
            if !(s.is_finite() && s > 0.0) {
                return Err(DrapeError::InvalidGrid(format!(
                    "{name} must be positive and finite, got {s}"
                )));
            }
        }
        Ok(())
    }

    /// Total number of particles, `res_x * res_y`.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.res_x * self.res_y
    }

    /// Number of quads, `(res_x - 1) * (res_y - 1)`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.res_x - 1) * (self.res_y - 1)
    }

    /// Length of the render index list: two triangles per cell.
    #[inline]
    pub fn index_count(&self) -> usize {
        6 * self.cell_count()
    }

    /// Linear index of particle `(i, j)`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        j * self.res_x + i
    }

    /// Column and row of a linear index.
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.res_x, index / self.res_x)
    }

    /// Whether signed grid coordinates fall inside the grid.
    #[inline]
    pub fn contains(&self, i: isize, j: isize) -> bool {
        i >= 0 && j >= 0 && (i as usize) < self.res_x && (j as usize) < self.res_y
    }

    /// Rest length of a diagonal (shear) neighbor.
    #[inline]
    pub fn shear_length(&self) -> f32 {
        (self.spacing_x * self.spacing_x + self.spacing_y * self.spacing_y).sqrt()
    }

    /// The two corners of the last row, `(0, res_y-1)` and `(res_x-1, res_y-1)`.
    ///
    /// These are the pin targets, and they never receive external forces.
    #[inline]
    pub fn last_row_corners(&self) -> [usize; 2] {
        let row = self.res_y - 1;
        [self.index(0, row), self.index(self.res_x - 1, row)]
    }
}
