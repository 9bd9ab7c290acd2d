//! Distance and pin constraint construction.
//!
//! Every particle looks at its 8-neighborhood; a neighbor contributes a
//! distance constraint only when it is inside the grid and has a larger
//! linear index than the particle itself, so each undirected edge is
//! recorded exactly once, as `(i, j)` with `i < j`.

use drape_math::Vec3;
use drape_mesh::GridDimensions;
use drape_types::ConstraintId;

/// How a neighbor offset is classified for its rest length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborKind {
    /// Diagonal neighbor, rest length `sqrt(sx² + sy²)`.
    Shear,
    /// Rest length `spacing_x`.
    Horizontal,
    /// Rest length `spacing_y`.
    Vertical,
}

impl NeighborKind {
    /// Classifies a neighbor offset `(dx, dy)`.
    ///
    /// Non-diagonal offsets are split by `dx > dy`. That only matches the
    /// geometric axis for offsets that survive the `neighbor > origin`
    /// filter, i.e. `(1, 0)` and `(0, 1)`.
    pub fn classify(dx: isize, dy: isize) -> Self {
        if dx == dy || dx == -dy {
            NeighborKind::Shear
        } else if dx > dy {
            NeighborKind::Horizontal
        } else {
            NeighborKind::Vertical
        }
    }

    /// Rest length for this kind of neighbor.
    pub fn rest_length(self, dims: &GridDimensions) -> f32 {
        match self {
            NeighborKind::Shear => dims.shear_length(),
            NeighborKind::Horizontal => dims.spacing_x,
            NeighborKind::Vertical => dims.spacing_y,
        }
    }
}

/// A single distance constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceConstraint {
    /// Smaller particle index.
    pub a: usize,
    /// Larger particle index.
    pub b: usize,
    pub rest_length: f32,
}

/// Distance constraints stored as parallel pair / rest-length arrays,
/// in construction order.
#[derive(Debug, Clone, Default)]
pub struct DistanceConstraints {
    pub pairs: Vec<[usize; 2]>,
    pub rest_lengths: Vec<f32>,
}

impl DistanceConstraints {
    /// Builds all distance constraints of a grid.
    ///
    /// # Panics
    /// If the pair and rest-length arrays end up with different lengths.
    pub fn build(dims: &GridDimensions) -> Self {
        let mut pairs = Vec::new();
        let mut rest_lengths = Vec::new();

        for j in 0..dims.res_y {
            for i in 0..dims.res_x {
                let origin = dims.index(i, j);
                for dx in -1isize..=1 {
                    for dy in -1isize..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let ni = i as isize + dx;
                        let nj = j as isize + dy;
                        if !dims.contains(ni, nj) {
                            continue;
                        }
                        let neighbor = dims.index(ni as usize, nj as usize);
                        if neighbor > origin {
                            pairs.push([origin, neighbor]);
                            rest_lengths.push(NeighborKind::classify(dx, dy).rest_length(dims));
                        }
                    }
                }
            }
        }

        assert_eq!(
            pairs.len(),
            rest_lengths.len(),
            "distance constraint pairs and rest lengths diverged"
        );
        Self { pairs, rest_lengths }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Constraint `k`.
    #[inline]
    pub fn get(&self, k: usize) -> DistanceConstraint {
        let [a, b] = self.pairs[k];
        DistanceConstraint {
            a,
            b,
            rest_length: self.rest_lengths[k],
        }
    }

    /// Iterates constraints in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintId, DistanceConstraint)> + '_ {
        (0..self.len()).map(|k| (ConstraintId(k as u32), self.get(k)))
    }
}

/// Holds a particle at a fixed world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinConstraint {
    pub particle: usize,
    pub position: Vec3,
}

/// All constraints of a cloth.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    pub distance: DistanceConstraints,
    pub pins: Vec<PinConstraint>,
}

impl ConstraintSet {
    /// Builds distance constraints and, if `has_pin_constraint`, pins for the
    /// two corners of the last row at their rest positions.
    pub fn build(dims: &GridDimensions, rest_positions: &[Vec3], has_pin_constraint: bool) -> Self {
        assert_eq!(
            rest_positions.len(),
            dims.particle_count(),
            "rest positions do not cover the grid"
        );

        let pins = if has_pin_constraint {
            dims.last_row_corners()
                .iter()
                .map(|&particle| PinConstraint {
                    particle,
                    position: rest_positions[particle],
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            distance: DistanceConstraints::build(dims),
            pins,
        }
    }

    /// Per-particle pin mask, `true` for pinned particles.
    pub fn pinned_mask(&self, particle_count: usize) -> Vec<bool> {
        let mut mask = vec![false; particle_count];
        for pin in &self.pins {
            mask[pin.particle] = true;
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_construction_order() {
        let dims = GridDimensions::new(2, 2, 1.0, 1.0).unwrap();
        let c = DistanceConstraints::build(&dims);
        assert_eq!(c.pairs, vec![[0, 2], [0, 1], [0, 3], [1, 2], [1, 3], [2, 3]]);

        let diag = 2.0f32.sqrt();
        let expected = [1.0, 1.0, diag, diag, 1.0, 1.0];
        for (got, want) in c.rest_lengths.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn classify_full_neighborhood() {
        assert_eq!(NeighborKind::classify(1, 1), NeighborKind::Shear);
        assert_eq!(NeighborKind::classify(-1, 1), NeighborKind::Shear);
        assert_eq!(NeighborKind::classify(1, 0), NeighborKind::Horizontal);
        assert_eq!(NeighborKind::classify(0, 1), NeighborKind::Vertical);
        // Unreachable offsets: the comparison does not match their axis.
        assert_eq!(NeighborKind::classify(0, -1), NeighborKind::Horizontal);
        assert_eq!(NeighborKind::classify(-1, 0), NeighborKind::Vertical);
    }
}
