//! Cloth grid generation.
//!
//! Lays out `res_x * res_y` particles in row-major order on the XZ plane
//! and emits two triangles per grid cell for rendering.

use drape_math::Vec3;

use crate::grid::GridDimensions;
use crate::mesh::TriangleMesh;

/// Generates the rest-state cloth mesh for `dims`, translated by `offset`.
///
/// Particle `(i, j)` sits at `offset + (i * spacing_x, 0, j * spacing_y)`.
///
/// # Example
/// ```
/// use drape_mesh::generators::cloth_grid;
/// use drape_mesh::GridDimensions;
/// use drape_math::Vec3;
///
/// let dims = GridDimensions::new(3, 3, 1.0, 1.0).unwrap();
/// let mesh = cloth_grid(&dims, Vec3::ZERO);
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn cloth_grid(dims: &GridDimensions, offset: Vec3) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(dims.particle_count(), dims.cell_count() * 2);
    mesh.positions = grid_positions(dims, offset);
    mesh.indices = grid_indices(dims);
    mesh
}

/// Rest positions of every particle, row-major.
pub fn grid_positions(dims: &GridDimensions, offset: Vec3) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(dims.particle_count());
    for j in 0..dims.res_y {
        for i in 0..dims.res_x {
            positions.push(
                offset + Vec3::new(i as f32 * dims.spacing_x, 0.0, j as f32 * dims.spacing_y),
            );
        }
    }
    positions
}

/// Triangle index list, six indices per cell.
///
/// For cell `(i, j)` the emission order is
///
/// ```text
///   (i,j) ─────── (i+1,j)
///     │ ╲            │        t0 = (i,j), (i,j+1), (i+1,j+1)
///     │    ╲         │        t1 = (i+1,j), (i,j), (i+1,j+1)
///     │       ╲      │
///   (i,j+1) ──── (i+1,j+1)
/// ```
///
/// # Panics
/// If the emitted count differs from `6 * (res_x - 1) * (res_y - 1)`.
pub fn grid_indices(dims: &GridDimensions) -> Vec<u32> {
    let res_x = dims.res_x;
    let mut indices = Vec::with_capacity(dims.index_count());

    for j in 0..dims.res_y - 1 {
        for i in 0..res_x - 1 {
            let top_left = (j * res_x + i) as u32;
            let bot_left = ((j + 1) * res_x + i) as u32;
            let bot_right = bot_left + 1;
            let top_right = top_left + 1;

            #[rustfmt::skip]
            let cell = [
                top_left, bot_left, bot_right,
                top_right, top_left, bot_right,
            ];
            indices.extend_from_slice(&cell);
        }
    }

    assert_eq!(
        indices.len(),
        dims.index_count(),
        "index list length does not match {}x{} grid",
        dims.res_x,
        dims.res_y
    );
    indices
}
