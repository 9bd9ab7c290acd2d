//! # drape-mesh
//!
//! Rectangular cloth topology: the particle grid and the triangle
//! index list handed to the renderer.
//!
//! ## Key Types
//!
//! - [`GridDimensions`] — Particle counts and rest spacings along each axis.
//! - [`TriangleMesh`] — Rest positions plus the flat triangle index list.
//! - [`Topology`] — Unique edges and vertex-to-triangle adjacency.
//! - [`generators::cloth_grid`] — Builds the mesh for a grid.

pub mod generators;
pub mod grid;
pub mod mesh;
pub mod topology;

pub use grid::GridDimensions;
pub use mesh::TriangleMesh;
pub use topology::Topology;
