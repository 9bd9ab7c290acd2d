//! Mesh topology queries.
//!
//! Builds unique edges and vertex-to-triangle adjacency from the
//! triangle index list.

use std::collections::HashSet;

use crate::mesh::TriangleMesh;

/// Precomputed topology information for a triangle mesh.
#[derive(Debug, Clone)]
pub struct Topology {
    /// For each vertex, the list of triangles that contain it.
    pub vertex_triangles: Vec<Vec<u32>>,

    /// Unique edges as `[v_min, v_max]` pairs, in first-seen order.
    pub edges: Vec<[u32; 2]>,
}

impl Topology {
    /// Build topology from a triangle mesh.
    pub fn build(mesh: &TriangleMesh) -> Self {
        let mut vertex_triangles: Vec<Vec<u32>> = vec![Vec::new(); mesh.vertex_count()];
        let mut seen: HashSet<(u32, u32)> = HashSet::new();
        let mut edges = Vec::new();

        for t in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle(t);
            for v in [a, b, c] {
                vertex_triangles[v as usize].push(t as u32);
            }
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                if seen.insert(key) {
                    edges.push([key.0, key.1]);
                }
            }
        }

        Self {
            vertex_triangles,
            edges,
        }
    }

    /// Number of unique edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertices that belong to no triangle.
    pub fn isolated_vertices(&self) -> Vec<u32> {
        self.vertex_triangles
            .iter()
            .enumerate()
            .filter(|(_, tris)| tris.is_empty())
            .map(|(v, _)| v as u32)
            .collect()
    }
}
