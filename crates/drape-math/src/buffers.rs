//! Conversions between `Vec3` buffers and flat `f32` arrays.

use glam::Vec3;

/// Flattens positions into `[x0, y0, z0, x1, y1, z1, ...]`.
///
/// This is the layout vertex buffers and the JSON exporter expect.
pub fn interleave(points: &[Vec3]) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 3);
    for p in points {
        out.extend_from_slice(&p.to_array());
    }
    out
}

/// Inverse of [`interleave`]. Trailing values that do not form a full
/// triple are ignored.
pub fn deinterleave(flat: &[f32]) -> Vec<Vec3> {
    flat.chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect()
}

/// Largest distance between corresponding points of two buffers.
///
/// Only the common prefix is compared.
pub fn max_displacement(a: &[Vec3], b: &[Vec3]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(p, q)| p.distance(*q))
        .fold(0.0f32, f32::max)
}
