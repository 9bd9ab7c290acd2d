//! Analytical sphere collision.
//!
//! A particle whose distance to the center is within `EPSILON` of the
//! radius (or less) is pushed out along the raw center-to-particle vector
//! scaled by the penetration depth:
//!
//! ```text
//! p += (p - c) * (r - |p - c|)
//! ```
//!
//! The vector is not normalized, so the correction length is
//! `|p - c| * depth` rather than `depth`. One pass lands exactly on or
//! outside the surface only when `|p - c| >= 1`; closer particles move
//! outward but may remain inside until a later solver iteration.

use drape_math::Vec3;
use drape_types::constants::EPSILON;
use serde::{Deserialize, Serialize};

use crate::response::ContactResult;

/// Analytical sphere collider supplied by the caller each substep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereCollider {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl SphereCollider {
    /// Creates a new sphere collider.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Signed distance from `point` to the sphere surface (negative inside).
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.center).length() - self.radius
    }

    /// Whether `point` triggers a contact response.
    #[inline]
    pub fn in_contact(&self, point: Vec3) -> bool {
        self.signed_distance(point) < EPSILON
    }

    /// Corrected position for a single point.
    #[inline]
    pub fn push_out(&self, point: Vec3) -> Vec3 {
        let to_particle = point - self.center;
        let dist = to_particle.length();
        point + to_particle * (self.radius - dist)
    }

    /// Resolve contacts on predicted positions.
    ///
    /// Particles with zero inverse mass are left untouched.
    pub fn resolve(&self, predicted: &mut [Vec3], inverse_mass: &[f32]) -> ContactResult {
        debug_assert_eq!(predicted.len(), inverse_mass.len());

        let mut result = ContactResult::default();

        for (p, &w) in predicted.iter_mut().zip(inverse_mass) {
            if w == 0.0 || !self.in_contact(*p) {
                continue;
            }

            let corrected = self.push_out(*p);
            result.total_correction += (corrected - *p).length();
            *p = corrected;

            result.resolved_count += 1;
            let residual = (-self.signed_distance(corrected)).max(0.0);
            result.max_residual_penetration = result.max_residual_penetration.max(residual);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_point_untouched() {
        let s = SphereCollider::new(Vec3::ZERO, 1.0);
        let mut pts = [Vec3::new(0.0, 3.0, 0.0)];
        let r = s.resolve(&mut pts, &[1.0]);
        assert_eq!(r.resolved_count, 0);
        assert_eq!(pts[0], Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn pushout_scales_raw_vector() {
        // dist = 2, radius = 5: p += (0,2,0) * 3 → (0,8,0)
        let s = SphereCollider::new(Vec3::ZERO, 5.0);
        let p = s.push_out(Vec3::new(0.0, 2.0, 0.0));
        assert!((p - Vec3::new(0.0, 8.0, 0.0)).length() < 1e-5);
    }
}
