//! Continuous velocity damping.

/// Per-substep velocity multiplier for a damping rate expressed per second.
///
/// Returns `(1 - rate)^dt`, so that applying it over any split of one
/// second multiplies velocity by `1 - rate` in total.
#[inline]
pub fn damping_factor(rate: f32, dt: f32) -> f32 {
    (1.0 - rate).powf(dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_is_identity() {
        assert_eq!(damping_factor(0.0, 0.25), 1.0);
    }

    #[test]
    fn substeps_compose_to_one_second() {
        let per_step = damping_factor(0.9, 0.1);
        let total = per_step.powi(10);
        assert!((total - 0.1).abs() < 1e-5);
    }
}
