//! Integration tests for drape-math.

use drape_math::buffers::deinterleave;
use drape_math::{damping_factor, interleave, max_displacement, Vec3};

#[test]
fn interleave_round_trip_preserves_points() {
    let pts = vec![
        Vec3::new(-10.0, 10.0, -20.0),
        Vec3::new(-9.55, 10.0, -20.0),
        Vec3::new(-10.0, 10.0, -19.4),
    ];
    assert_eq!(deinterleave(&interleave(&pts)), pts);
}

#[test]
fn displacement_of_identical_buffers_is_zero() {
    let pts = vec![Vec3::ONE; 4];
    assert_eq!(max_displacement(&pts, &pts), 0.0);
}

#[test]
fn damping_is_monotonic_in_rate() {
    let dt = 1.0 / 240.0;
    assert!(damping_factor(0.5, dt) > damping_factor(0.9, dt));
    assert!(damping_factor(0.9, dt) < 1.0);
}
