//! Integration tests for drape-types.

use drape_types::constants;
use drape_types::{ConstraintId, DrapeError, ParticleId};

// ─── Id Tests ─────────────────────────────────────────────────

#[test]
fn particle_id_index() {
    let id = ParticleId(42);
    assert_eq!(id.index(), 42);
    assert_eq!(ParticleId::from(7u32), ParticleId(7));
}

#[test]
fn ids_display() {
    assert_eq!(ParticleId(3).to_string(), "p3");
    assert_eq!(ConstraintId(12).to_string(), "c12");
}

#[test]
fn particle_id_ordering() {
    assert!(ParticleId(1) < ParticleId(2));
}

#[test]
fn id_serialization() {
    let json = serde_json::to_string(&ParticleId(9)).unwrap();
    let recovered: ParticleId = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, ParticleId(9));
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = DrapeError::InvalidGrid("res_x must be >= 2".into());
    assert_eq!(err.to_string(), "Invalid grid: res_x must be >= 2");
}

#[test]
fn io_error_converts() {
    fn read() -> drape_types::DrapeResult<String> {
        Ok(std::fs::read_to_string("/definitely/not/a/real/path.toml")?)
    }
    assert!(matches!(read(), Err(DrapeError::Io(_))));
}

// ─── Constant Tests ───────────────────────────────────────────

#[test]
fn default_substep_matches_frame_loop() {
    let frame = 1.0 / constants::DEFAULT_FPS;
    let total = constants::DEFAULT_DT * constants::DEFAULT_SUBSTEPS as f32;
    assert!((frame - total).abs() < 1e-7);
}

#[test]
fn damping_rate_in_range() {
    assert!((0.0..1.0).contains(&constants::DEFAULT_DAMPING_RATE));
}
