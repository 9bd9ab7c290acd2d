//! Physical constants and simulation defaults.

/// Gravitational acceleration magnitude (m/s²). Applied along -Y.
pub const GRAVITY: f32 = 9.8;

/// Default per-particle mass (kg).
pub const DEFAULT_PARTICLE_MASS: f32 = 0.01;

/// Default frames per second of the fixed-timestep frame loop.
pub const DEFAULT_FPS: f32 = 24.0;

/// Default number of solver substeps per rendered frame.
pub const DEFAULT_SUBSTEPS: u32 = 10;

/// Default substep length (seconds): one frame split into substeps.
pub const DEFAULT_DT: f32 = 1.0 / (DEFAULT_FPS * DEFAULT_SUBSTEPS as f32);

/// Default number of constraint projection iterations per substep.
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 10;

/// Default continuous velocity damping rate, in `[0, 1)`.
pub const DEFAULT_DAMPING_RATE: f32 = 0.9;

/// Epsilon shared by the degenerate-geometry and sphere-contact tests.
pub const EPSILON: f32 = 1.0e-6;
