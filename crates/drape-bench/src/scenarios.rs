//! Benchmark scenarios.
//!
//! 1. **Hanging cloth** — the demo setup: a 51×51 cloth pinned at the two
//!    corners of its last row, swinging down over a radius-5 sphere.
//! 2. **Sphere drape** — an unpinned cloth dropped onto the same sphere.

use drape_io::{SimulationInput, SphereSpec};
use drape_solver::{ClothConfig, SolverConfig};
use serde::{Deserialize, Serialize};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Cloth pinned at two corners, hanging under gravity.
    HangingCloth,
    /// Unpinned cloth falling onto a sphere.
    SphereDrape,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[ScenarioKind::HangingCloth, ScenarioKind::SphereDrape]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingCloth => "hanging_cloth",
            ScenarioKind::SphereDrape => "sphere_drape",
        }
    }

    /// Looks a scenario up by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A named simulation run.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub input: SimulationInput,
}

impl Scenario {
    /// The demo: 240 frames at 24 FPS, 10 substeps each.
    pub fn hanging_cloth() -> Self {
        Self {
            name: ScenarioKind::HangingCloth.name().to_string(),
            input: SimulationInput::default(),
        }
    }

    /// A 31×31 cloth with 0.4 spacing, centered over the sphere and
    /// released from rest 2 units above its top.
    pub fn sphere_drape() -> Self {
        let cloth = ClothConfig {
            res_x: 31,
            res_y: 31,
            spacing_x: 0.4,
            spacing_y: 0.4,
            has_pin_constraint: false,
            world_offset: [-6.0, 7.0, -6.0],
            ..ClothConfig::default()
        };
        let solver = SolverConfig {
            has_pin_constraint: false,
            ..SolverConfig::default()
        };
        Self {
            name: ScenarioKind::SphereDrape.name().to_string(),
            input: SimulationInput {
                frames: 120,
                cloth,
                solver,
                sphere: SphereSpec::default(),
                ..SimulationInput::default()
            },
        }
    }

    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingCloth => Self::hanging_cloth(),
            ScenarioKind::SphereDrape => Self::sphere_drape(),
        }
    }

    /// A scenario from a user-supplied input.
    pub fn custom(name: impl Into<String>, input: SimulationInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    /// Shortens or lengthens the run.
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.input.frames = frames;
        self
    }
}
