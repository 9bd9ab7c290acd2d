//! The cloth aggregate.
//!
//! `Cloth` owns everything that persists between substeps: particle state,
//! the constraint set, and the triangle index list. The caller drives it by
//! calling [`Cloth::advance`] once per substep with a sphere collider.

use std::time::Instant;

use drape_contact::{ContactResult, SphereCollider};
use drape_debug::hooks::{InspectionHook, NullHook};
use drape_math::Vec3;
use drape_mesh::{generators, GridDimensions, TriangleMesh};
use drape_types::DrapeResult;

use crate::config::ClothConfig;
use crate::constraints::ConstraintSet;
use crate::pbd;
use crate::state::{Particle, SimulationState};
use crate::step::{StepOutcome, StepParams, StepStats};

/// A rectangular PBD cloth.
pub struct Cloth {
    dims: GridDimensions,
    stiffness: f32,
    /// Rest positions and render index list. Indices never change.
    rest_mesh: TriangleMesh,
    state: SimulationState,
    constraints: ConstraintSet,
    /// Particles that never receive gravity or damping.
    force_exempt: [usize; 2],
    /// Substeps attempted so far, including aborted ones.
    substeps: u32,
    /// Simulated time accumulated by completed substeps (seconds).
    sim_time: f64,
}

impl Cloth {
    /// Builds a cloth from its configuration.
    ///
    /// The configuration is validated before any topology is built. Particles
    /// start at rest on the grid, translated by the world offset.
    pub fn new(config: &ClothConfig) -> DrapeResult<Self> {
        config.validate()?;
        let dims = config.dimensions()?;

        let rest_mesh = generators::cloth_grid(&dims, config.offset());
        assert_eq!(rest_mesh.vertex_count(), dims.particle_count());
        assert_eq!(rest_mesh.indices.len(), dims.index_count());

        let constraints =
            ConstraintSet::build(&dims, &rest_mesh.positions, config.has_pin_constraint);
        let pinned = constraints.pinned_mask(dims.particle_count());
        let state = SimulationState::from_mesh(&rest_mesh, config.particle_mass, &pinned)?;

        tracing::debug!(
            particles = state.particle_count,
            constraints = constraints.distance.len(),
            pins = constraints.pins.len(),
            triangles = rest_mesh.triangle_count(),
            "cloth constructed"
        );

        Ok(Self {
            force_exempt: dims.last_row_corners(),
            dims,
            stiffness: config.stiffness,
            rest_mesh,
            state,
            constraints,
            substeps: 0,
            sim_time: 0.0,
        })
    }

    /// Advances the cloth by one substep.
    pub fn advance(&mut self, params: &StepParams, sphere: &SphereCollider) -> StepOutcome {
        self.advance_observed(params, sphere, &mut NullHook)
    }

    /// Advances the cloth by one substep, reporting progress to `hook`.
    ///
    /// Runs prediction, `params.iterations` rounds of distance projection,
    /// pin enforcement and sphere pushout, then reconciliation. If a
    /// distance constraint degenerates the call stops at once and returns
    /// [`StepOutcome::Aborted`]; positions and velocities are then exactly
    /// what they were before the call.
    pub fn advance_observed(
        &mut self,
        params: &StepParams,
        sphere: &SphereCollider,
        hook: &mut dyn InspectionHook,
    ) -> StepOutcome {
        debug_assert!(params.dt > 0.0, "dt must be positive, got {}", params.dt);

        let timestep = self.substeps;
        self.substeps = self.substeps.wrapping_add(1);
        let start = Instant::now();
        hook.on_timestep_begin(timestep, self.sim_time);

        // ─── Predict ───
        self.state.predict(
            params.dt,
            params.damping_rate,
            params.gravity,
            &self.force_exempt,
        );

        // ─── Project ───
        let mut final_residual = 0.0f32;
        let mut contacts = ContactResult::default();
        for iteration in 0..params.iterations {
            final_residual = match pbd::project_distance(
                &mut self.state,
                &self.constraints.distance,
                self.stiffness,
                iteration,
            ) {
                Ok(residual) => residual,
                Err(reason) => {
                    tracing::warn!(
                        timestep,
                        constraint = reason.constraint().index(),
                        iteration = reason.iteration(),
                        %reason,
                        "substep aborted"
                    );
                    hook.on_step_aborted(timestep, iteration, &reason.to_string());
                    return StepOutcome::Aborted(reason);
                }
            };

            if params.pin_enabled {
                pbd::enforce_pins(&mut self.state, &self.constraints.pins);
            }

            let pass = sphere.resolve(&mut self.state.predicted, &self.state.inverse_mass);
            contacts.merge(&pass);

            tracing::trace!(
                timestep,
                iteration,
                residual = final_residual,
                contacts = pass.resolved_count,
                "solver iteration"
            );
            hook.on_iteration(timestep, iteration, final_residual as f64);
        }

        // ─── Reconcile ───
        self.state.reconcile(params.dt);
        self.sim_time += params.dt as f64;

        hook.on_contacts(
            timestep,
            contacts.resolved_count,
            contacts.max_residual_penetration,
        );

        let wall_time = start.elapsed().as_secs_f64();
        hook.on_timestep_end(timestep, wall_time);

        StepOutcome::Completed(StepStats {
            iterations: params.iterations,
            final_residual,
            contacts,
            wall_time,
        })
    }

    /// Current particle positions, row-major.
    pub fn positions(&self) -> &[Vec3] {
        &self.state.positions
    }

    /// Triangle index list, fixed at construction.
    pub fn indices(&self) -> &[u32] {
        &self.rest_mesh.indices
    }

    /// Copy of particle `i`.
    pub fn particle(&self, i: usize) -> Particle {
        self.state.particle(i)
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable access to particle buffers, for scripted setups and tests.
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn dims(&self) -> &GridDimensions {
        &self.dims
    }

    /// Rest-state mesh (initial positions and index list).
    pub fn rest_mesh(&self) -> &TriangleMesh {
        &self.rest_mesh
    }

    pub fn particle_count(&self) -> usize {
        self.state.particle_count
    }

    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    /// Substeps attempted so far.
    pub fn substeps(&self) -> u32 {
        self.substeps
    }

    /// Simulated time of completed substeps (seconds).
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Largest `|dist - rest_length|` over all distance constraints at the
    /// committed positions.
    pub fn max_constraint_error(&self) -> f32 {
        self.constraints
            .distance
            .iter()
            .map(|(_, c)| {
                let dist = (self.state.positions[c.a] - self.state.positions[c.b]).length();
                (dist - c.rest_length).abs()
            })
            .fold(0.0, f32::max)
    }

    /// Largest relative stretch `dist / rest_length - 1` at committed positions.
    pub fn max_stretch(&self) -> f32 {
        self.constraints
            .distance
            .iter()
            .map(|(_, c)| {
                let dist = (self.state.positions[c.a] - self.state.positions[c.b]).length();
                dist / c.rest_length - 1.0
            })
            .fold(0.0, f32::max)
    }
}
