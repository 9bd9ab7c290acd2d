//! Fixed-timestep frame loop.
//!
//! Each frame runs `substeps_per_frame` solver substeps with the solver's
//! fixed `dt`, then hands the positions to the renderer once.

use std::time::Instant;

use drape_debug::hooks::{InspectionHook, NullHook};
use drape_math::max_displacement;
use drape_render::{HeadlessRenderer, RenderFrame, Renderer};
use drape_solver::{Cloth, StepOutcome};
use drape_types::DrapeResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// The cloth after a run, with its metrics.
pub struct RunResult {
    pub cloth: Cloth,
    pub metrics: BenchmarkMetrics,
}

/// Runs scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Runs a scenario headless, without inspection.
    pub fn run(scenario: &Scenario) -> DrapeResult<BenchmarkMetrics> {
        let mut renderer = HeadlessRenderer::new();
        Self::run_with(scenario, &mut renderer, &mut NullHook).map(|r| r.metrics)
    }

    /// Runs a scenario, presenting every frame to `renderer` and every
    /// substep to `hook`.
    ///
    /// Aborted substeps are counted and skipped; the loop carries on with
    /// the next substep from the unchanged state.
    pub fn run_with(
        scenario: &Scenario,
        renderer: &mut dyn Renderer,
        hook: &mut dyn InspectionHook,
    ) -> DrapeResult<RunResult> {
        let input = &scenario.input;
        drape_io::validate_input(input)?;

        let mut cloth = Cloth::new(&input.cloth)?;
        let params = input.solver.step_params();
        renderer.init(cloth.rest_mesh())?;

        tracing::info!(
            scenario = %scenario.name,
            particles = cloth.particle_count(),
            frames = input.frames,
            substeps_per_frame = input.substeps_per_frame,
            renderer = renderer.name(),
            "run started"
        );

        let mut step_times = Vec::with_capacity(input.total_substeps() as usize);
        let mut total_iterations: u64 = 0;
        let mut aborted: u32 = 0;
        let total_start = Instant::now();

        for frame in 1..=input.frames {
            for _ in 0..input.substeps_per_frame {
                let sphere = input.sphere.collider_at(cloth.sim_time());
                match cloth.advance_observed(&params, &sphere, hook) {
                    StepOutcome::Completed(stats) => {
                        step_times.push(stats.wall_time);
                        total_iterations += stats.iterations as u64;
                    }
                    StepOutcome::Aborted(_) => aborted += 1,
                }
            }

            hook.on_energy(cloth.substeps(), cloth.state().kinetic_energy());
            renderer.submit_frame(&RenderFrame::from_positions(
                frame,
                cloth.sim_time(),
                cloth.positions(),
            ))?;
        }

        renderer.finalize()?;
        hook.on_simulation_end();

        let total_wall_time = total_start.elapsed().as_secs_f64();
        if aborted > 0 {
            tracing::warn!(scenario = %scenario.name, aborted, "run had aborted substeps");
        }

        let completed = step_times.len();
        let avg_step_time = if completed == 0 {
            0.0
        } else {
            step_times.iter().sum::<f64>() / completed as f64
        };
        let min_step_time = step_times.iter().copied().fold(f64::INFINITY, f64::min);
        let max_step_time = step_times.iter().copied().fold(0.0, f64::max);
        let avg_iterations = if completed == 0 {
            0.0
        } else {
            total_iterations as f32 / completed as f32
        };

        let metrics = BenchmarkMetrics {
            scenario: scenario.name.clone(),
            vertex_count: cloth.particle_count(),
            triangle_count: cloth.rest_mesh().triangle_count(),
            frames: input.frames,
            substeps: cloth.substeps(),
            aborted_substeps: aborted,
            total_wall_time,
            avg_step_time,
            min_step_time: if completed == 0 { 0.0 } else { min_step_time },
            max_step_time,
            final_kinetic_energy: cloth.state().kinetic_energy(),
            max_displacement: max_displacement(cloth.positions(), &cloth.rest_mesh().positions),
            max_stretch: cloth.max_stretch(),
            avg_iterations,
        };

        Ok(RunResult { cloth, metrics })
    }

    /// Run every preset scenario with `frames` frames each.
    pub fn run_all(frames: u32) -> DrapeResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind).with_frames(frames)))
            .collect()
    }
}
