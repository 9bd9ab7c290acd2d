//! CLI command implementations.

use drape_bench::metrics::BenchmarkMetrics;
use drape_bench::runner::BenchmarkRunner;
use drape_bench::scenarios::{Scenario, ScenarioKind};
use drape_debug::hooks::{BusHook, InspectionHook, NullHook};
use drape_debug::snapshot::StateSnapshot;
use drape_io::{validate_input, SimulationInput};
use drape_mesh::TriangleMesh;
use drape_render::{HeadlessRenderer, JsonFrameExporter, Renderer};
use drape_telemetry::{EventBus, TracingSink};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Options of `drape simulate`.
pub struct SimulateArgs<'a> {
    pub config: Option<&'a str>,
    pub frames: Option<u32>,
    pub output: Option<&'a str>,
    pub snapshot: Option<&'a str>,
    pub telemetry: bool,
}

/// Run a simulation from a config file, or the demo.
pub fn simulate(args: SimulateArgs<'_>) -> CmdResult {
    println!("Drape Simulation");
    println!("────────────────");

    let mut scenario = match args.config {
        Some(path) => {
            println!("Config:     {path}");
            Scenario::custom(path, SimulationInput::load(path)?)
        }
        None => {
            println!("Config:     built-in hanging_cloth demo");
            Scenario::hanging_cloth()
        }
    };
    if let Some(frames) = args.frames {
        scenario = scenario.with_frames(frames);
    }

    let input = &scenario.input;
    println!(
        "Cloth:      {}×{} particles, spacing {}×{}",
        input.cloth.res_x, input.cloth.res_y, input.cloth.spacing_x, input.cloth.spacing_y
    );
    println!(
        "Frames:     {} × {} substeps (dt = {:.5}s)",
        input.frames, input.substeps_per_frame, input.solver.dt
    );
    println!();

    let mut renderer: Box<dyn Renderer> = match args.output {
        Some(path) => Box::new(JsonFrameExporter::new(path)),
        None => Box::new(HeadlessRenderer::new()),
    };

    let mut hook: Box<dyn InspectionHook> = if args.telemetry {
        let mut bus = EventBus::new();
        bus.add_sink(Box::new(TracingSink::new()));
        Box::new(BusHook::new(bus))
    } else {
        Box::new(NullHook)
    };

    let result = BenchmarkRunner::run_with(&scenario, renderer.as_mut(), hook.as_mut())?;

    let m = &result.metrics;
    println!("  Wall time:     {:.3}s", m.total_wall_time);
    println!("  Avg step:      {:.3}ms", m.avg_step_time * 1000.0);
    println!("  Aborted:       {} / {}", m.aborted_substeps, m.substeps);
    println!("  Final KE:      {:.6e}", m.final_kinetic_energy);
    println!("  Max displace:  {:.4}", m.max_displacement);
    println!("  Max stretch:   {:.4}", m.max_stretch);

    if let Some(path) = args.output {
        println!("Frames written to: {path}");
    }

    if let Some(path) = args.snapshot {
        let cloth = &result.cloth;
        let snap = StateSnapshot::from_state(
            cloth.substeps(),
            cloth.sim_time(),
            cloth.positions(),
            &cloth.state().velocities,
        );
        std::fs::write(path, snap.to_bytes()?)?;
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Run benchmark scenarios.
pub fn benchmark(scenario_name: &str, frames: Option<u32>, output_path: Option<&str>) -> CmdResult {
    println!("Drape Benchmark Suite");
    println!("═════════════════════");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                return Err(format!(
                    "Unknown scenario: '{scenario_name}'. Available: {}, all",
                    available.join(", ")
                )
                .into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for kind in kinds {
        let mut scenario = Scenario::from_kind(kind);
        if let Some(frames) = frames {
            scenario = scenario.with_frames(frames);
        }

        println!(
            "Running: {} ({}×{} particles, {} frames)",
            scenario.name, scenario.input.cloth.res_x, scenario.input.cloth.res_y, scenario.input.frames,
        );

        let metrics = BenchmarkRunner::run(&scenario)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> CmdResult {
    println!("Drape Snapshot Inspector");
    println!("────────────────────────");
    println!();

    let data = std::fs::read(path)?;
    let snapshot = StateSnapshot::from_bytes(&data)?;

    println!("Substep:      {}", snapshot.timestep);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("Particles:    {}", snapshot.vertex_count);

    let positions = snapshot.position_vectors();
    if !positions.is_empty() {
        let (min_y, max_y) = positions
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        println!("Y range:      [{min_y:.4}, {max_y:.4}]");

        let max_speed = snapshot
            .velocity_vectors()
            .iter()
            .map(|v| v.length())
            .fold(0.0f32, f32::max);
        println!("Max speed:    {max_speed:.4}");
    }

    Ok(())
}

/// Validate a simulation input, mesh, or snapshot.
pub fn validate(path: &str) -> CmdResult {
    println!("Drape Validator");
    println!("───────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating simulation input: {path}");
        let input = SimulationInput::load(path)?;
        match validate_input(&input) {
            Ok(()) => println!(
                "✅ Input is valid ({} frames, {} substeps total).",
                input.frames,
                input.total_substeps()
            ),
            Err(e) => {
                println!("❌ Input validation failed: {e}");
                return Err(e.into());
            }
        }
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let content = std::fs::read_to_string(path)?;
        let mesh: TriangleMesh = serde_json::from_str(&content)?;
        match mesh.validate() {
            Ok(()) => println!(
                "✅ Mesh is valid ({} verts, {} tris).",
                mesh.vertex_count(),
                mesh.triangle_count()
            ),
            Err(e) => {
                println!("❌ Mesh validation failed: {e}");
                return Err(e.into());
            }
        }
    } else {
        println!("Validating snapshot: {path}");
        let data = std::fs::read(path)?;
        match StateSnapshot::from_bytes(&data) {
            Ok(snap) => println!("✅ Snapshot is valid ({} particles).", snap.vertex_count),
            Err(e) => {
                println!("❌ Snapshot validation failed: {e}");
                return Err(e.into());
            }
        }
    }

    Ok(())
}
