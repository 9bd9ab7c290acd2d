//! Integration tests for drape-bench.

use drape_bench::metrics::BenchmarkMetrics;
use drape_bench::runner::BenchmarkRunner;
use drape_bench::scenarios::{Scenario, ScenarioKind};
use drape_debug::hooks::{BusHook, TelemetryHook};
use drape_render::{HeadlessRenderer, Renderer};
use drape_solver::ClothConfig;
use drape_telemetry::events::EventKind;
use drape_telemetry::{EventBus, VecSink};

fn sample_metrics(name: &str) -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: name.into(),
        vertex_count: 2601,
        triangle_count: 5000,
        frames: 240,
        substeps: 2400,
        aborted_substeps: 0,
        total_wall_time: 1.5,
        avg_step_time: 0.015,
        min_step_time: 0.01,
        max_step_time: 0.02,
        final_kinetic_energy: 1e-5,
        max_displacement: 0.5,
        max_stretch: 0.01,
        avg_iterations: 10.0,
    }
}

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn hanging_cloth_is_the_demo() {
    let s = Scenario::hanging_cloth();
    assert_eq!(s.name, "hanging_cloth");
    assert_eq!(s.input.cloth, ClothConfig::default());
    assert_eq!(s.input.frames, 240);
    assert_eq!(s.input.substeps_per_frame, 10);
    assert_eq!(s.input.solver.solver_iterations, 10);
    assert!((s.input.solver.damping_rate - 0.9).abs() < 1e-6);
}

#[test]
fn sphere_drape_is_unpinned() {
    let s = Scenario::sphere_drape();
    assert_eq!(s.name, "sphere_drape");
    assert!(!s.input.cloth.has_pin_constraint);
    assert!(drape_io::validate_input(&s.input).is_ok());
}

#[test]
fn scenario_lookup() {
    assert_eq!(ScenarioKind::all().len(), 2);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
        assert_eq!(Scenario::from_kind(kind).name, kind.name());
    }
    assert_eq!(ScenarioKind::from_name("self_fold"), None);
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_hanging_cloth() {
    let scenario = Scenario::hanging_cloth().with_frames(2);
    let metrics = BenchmarkRunner::run(&scenario).unwrap();

    assert_eq!(metrics.scenario, "hanging_cloth");
    assert_eq!(metrics.frames, 2);
    assert_eq!(metrics.substeps, 20);
    assert_eq!(metrics.aborted_substeps, 0);
    assert_eq!(metrics.vertex_count, 51 * 51);
    assert_eq!(metrics.triangle_count, 50 * 50 * 2);
    assert!((metrics.avg_iterations - 10.0).abs() < 1e-6);
    assert!(metrics.max_displacement > 0.0);
    assert!(metrics.final_kinetic_energy > 0.0);
}

#[test]
fn run_with_renders_every_frame() {
    let scenario = Scenario::sphere_drape().with_frames(3);
    let mut renderer = HeadlessRenderer::new();
    let mut hook = TelemetryHook::new().without_iterations();
    let result = BenchmarkRunner::run_with(&scenario, &mut renderer, &mut hook).unwrap();

    assert_eq!(renderer.frame_count(), 3);
    assert_eq!(result.cloth.substeps(), 30);
    let events = hook.drain_events();
    let energy = events
        .iter()
        .filter(|e| matches!(e.kind, EventKind::Energy { .. }))
        .count();
    assert_eq!(energy, 3);
    let ends = events
        .iter()
        .filter(|e| matches!(e.kind, EventKind::TimestepEnd { .. }))
        .count();
    assert_eq!(ends, 30);
}

#[test]
fn bus_hook_streams_events_during_run() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let buffer = sink.buffer();
    bus.add_sink(Box::new(sink));

    let scenario = Scenario::hanging_cloth().with_frames(2);
    let mut renderer = HeadlessRenderer::new();
    let mut hook = BusHook::new(bus).without_iterations();
    BenchmarkRunner::run_with(&scenario, &mut renderer, &mut hook).unwrap();

    assert_eq!(hook.bus().sink_count(), 1);
    let events = buffer.lock().unwrap();
    // Per substep: begin, contacts, end. Per frame: energy.
    assert_eq!(events.len(), 20 * 3 + 2);
    assert!(matches!(events.last().unwrap().kind, EventKind::Energy { .. }));
}

#[test]
fn invalid_input_fails_before_running() {
    let mut scenario = Scenario::hanging_cloth();
    scenario.input.solver.dt = -1.0;
    assert!(BenchmarkRunner::run(&scenario).is_err());
}

#[test]
fn run_all_scenarios() {
    let metrics = BenchmarkRunner::run_all(1).unwrap();
    assert_eq!(metrics.len(), 2);
    for (m, kind) in metrics.iter().zip(ScenarioKind::all()) {
        assert_eq!(m.scenario, kind.name());
        assert!(m.total_wall_time >= 0.0);
    }
}

// ─── Metrics Tests ────────────────────────────────────────────

#[test]
fn metrics_csv_output() {
    let row = sample_metrics("test").to_csv_row();
    assert!(row.starts_with("test,2601,5000,240,2400,0,"));
}

#[test]
fn metrics_csv_multi() {
    let csv = BenchmarkMetrics::to_csv(&[sample_metrics("a"), sample_metrics("b")]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("scenario,"));
    assert_eq!(
        lines[0].split(',').count(),
        lines[1].split(',').count()
    );
}

#[test]
fn metrics_json_round_trip() {
    let metrics = sample_metrics("json");
    let json = serde_json::to_string(&metrics).unwrap();
    let recovered: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, metrics);
}
