//! Integration tests for drape-debug.

use drape_debug::hooks::{BusHook, InspectionHook, NullHook, TelemetryHook};
use drape_debug::snapshot::StateSnapshot;
use drape_math::Vec3;
use drape_telemetry::events::EventKind;
use drape_telemetry::{EventBus, VecSink};

// ─── Hook Tests ───────────────────────────────────────────────

#[test]
fn telemetry_hook_collects_events() {
    let mut hook = TelemetryHook::new();
    hook.on_timestep_begin(0, 0.0);
    hook.on_iteration(0, 0, 1e-2);
    hook.on_iteration(0, 1, 1e-5);
    hook.on_contacts(0, 3, 0.0);
    hook.on_timestep_end(0, 0.001);

    let events = hook.drain_events();
    assert_eq!(events.len(), 5);
    assert!(events.iter().all(|e| e.timestep == 0));
    assert!(matches!(events[3].kind, EventKind::ContactDetection { contact_count: 3, .. }));
}

#[test]
fn hook_drain_clears() {
    let mut hook = TelemetryHook::new();
    hook.on_timestep_begin(0, 0.0);
    assert_eq!(hook.pending(), 1);
    let _ = hook.drain_events();
    assert!(hook.drain_events().is_empty());
}

#[test]
fn abort_becomes_event() {
    let mut hook = TelemetryHook::new();
    hook.on_step_aborted(4, 2, "coincident endpoints");
    let events = hook.drain_events();
    assert_eq!(events.len(), 1);
    assert!(events[0].is_abort());
    match &events[0].kind {
        EventKind::StepAborted { iteration, reason } => {
            assert_eq!(*iteration, 2);
            assert_eq!(reason, "coincident endpoints");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn iteration_events_can_be_skipped() {
    let mut hook = TelemetryHook::new().without_iterations();
    hook.on_timestep_begin(1, 0.1);
    hook.on_iteration(1, 0, 0.5);
    hook.on_timestep_end(1, 0.0);
    assert_eq!(hook.pending(), 2);
}

#[test]
fn sender_hook_forwards_to_bus() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let buffer = sink.buffer();
    bus.add_sink(Box::new(sink));

    let mut hook = TelemetryHook::with_sender(bus.sender());
    hook.on_timestep_begin(0, 0.0);
    hook.on_energy(0, 2.5);
    assert_eq!(hook.pending(), 0);

    assert_eq!(bus.flush(), 2);
    let events = buffer.lock().unwrap();
    assert!(matches!(events[1].kind, EventKind::Energy { kinetic } if kinetic == 2.5));
}

#[test]
fn bus_hook_delivers_once_per_frame() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let buffer = sink.buffer();
    bus.add_sink(Box::new(sink));

    let mut hook = BusHook::new(bus).without_iterations();
    hook.on_timestep_begin(0, 0.0);
    hook.on_iteration(0, 0, 0.1);
    hook.on_timestep_end(0, 0.001);
    assert!(buffer.lock().unwrap().is_empty());

    hook.on_energy(1, 0.5);
    assert_eq!(buffer.lock().unwrap().len(), 3);

    hook.on_timestep_begin(1, 0.1);
    hook.on_simulation_end();
    assert_eq!(buffer.lock().unwrap().len(), 4);
    assert_eq!(hook.name(), "bus_hook");
}

#[test]
fn hook_names() {
    assert_eq!(TelemetryHook::new().name(), "telemetry_hook");
    assert_eq!(NullHook.name(), "null_hook");
}

// ─── Snapshot Tests ───────────────────────────────────────────

#[test]
fn snapshot_round_trip() {
    let positions = vec![Vec3::new(1.0, 4.0, 7.0), Vec3::new(2.0, 5.0, 8.0), Vec3::new(3.0, 6.0, 9.0)];
    let velocities = vec![Vec3::new(0.1, 0.4, 0.7); 3];

    let snap = StateSnapshot::from_state(42, 0.7, &positions, &velocities);
    let bytes = snap.to_bytes().unwrap();
    let recovered = StateSnapshot::from_bytes(&bytes).unwrap();

    assert_eq!(recovered.timestep, 42);
    assert_eq!(recovered.vertex_count, 3);
    assert!((recovered.sim_time - 0.7).abs() < 1e-10);
    assert_eq!(recovered.position_vectors(), positions);
    assert_eq!(recovered.velocity_vectors(), velocities);
}

#[test]
fn snapshot_interleaving() {
    let snap = StateSnapshot::from_state(
        0,
        0.0,
        &[Vec3::new(1.0, 3.0, 5.0), Vec3::new(2.0, 4.0, 6.0)],
        &[Vec3::ZERO; 2],
    );
    assert_eq!(snap.positions, vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
    assert_eq!(snap.position(1), Vec3::new(2.0, 4.0, 6.0));
}

#[test]
fn garbage_bytes_rejected() {
    assert!(StateSnapshot::from_bytes(&[1, 2, 3]).is_err());
}

#[test]
fn inconsistent_snapshot_rejected() {
    let mut snap = StateSnapshot::from_state(0, 0.0, &[Vec3::ZERO; 2], &[Vec3::ZERO; 2]);
    snap.vertex_count = 5;
    let bytes = snap.to_bytes().unwrap();
    assert!(StateSnapshot::from_bytes(&bytes).is_err());
}
