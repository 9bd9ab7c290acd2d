//! Integration tests for drape-telemetry.

use drape_telemetry::bus::EventBus;
use drape_telemetry::events::{EventKind, SimulationEvent};
use drape_telemetry::sinks::{EventSink, TracingSink, VecSink};

// ─── Bus ──────────────────────────────────────────────────────

#[test]
fn emit_and_flush_reaches_sink() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let buffer = sink.buffer();
    bus.add_sink(Box::new(sink));

    bus.emit(SimulationEvent::new(0, EventKind::TimestepBegin { sim_time: 0.0 }));
    bus.emit(SimulationEvent::new(0, EventKind::TimestepEnd { wall_time: 0.001 }));

    assert_eq!(bus.flush(), 2);
    let events = buffer.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0].kind, EventKind::TimestepBegin { .. }));
    assert!(matches!(events[1].kind, EventKind::TimestepEnd { .. }));
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let buffer = sink.buffer();
    bus.add_sink(Box::new(sink));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(SimulationEvent::new(0, EventKind::TimestepBegin { sim_time: 0.0 }));
    assert_eq!(bus.flush(), 0);
    assert!(buffer.lock().unwrap().is_empty());
}

#[test]
fn every_sink_sees_every_event() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    let (buf_a, buf_b) = (a.buffer(), b.buffer());
    bus.add_sink(Box::new(a));
    bus.add_sink(Box::new(b));
    assert_eq!(bus.sink_count(), 2);

    bus.emit_all((0..3).map(|t| SimulationEvent::new(t, EventKind::Energy { kinetic: 1.0 })));
    bus.finish();

    assert_eq!(buf_a.lock().unwrap().len(), 3);
    assert_eq!(buf_b.lock().unwrap().len(), 3);
}

#[test]
fn sender_from_another_thread() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let buffer = sink.buffer();
    bus.add_sink(Box::new(sink));

    let tx = bus.sender();
    std::thread::spawn(move || {
        tx.send(SimulationEvent::new(7, EventKind::Energy { kinetic: 0.5 })).unwrap();
    })
    .join()
    .unwrap();

    bus.flush();
    assert_eq!(buffer.lock().unwrap()[0].timestep, 7);
}

// ─── Events ───────────────────────────────────────────────────

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::SolverIteration {
            iteration: 3,
            residual: 1e-4,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn abort_event_is_flagged() {
    let event = SimulationEvent::new(
        2,
        EventKind::StepAborted {
            iteration: 0,
            reason: "degenerate separation".into(),
        },
    );
    assert!(event.is_abort());
    assert!(!SimulationEvent::new(2, EventKind::TimestepEnd { wall_time: 0.0 }).is_abort());

    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("StepAborted"));
}

// ─── Sinks ────────────────────────────────────────────────────

#[test]
fn sink_names() {
    assert_eq!(VecSink::new().name(), "vec_sink");
    assert_eq!(TracingSink::new().name(), "tracing_sink");
}

#[test]
fn tracing_sink_handles_all_kinds_without_subscriber() {
    let mut sink = TracingSink::new();
    sink.handle(&SimulationEvent::new(0, EventKind::ContactDetection {
        contact_count: 4,
        max_penetration: 0.0,
    }));
    sink.handle(&SimulationEvent::new(0, EventKind::StepAborted {
        iteration: 1,
        reason: "x".into(),
    }));
    sink.handle(&SimulationEvent::new(0, EventKind::Custom {
        label: "note".into(),
        payload: "{}".into(),
    }));
    sink.finalize();
}
