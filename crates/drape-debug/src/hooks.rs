//! Inspection hooks for live debugging.
//!
//! Hooks are handed to the solver for one substep and called at fixed
//! points inside it. They observe; they never change simulation state.

use std::sync::mpsc;

use drape_telemetry::events::{EventKind, SimulationEvent};
use drape_telemetry::EventBus;

/// Trait for simulation inspection hooks.
///
/// # Lifecycle
///
/// ```text
/// for each substep:
///   hook.on_timestep_begin(...)
///   for each solver iteration:
///     hook.on_iteration(...)
///   either
///     hook.on_step_aborted(...)            (substep abandoned)
///   or
///     hook.on_contacts(...)
///     hook.on_timestep_end(...)
/// hook.on_simulation_end()
/// ```
pub trait InspectionHook: Send {
    /// Called at the beginning of each substep.
    fn on_timestep_begin(&mut self, timestep: u32, sim_time: f64) {
        let _ = (timestep, sim_time);
    }

    /// Called after each solver iteration with that iteration's residual.
    fn on_iteration(&mut self, timestep: u32, iteration: u32, residual: f64) {
        let _ = (timestep, iteration, residual);
    }

    /// Called once per completed substep with contacts summed over iterations.
    fn on_contacts(&mut self, timestep: u32, contact_count: u32, max_penetration: f32) {
        let _ = (timestep, contact_count, max_penetration);
    }

    /// Called instead of `on_timestep_end` when a substep is abandoned.
    fn on_step_aborted(&mut self, timestep: u32, iteration: u32, reason: &str) {
        let _ = (timestep, iteration, reason);
    }

    /// Called at the end of each completed substep.
    fn on_timestep_end(&mut self, timestep: u32, wall_time: f64) {
        let _ = (timestep, wall_time);
    }

    /// Called by frame loops with the kinetic energy after a frame.
    fn on_energy(&mut self, timestep: u32, kinetic: f64) {
        let _ = (timestep, kinetic);
    }

    /// Called when the simulation completes.
    fn on_simulation_end(&mut self) {}

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}

/// Hook that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHook;

impl InspectionHook for NullHook {
    fn name(&self) -> &str {
        "null_hook"
    }
}

/// Hook that turns solver calls into telemetry events.
///
/// Events are buffered until [`drain_events`](Self::drain_events) hands
/// them to an event bus, or sent straight to a bus when the hook was
/// built with [`with_sender`](Self::with_sender).
#[derive(Debug, Default)]
pub struct TelemetryHook {
    events: Vec<SimulationEvent>,
    sender: Option<mpsc::Sender<SimulationEvent>>,
    /// Skip per-iteration events.
    skip_iterations: bool,
}

impl TelemetryHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// A hook that forwards every event to `sender` instead of buffering.
    pub fn with_sender(sender: mpsc::Sender<SimulationEvent>) -> Self {
        Self {
            sender: Some(sender),
            ..Self::default()
        }
    }

    /// Drop per-iteration events, keeping substep and contact events.
    pub fn without_iterations(mut self) -> Self {
        self.skip_iterations = true;
        self
    }

    /// Drains collected events for dispatch.
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of buffered events.
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    fn push(&mut self, timestep: u32, kind: EventKind) {
        let event = SimulationEvent::new(timestep, kind);
        match &self.sender {
            // A closed bus only means nobody is listening any more.
            Some(sender) => {
                let _ = sender.send(event);
            }
            None => self.events.push(event),
        }
    }
}

impl InspectionHook for TelemetryHook {
    fn on_timestep_begin(&mut self, timestep: u32, sim_time: f64) {
        self.push(timestep, EventKind::TimestepBegin { sim_time });
    }

    fn on_iteration(&mut self, timestep: u32, iteration: u32, residual: f64) {
        if !self.skip_iterations {
            self.push(timestep, EventKind::SolverIteration { iteration, residual });
        }
    }

    fn on_contacts(&mut self, timestep: u32, contact_count: u32, max_penetration: f32) {
        self.push(
            timestep,
            EventKind::ContactDetection {
                contact_count,
                max_penetration,
            },
        );
    }

    fn on_step_aborted(&mut self, timestep: u32, iteration: u32, reason: &str) {
        self.push(
            timestep,
            EventKind::StepAborted {
                iteration,
                reason: reason.to_string(),
            },
        );
    }

    fn on_timestep_end(&mut self, timestep: u32, wall_time: f64) {
        self.push(timestep, EventKind::TimestepEnd { wall_time });
    }

    fn on_energy(&mut self, timestep: u32, kinetic: f64) {
        self.push(timestep, EventKind::Energy { kinetic });
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}

/// Telemetry hook that owns its event bus and delivers events as the run
/// progresses.
///
/// Pending events are dispatched to the bus sinks after every frame (on
/// `on_energy`, which frame loops call once per frame) and the sinks are
/// finalized on `on_simulation_end`.
pub struct BusHook {
    inner: TelemetryHook,
    bus: EventBus,
}

impl BusHook {
    pub fn new(bus: EventBus) -> Self {
        Self {
            inner: TelemetryHook::with_sender(bus.sender()),
            bus,
        }
    }

    /// Drop per-iteration events.
    pub fn without_iterations(mut self) -> Self {
        self.inner = self.inner.without_iterations();
        self
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Releases the bus, e.g. to flush it by hand.
    pub fn into_bus(self) -> EventBus {
        self.bus
    }
}

impl InspectionHook for BusHook {
    fn on_timestep_begin(&mut self, timestep: u32, sim_time: f64) {
        self.inner.on_timestep_begin(timestep, sim_time);
    }

    fn on_iteration(&mut self, timestep: u32, iteration: u32, residual: f64) {
        self.inner.on_iteration(timestep, iteration, residual);
    }

    fn on_contacts(&mut self, timestep: u32, contact_count: u32, max_penetration: f32) {
        self.inner.on_contacts(timestep, contact_count, max_penetration);
    }

    fn on_step_aborted(&mut self, timestep: u32, iteration: u32, reason: &str) {
        self.inner.on_step_aborted(timestep, iteration, reason);
    }

    fn on_timestep_end(&mut self, timestep: u32, wall_time: f64) {
        self.inner.on_timestep_end(timestep, wall_time);
    }

    fn on_energy(&mut self, timestep: u32, kinetic: f64) {
        self.inner.on_energy(timestep, kinetic);
        self.bus.flush();
    }

    fn on_simulation_end(&mut self) {
        self.bus.finish();
    }

    fn name(&self) -> &str {
        "bus_hook"
    }
}
