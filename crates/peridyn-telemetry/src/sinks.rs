//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::SimulationEvent;

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called once when the run ends.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory for tests and post-run inspection.
///
/// The buffer is shared, so a handle obtained with [`VecSink::events`]
/// still reads the events after the sink has been boxed into a bus.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the collected events.
    pub fn events(&self) -> Arc<Mutex<Vec<SimulationEvent>>> {
        Arc::clone(&self.events)
    }

    /// Copies out the events collected so far.
    pub fn snapshot(&self) -> Vec<SimulationEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Forwards events to `tracing`.
///
/// Anomalies (precondition failures, non-finite outputs) are logged at
/// `WARN`; everything else at the configured level.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }

    /// Level used for ordinary events.
    pub fn level(&self) -> tracing::Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(tracing::Level::INFO)
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        let label = event.kind.label();
        if event.kind.is_anomaly() {
            tracing::warn!(timestep = event.timestep, label, event = ?event.kind, "simulation_event");
            return;
        }
        let level = self.level;
        if level == tracing::Level::ERROR {
            tracing::error!(timestep = event.timestep, label, event = ?event.kind, "simulation_event");
        } else if level == tracing::Level::WARN {
            tracing::warn!(timestep = event.timestep, label, event = ?event.kind, "simulation_event");
        } else if level == tracing::Level::DEBUG {
            tracing::debug!(timestep = event.timestep, label, event = ?event.kind, "simulation_event");
        } else if level == tracing::Level::TRACE {
            tracing::trace!(timestep = event.timestep, label, event = ?event.kind, "simulation_event");
        } else {
            tracing::info!(timestep = event.timestep, label, event = ?event.kind, "simulation_event");
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
