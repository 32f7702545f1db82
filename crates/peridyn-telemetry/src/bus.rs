//! Event bus with pluggable sinks.
//!
//! Events travel through a `std::sync::mpsc` channel, so any thread
//! holding an [`EventEmitter`] can report. Delivery to sinks happens on
//! [`EventBus::flush`], on the thread that owns the bus.

use std::sync::mpsc;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Cloneable producer handle for an [`EventBus`].
#[derive(Debug, Clone)]
pub struct EventEmitter {
    sender: mpsc::Sender<SimulationEvent>,
}

impl EventEmitter {
    /// Queues an event. Dropped silently once the bus is gone.
    pub fn emit(&self, event: SimulationEvent) {
        let _ = self.sender.send(event);
    }
}

/// Event bus for evaluation telemetry.
pub struct EventBus {
    sender: mpsc::Sender<SimulationEvent>,
    receiver: mpsc::Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus drops events at `emit`.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns a producer handle that can be moved to other threads.
    ///
    /// Handles ignore [`EventBus::set_enabled`]; events they send are
    /// delivered on the next flush.
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            sender: self.sender.clone(),
        }
    }

    /// Emit an event. No-op while the bus is disabled.
    pub fn emit(&self, event: SimulationEvent) {
        if !self.enabled {
            return;
        }
        let _ = self.sender.send(event);
    }

    /// Delivers every queued event to every sink, in emission order.
    ///
    /// Returns the number of events delivered.
    pub fn flush(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            delivered += 1;
        }
        delivered
    }

    /// Flushes pending events, then lets every sink finish.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sinks: Vec<&str> = self.sinks.iter().map(|s| s.name()).collect();
        f.debug_struct("EventBus")
            .field("sinks", &sinks)
            .field("enabled", &self.enabled)
            .finish()
    }
}
