//! # peridyn-telemetry
//!
//! Event bus for evaluation telemetry. Drivers emit structured events
//! (kernel timings, damage and force summaries, precondition failures)
//! that pluggable sinks consume.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::{EventBus, EventEmitter};
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
