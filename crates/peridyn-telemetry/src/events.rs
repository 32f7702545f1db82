//! Simulation event types.
//!
//! Events are plain values carrying just enough data to monitor a run.
//! Fields are primitives; this crate does not depend on the evaluator
//! types that produce them.

use serde::{Deserialize, Serialize};

/// An event emitted while driving the evaluators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Timestep number (0-indexed).
    pub timestep: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Combined evaluation started.
    StepBegin {
        /// Nodes in the body.
        node_count: usize,
        /// Live directed bonds.
        bond_count: usize,
    },

    /// Combined evaluation completed.
    StepEnd {
        /// Wall-clock time for checks and both kernels (seconds).
        wall_time: f64,
    },

    /// One kernel ran over every node.
    KernelDispatched {
        /// Kernel name ("damage", "bond_force").
        kernel: String,
        /// Backend name ("serial", "rayon").
        backend: String,
        /// Nodes evaluated.
        node_count: usize,
        /// Wall-clock time (seconds).
        wall_time: f64,
    },

    /// Damage field after evaluation.
    Damage {
        /// Largest finite damage.
        max_damage: f64,
        /// Mean finite damage.
        mean_damage: f64,
        /// Nodes with no live bond left.
        fully_damaged: usize,
        /// NaN or infinite entries.
        non_finite: usize,
    },

    /// Force field after evaluation.
    Force {
        /// Largest finite force magnitude.
        max_magnitude: f64,
        /// Sum of finite nodal forces.
        net_force: [f64; 3],
        /// Entries with a NaN or infinite component.
        non_finite: usize,
    },

    /// Input data was rejected before dispatch.
    PreconditionFailure {
        /// Error message.
        message: String,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given timestep.
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}

impl EventKind {
    /// Short name of the variant, used as a log field.
    pub fn label(&self) -> &str {
        match self {
            EventKind::StepBegin { .. } => "step_begin",
            EventKind::StepEnd { .. } => "step_end",
            EventKind::KernelDispatched { .. } => "kernel_dispatched",
            EventKind::Damage { .. } => "damage",
            EventKind::Force { .. } => "force",
            EventKind::PreconditionFailure { .. } => "precondition_failure",
            EventKind::Custom { label, .. } => label,
        }
    }

    /// Returns true for events that signal bad input or bad output.
    pub fn is_anomaly(&self) -> bool {
        match self {
            EventKind::PreconditionFailure { .. } => true,
            EventKind::Damage { non_finite, .. } | EventKind::Force { non_finite, .. } => {
                *non_finite > 0
            }
            _ => false,
        }
    }
}
