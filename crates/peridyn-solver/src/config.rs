//! Evaluator configuration.
//!
//! Material stiffness, dispatch backend and the policy applied to
//! inputs that break an evaluation precondition.

use serde::{Deserialize, Serialize};

use peridyn_compute::BackendKind;
use peridyn_math::constitutive::micromodulus;
use peridyn_types::constants::{DEFAULT_BOND_STIFFNESS, DEFAULT_MIN_CHUNK_LEN};
use peridyn_types::{PeridynError, PeridynResult};

/// What the evaluator does about degenerate input data.
///
/// Degenerate data is a node with `family = 0`, a live count above the
/// family or the row capacity, an invalid neighbour index, or a bond of
/// zero length in either configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreconditionPolicy {
    /// Scan the inputs before dispatch and return the first violation.
    /// Outputs are left untouched on error.
    #[default]
    Check,
    /// Skip the scan. Degenerate nodes produce NaN or infinite outputs;
    /// an out-of-range neighbour index panics on the bounds check.
    Propagate,
}

/// Configuration for an [`Evaluator`](crate::Evaluator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Bond stiffness (micromodulus) shared by every bond.
    pub bond_stiffness: f64,

    /// Dispatch backend.
    pub backend: BackendKind,

    /// Worker threads for the rayon backend. `None` = one per core.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    /// Minimum nodes per rayon task.
    pub min_chunk_len: usize,

    /// Handling of degenerate input data.
    pub preconditions: PreconditionPolicy,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            bond_stiffness: DEFAULT_BOND_STIFFNESS,
            backend: BackendKind::Rayon,
            threads: None,
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
            preconditions: PreconditionPolicy::Check,
        }
    }
}

impl EvaluatorConfig {
    /// Creates a config for debugging (serial, every input checked).
    pub fn debug() -> Self {
        Self {
            backend: BackendKind::Serial,
            preconditions: PreconditionPolicy::Check,
            ..Default::default()
        }
    }

    /// Creates a config for production runs (parallel, no input scan).
    pub fn throughput() -> Self {
        Self {
            backend: BackendKind::Rayon,
            min_chunk_len: 1024,
            preconditions: PreconditionPolicy::Propagate,
            ..Default::default()
        }
    }

    /// Creates a config whose bond stiffness is derived from a bulk
    /// modulus and horizon (see [`micromodulus`]).
    pub fn from_material(bulk_modulus: f64, horizon: f64) -> PeridynResult<Self> {
        if !(bulk_modulus.is_finite() && bulk_modulus > 0.0) {
            return Err(PeridynError::InvalidConfig(format!(
                "Bulk modulus must be positive, got {bulk_modulus}"
            )));
        }
        if !(horizon.is_finite() && horizon > 0.0) {
            return Err(PeridynError::InvalidConfig(format!(
                "Horizon must be positive, got {horizon}"
            )));
        }
        Ok(Self {
            bond_stiffness: micromodulus(bulk_modulus, horizon),
            ..Default::default()
        })
    }

    /// Sets the bond stiffness.
    pub fn with_bond_stiffness(mut self, bond_stiffness: f64) -> Self {
        self.bond_stiffness = bond_stiffness;
        self
    }

    /// Sets the backend.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the precondition policy.
    pub fn with_preconditions(mut self, policy: PreconditionPolicy) -> Self {
        self.preconditions = policy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> PeridynResult<()> {
        if !(self.bond_stiffness.is_finite() && self.bond_stiffness > 0.0) {
            return Err(PeridynError::InvalidConfig(format!(
                "Bond stiffness must be positive and finite, got {}",
                self.bond_stiffness
            )));
        }
        if self.threads == Some(0) {
            return Err(PeridynError::InvalidConfig(
                "Thread count must be >= 1".into(),
            ));
        }
        if self.min_chunk_len == 0 {
            return Err(PeridynError::InvalidConfig(
                "Minimum chunk length must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
