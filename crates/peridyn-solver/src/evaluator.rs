//! Evaluator façade: the entry point a simulation driver calls each step.
//!
//! ```text
//! let evaluator = Evaluator::new(config)?;
//! loop {
//!     // driver: integrate r, apply boundary conditions, break bonds
//!     evaluator.evaluate_step(inputs, &mut damage, &mut force)?;
//! }
//! ```
//!
//! The evaluator holds no per-step state: every call is a pure function
//! of its arguments, so repeated calls on unchanged inputs give
//! bit-identical outputs.

use std::time::Instant;

use peridyn_compute::{create_backend, ComputeBackend};
use peridyn_math::Vec3;
use peridyn_model::NeighbourView;
use peridyn_types::PeridynResult;

use crate::bond_force::dispatch_bond_force;
use crate::config::{EvaluatorConfig, PreconditionPolicy};
use crate::damage::dispatch_damage;
use crate::preconditions::{
    check_bond_force_preconditions, check_bond_force_shapes, check_damage_preconditions,
    check_damage_shapes,
};

/// The two evaluation kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Bond-count damage.
    Damage,
    /// Internal bond force.
    BondForce,
}

impl Kernel {
    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Damage => "damage",
            Kernel::BondForce => "bond_force",
        }
    }
}

/// Timing of one kernel dispatch.
#[derive(Debug, Clone)]
pub struct KernelReport {
    /// Which kernel ran.
    pub kernel: Kernel,
    /// Nodes evaluated.
    pub node_count: usize,
    /// Wall-clock time including precondition checks (seconds).
    pub wall_time: f64,
}

/// Timing of a combined damage + force evaluation.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Nodes evaluated.
    pub node_count: usize,
    /// Live directed bonds visited by the force kernel.
    pub bond_count: usize,
    /// Wall-clock time for checks and both kernels (seconds).
    pub wall_time: f64,
}

/// Read-only inputs of one combined evaluation.
///
/// Live neighbour counts (`n_neigh`) are taken from `nlist`.
#[derive(Debug, Clone, Copy)]
pub struct StepInputs<'a> {
    /// Current coordinates.
    pub r: &'a [Vec3],
    /// Reference coordinates.
    pub r0: &'a [Vec3],
    /// Live bonds.
    pub nlist: NeighbourView<'a>,
    /// Nodal volumes.
    pub volume: &'a [f64],
    /// Initial neighbour counts.
    pub family: &'a [u32],
}

/// Damage and bond-force evaluator.
///
/// Owns the compute backend for its lifetime; the node and bond arrays
/// stay with the caller and are only borrowed per call.
pub struct Evaluator {
    config: EvaluatorConfig,
    backend: Box<dyn ComputeBackend>,
}

impl Evaluator {
    /// Validates `config` and builds the backend it names.
    pub fn new(config: EvaluatorConfig) -> PeridynResult<Self> {
        config.validate()?;
        let backend = create_backend(config.backend, config.threads, config.min_chunk_len)?;
        Ok(Self { config, backend })
    }

    /// Uses a caller-supplied backend; `config.backend` and
    /// `config.threads` are ignored.
    pub fn with_backend(
        config: EvaluatorConfig,
        backend: Box<dyn ComputeBackend>,
    ) -> PeridynResult<Self> {
        config.validate()?;
        Ok(Self { config, backend })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Returns the compute backend.
    pub fn backend(&self) -> &dyn ComputeBackend {
        self.backend.as_ref()
    }

    fn checks_enabled(&self) -> bool {
        self.config.preconditions == PreconditionPolicy::Check
    }

    /// Computes `damage[i] = (family[i] - n_neigh[i]) / family[i]`.
    pub fn evaluate_damage(
        &self,
        n_neigh: &[u32],
        family: &[u32],
        damage: &mut [f64],
    ) -> PeridynResult<KernelReport> {
        let start = Instant::now();

        check_damage_shapes(n_neigh, family, damage)?;
        if self.checks_enabled() {
            check_damage_preconditions(n_neigh, family).inspect_err(|e| {
                tracing::warn!(kernel = "damage", error = %e, "precondition violated");
            })?;
        }

        dispatch_damage(self.backend.as_ref(), n_neigh, family, damage);

        let report = KernelReport {
            kernel: Kernel::Damage,
            node_count: damage.len(),
            wall_time: start.elapsed().as_secs_f64(),
        };
        self.trace(&report);
        Ok(report)
    }

    /// Computes the net bond force `force[i]` on every node with the
    /// configured bond stiffness.
    pub fn evaluate_bond_force(
        &self,
        r: &[Vec3],
        r0: &[Vec3],
        nlist: &NeighbourView<'_>,
        volume: &[f64],
        force: &mut [Vec3],
    ) -> PeridynResult<KernelReport> {
        let start = Instant::now();

        check_bond_force_shapes(r, r0, nlist, volume, force)?;
        if self.checks_enabled() {
            check_bond_force_preconditions(r, r0, nlist).inspect_err(|e| {
                tracing::warn!(kernel = "bond_force", error = %e, "precondition violated");
            })?;
        }

        dispatch_bond_force(
            self.backend.as_ref(),
            r,
            r0,
            nlist,
            volume,
            self.config.bond_stiffness,
            force,
        );

        let report = KernelReport {
            kernel: Kernel::BondForce,
            node_count: force.len(),
            wall_time: start.elapsed().as_secs_f64(),
        };
        self.trace(&report);
        Ok(report)
    }

    /// Evaluates damage and bond force together.
    ///
    /// All checks run first; if they pass, the two kernels are dispatched
    /// through [`ComputeBackend::join`] and may run concurrently.
    pub fn evaluate_step(
        &self,
        inputs: StepInputs<'_>,
        damage: &mut [f64],
        force: &mut [Vec3],
    ) -> PeridynResult<StepReport> {
        let start = Instant::now();
        let StepInputs {
            r,
            r0,
            nlist,
            volume,
            family,
        } = inputs;
        let n_neigh = nlist.counts();

        check_bond_force_shapes(r, r0, &nlist, volume, force)?;
        check_damage_shapes(n_neigh, family, damage)?;

        if self.checks_enabled() {
            check_damage_preconditions(n_neigh, family)
                .and_then(|_| check_bond_force_preconditions(r, r0, &nlist))
                .inspect_err(|e| {
                    tracing::warn!(kernel = "step", error = %e, "precondition violated");
                })?;
        }

        let backend = self.backend.as_ref();
        let bond_stiffness = self.config.bond_stiffness;
        backend.join(
            &mut || dispatch_bond_force(backend, r, r0, &nlist, volume, bond_stiffness, force),
            &mut || dispatch_damage(backend, n_neigh, family, damage),
        );

        let report = StepReport {
            node_count: nlist.node_count(),
            bond_count: nlist.bond_count(),
            wall_time: start.elapsed().as_secs_f64(),
        };
        tracing::debug!(
            backend = backend.name(),
            nodes = report.node_count,
            bonds = report.bond_count,
            wall_time_ms = report.wall_time * 1e3,
            "step evaluated"
        );
        Ok(report)
    }

    fn trace(&self, report: &KernelReport) {
        tracing::debug!(
            kernel = report.kernel.name(),
            backend = self.backend.name(),
            nodes = report.node_count,
            wall_time_ms = report.wall_time * 1e3,
            "kernel dispatched"
        );
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("config", &self.config)
            .field("backend", &self.backend.name())
            .finish()
    }
}
