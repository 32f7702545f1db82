//! # peridyn-solver
//!
//! Per-timestep evaluation kernels for bond-based peridynamics.
//!
//! ## Key Types
//!
//! - [`Evaluator`] — Owns a backend and configuration; checks
//!   preconditions and dispatches both kernels
//! - [`EvaluatorConfig`] — Bond stiffness, backend and precondition policy
//! - [`damage::node_damage`] / [`bond_force::node_bond_force`] — The
//!   per-node pure functions the backends iterate over
//! - [`DamageSummary`] / [`ForceSummary`] — Reductions of the outputs
//!   for monitoring

pub mod bond_force;
pub mod config;
pub mod damage;
pub mod evaluator;
pub mod preconditions;
pub mod summary;

pub use config::{EvaluatorConfig, PreconditionPolicy};
pub use evaluator::{Evaluator, Kernel, KernelReport, StepInputs, StepReport};
pub use summary::{DamageSummary, ForceSummary};
