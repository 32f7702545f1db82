//! # peridyn-compute
//!
//! Compute dispatch layer for the peridyn evaluators.
//!
//! A kernel is a pure function of the node index; a [`ComputeBackend`]
//! owns the iteration and writes one output slot per node:
//! - [`SerialBackend`] — In-order reference loop (always available)
//! - [`RayonBackend`] — Work-stealing thread pool via rayon
//!
//! Both backends run the same per-node arithmetic, so their outputs
//! are bit-identical.

pub mod backend;

pub use backend::{create_backend, BackendKind, ComputeBackend, RayonBackend, SerialBackend};
