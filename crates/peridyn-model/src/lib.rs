//! # peridyn-model
//!
//! Node and bond data for bond-based peridynamics, stored as
//! Structure-of-Arrays so every per-node kernel reads contiguous buffers.
//!
//! ## Key Types
//!
//! - [`NodeSet`] — Reference coordinates, volumes and initial family sizes.
//! - [`NeighbourList`] — Owned dense `(n, max_neighbours)` bond table.
//! - [`NeighbourView`] — Borrowed accessor over driver-owned bond buffers.
//! - Procedural lattice generators for benchmarks and testing.

pub mod generators;
pub mod neighbours;
pub mod nodes;

pub use neighbours::{NeighbourList, NeighbourView};
pub use nodes::NodeSet;
