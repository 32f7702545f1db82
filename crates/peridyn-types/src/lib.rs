//! # peridyn-types
//!
//! Shared types, identifiers, error types, and numerical constants
//! for the peridyn bond-based peridynamics core.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other peridyn crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{PeridynError, PeridynResult};
pub use ids::NodeId;
