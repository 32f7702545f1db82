//! # peridyn-math
//!
//! Numerical primitives shared by the peridyn evaluators.
//!
//! Provides:
//! - Re-export of `glam::DVec3` as the canonical 3D vector type
//! - Bond geometry (bond vector, bond length)
//! - Linear bond constitutive law (strain, force scaling, micromodulus)

pub mod constitutive;
pub mod geometry;

// Double precision is the working precision of the core.
pub use glam::DVec3 as Vec3;
