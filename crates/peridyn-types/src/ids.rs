//! Strongly-typed node identifier.
//!
//! The hot path indexes raw `u32` neighbour entries directly; `NodeId`
//! is used at the setup and reporting boundaries where a bare integer
//! could be mistaken for a slot number or a count.

use serde::{Deserialize, Serialize};

/// Index into the per-node arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node {}", self.0)
    }
}
