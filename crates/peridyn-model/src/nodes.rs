//! Per-node reference data.
//!
//! Everything here is fixed at setup: reference coordinates `r0`,
//! nodal volumes and the initial family size of each node. The current
//! coordinates `r` belong to the driver and change every timestep.

use serde::{Deserialize, Serialize};
use peridyn_math::Vec3;
use peridyn_types::{PeridynError, PeridynResult};

use crate::neighbours::NeighbourList;

/// Reference (undeformed) state of every node, in SoA layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSet {
    /// Reference coordinates `r0`.
    pub coords: Vec<Vec3>,
    /// Volume associated with each node.
    pub volume: Vec<f64>,
    /// Initial neighbour count of each node.
    pub family: Vec<u32>,
}

impl NodeSet {
    /// Creates a node set, checking that all arrays describe the same nodes.
    pub fn new(coords: Vec<Vec3>, volume: Vec<f64>, family: Vec<u32>) -> PeridynResult<Self> {
        let n = coords.len();
        check_len("volume", n, volume.len())?;
        check_len("family", n, family.len())?;
        Ok(Self {
            coords,
            volume,
            family,
        })
    }

    /// Creates a node set whose families are the live counts of `nlist`.
    ///
    /// Call this once, before any bond has been removed.
    pub fn from_connectivity(
        coords: Vec<Vec3>,
        volume: Vec<f64>,
        nlist: &NeighbourList,
    ) -> PeridynResult<Self> {
        check_len("nlist", coords.len(), nlist.node_count())?;
        Self::new(coords, volume, nlist.counts().to_vec())
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    /// Current coordinates `r = r0 + u` for displacements `u`.
    pub fn displaced(&self, displacements: &[Vec3]) -> PeridynResult<Vec<Vec3>> {
        check_len("displacements", self.node_count(), displacements.len())?;
        Ok(self
            .coords
            .iter()
            .zip(displacements)
            .map(|(&x0, &u)| x0 + u)
            .collect())
    }

    /// Total volume of the body.
    pub fn total_volume(&self) -> f64 {
        self.volume.iter().sum()
    }

    /// Validates node data.
    ///
    /// Checks:
    /// - SoA arrays have the same length
    /// - Coordinates are finite
    /// - Volumes are finite and positive
    /// - Every node starts with at least one bond
    pub fn validate(&self) -> PeridynResult<()> {
        let n = self.node_count();
        check_len("volume", n, self.volume.len())?;
        check_len("family", n, self.family.len())?;

        for (i, x) in self.coords.iter().enumerate() {
            if !x.is_finite() {
                return Err(PeridynError::InvalidModel(format!(
                    "Node {} has a non-finite reference coordinate {:?}",
                    i, x
                )));
            }
        }

        for (i, &v) in self.volume.iter().enumerate() {
            if !(v.is_finite() && v > 0.0) {
                return Err(PeridynError::InvalidModel(format!(
                    "Node {} has invalid volume {}",
                    i, v
                )));
            }
        }

        if let Some(node) = self.family.iter().position(|&f| f == 0) {
            return Err(PeridynError::EmptyFamily { node });
        }

        Ok(())
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> PeridynResult<()> {
    if expected != actual {
        return Err(PeridynError::ShapeMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}
