//! Benchmark scenarios: a lattice body, its current configuration and a
//! stiffness for each test case.
//!
//! Three canonical scenarios:
//! 1. **Undeformed block** — `r = r0`, every bond force vanishes
//! 2. **Uniaxial stretch** — Homogeneous 1 % stretch along X
//! 3. **Damaged block** — Stretched block with a pre-cut crack, so rows
//!    are partially filled and damage is non-zero

use serde::{Deserialize, Serialize};

use peridyn_math::Vec3;
use peridyn_model::generators::lattice_block;
use peridyn_model::{NeighbourList, NodeSet};
use peridyn_types::{NodeId, PeridynResult};

/// Lattice spacing of the benchmark bodies (m).
const SPACING: f64 = 1.0e-3;

/// Horizon in lattice spacings.
const REACH: f64 = 2.0;

/// Engineering strain applied by the stretch scenarios.
const STRETCH: f64 = 0.01;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Unloaded block.
    UndeformedBlock,
    /// Block under homogeneous uniaxial stretch.
    UniaxialStretch,
    /// Stretched block with a crack through half its cross-section.
    DamagedBlock,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::UndeformedBlock,
            ScenarioKind::UniaxialStretch,
            ScenarioKind::DamagedBlock,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::UndeformedBlock => "undeformed_block",
            ScenarioKind::UniaxialStretch => "uniaxial_stretch",
            ScenarioKind::DamagedBlock => "damaged_block",
        }
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Reference state.
    pub nodes: NodeSet,
    /// Live bonds.
    pub nlist: NeighbourList,
    /// Current coordinates.
    pub r: Vec<Vec3>,
    /// Number of evaluations to time.
    pub timesteps: u32,
}

impl Scenario {
    /// Default lattice: 24 × 24 × 24 nodes, 32 bonds per interior node.
    pub const DEFAULT_DIMS: [usize; 3] = [24, 24, 24];

    /// Builds a scenario of the given kind on an `nx × ny × nz` lattice.
    pub fn new(kind: ScenarioKind, dims: [usize; 3]) -> PeridynResult<Self> {
        let [nx, ny, nz] = dims;
        let (nodes, mut nlist) = lattice_block(nx, ny, nz, SPACING, REACH)?;

        let r = match kind {
            ScenarioKind::UndeformedBlock => nodes.coords.clone(),
            ScenarioKind::UniaxialStretch | ScenarioKind::DamagedBlock => {
                nodes.displaced(&uniaxial_displacements(&nodes.coords, STRETCH))?
            }
        };

        if kind == ScenarioKind::DamagedBlock {
            let crack_x = (nx / 2) as f64 * SPACING - 0.5 * SPACING;
            let crack_depth = (ny / 2) as f64 * SPACING;
            let broken = cut_crack(&nodes, &mut nlist, crack_x, crack_depth)?;
            tracing::debug!(broken, "pre-cut crack");
        }

        Ok(Self {
            kind,
            nodes,
            nlist,
            r,
            timesteps: 20,
        })
    }

    /// Creates the undeformed block scenario.
    pub fn undeformed_block() -> PeridynResult<Self> {
        Self::new(ScenarioKind::UndeformedBlock, Self::DEFAULT_DIMS)
    }

    /// Creates the uniaxial stretch scenario.
    pub fn uniaxial_stretch() -> PeridynResult<Self> {
        Self::new(ScenarioKind::UniaxialStretch, Self::DEFAULT_DIMS)
    }

    /// Creates the damaged block scenario.
    pub fn damaged_block() -> PeridynResult<Self> {
        Self::new(ScenarioKind::DamagedBlock, Self::DEFAULT_DIMS)
    }

    /// Create a scenario by kind at the default size.
    pub fn from_kind(kind: ScenarioKind) -> PeridynResult<Self> {
        Self::new(kind, Self::DEFAULT_DIMS)
    }

    /// Sets the number of timed evaluations.
    pub fn with_timesteps(mut self, timesteps: u32) -> Self {
        self.timesteps = timesteps;
        self
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.node_count()
    }
}

/// Displacements `u = (strain · x, 0, 0)`.
fn uniaxial_displacements(coords: &[Vec3], strain: f64) -> Vec<Vec3> {
    coords
        .iter()
        .map(|x| Vec3::new(strain * x.x, 0.0, 0.0))
        .collect()
}

/// Removes every bond crossing the plane `x = crack_x` below `y = depth`.
///
/// Both directions of a crossing bond are removed. Returns the number of
/// directed bonds removed.
fn cut_crack(
    nodes: &NodeSet,
    nlist: &mut NeighbourList,
    crack_x: f64,
    depth: f64,
) -> PeridynResult<usize> {
    let x0 = &nodes.coords;
    let crosses = |a: Vec3, b: Vec3| {
        let straddles = (a.x - crack_x) * (b.x - crack_x) < 0.0;
        straddles && 0.5 * (a.y + b.y) < depth
    };

    let mut removed = 0;
    for i in 0..nlist.node_count() {
        // Walk backwards: remove_slot moves the last live entry forward.
        let mut slot = nlist.neighbours(i).len();
        while slot > 0 {
            slot -= 1;
            let j = nlist.neighbours(i)[slot] as usize;
            if crosses(x0[i], x0[j]) {
                nlist.remove_slot(NodeId(i as u32), slot)?;
                removed += 1;
            }
        }
    }
    Ok(removed)
}
