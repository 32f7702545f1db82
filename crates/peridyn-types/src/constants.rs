//! Numerical constants and evaluation defaults.

/// Default bond stiffness (micromodulus), in N/m⁶.
///
/// `18 K / (π δ⁴)` for a bulk modulus of 2.5 GPa and a 5 mm horizon.
/// Drivers are expected to override it.
pub const DEFAULT_BOND_STIFFNESS: f64 = 2.2918e19;

/// Default minimum number of nodes handed to one rayon task.
pub const DEFAULT_MIN_CHUNK_LEN: usize = 256;

/// Sentinel stored in neighbour-list slots beyond a node's live count.
pub const UNUSED_SLOT: u32 = u32::MAX;
