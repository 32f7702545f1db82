//! Bond-count damage.
//!
//! A node that started with `family` bonds and now has `n_neigh` live
//! ones has lost the fraction `(family - n_neigh) / family` of them.

use peridyn_compute::ComputeBackend;
use peridyn_types::PeridynResult;

use crate::preconditions::check_damage_shapes;

/// Damage of a single node.
///
/// Returns exactly `0.0` when no bond has been lost and `1.0` when all
/// have. `family = 0` yields NaN.
#[inline]
pub fn node_damage(n_neigh: u32, family: u32) -> f64 {
    let family = family as f64;
    (family - n_neigh as f64) / family
}

/// Writes `damage[i]` for every node.
///
/// Only array lengths are checked; see
/// [`check_damage_preconditions`](crate::preconditions::check_damage_preconditions)
/// for the per-node contract.
pub fn evaluate_damage(
    backend: &dyn ComputeBackend,
    n_neigh: &[u32],
    family: &[u32],
    damage: &mut [f64],
) -> PeridynResult<()> {
    check_damage_shapes(n_neigh, family, damage)?;
    dispatch_damage(backend, n_neigh, family, damage);
    Ok(())
}

/// Dispatch without checks. Lengths must already agree.
pub(crate) fn dispatch_damage(
    backend: &dyn ComputeBackend,
    n_neigh: &[u32],
    family: &[u32],
    damage: &mut [f64],
) {
    backend.dispatch_scalar(damage, &|i| node_damage(n_neigh[i], family[i]));
}
