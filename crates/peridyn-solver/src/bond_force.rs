//! Internal bond force.
//!
//! Each live bond `i -> j` pulls node `i` along the current bond vector
//! `r[j] - r[i]` with magnitude `c · s`, where `s` is the bond strain
//! relative to the reference configuration. The summed bond forces are
//! scaled by the node's volume.

use peridyn_compute::ComputeBackend;
use peridyn_math::constitutive::{bond_strain, force_scale};
use peridyn_math::geometry::{bond_length, bond_vector};
use peridyn_math::Vec3;
use peridyn_model::NeighbourView;
use peridyn_types::PeridynResult;

use crate::preconditions::check_bond_force_shapes;

/// Net bond force on node `i`.
///
/// Reads `r`, `r0` and `volume` at `i` and at each live neighbour;
/// writes nothing. A zero-length bond in either configuration makes
/// the result NaN or infinite.
#[inline]
pub fn node_bond_force(
    i: usize,
    r: &[Vec3],
    r0: &[Vec3],
    nlist: &NeighbourView<'_>,
    volume: &[f64],
    bond_stiffness: f64,
) -> Vec3 {
    let xi = r[i];
    let x0i = r0[i];
    let mut fi = Vec3::ZERO;

    for &j in nlist.neighbours(i) {
        let j = j as usize;
        let xi_j = bond_vector(xi, r[j]);
        let l = xi_j.length();
        let l0 = bond_length(x0i, r0[j]);
        let s = bond_strain(l, l0);
        fi += force_scale(s, bond_stiffness, l) * xi_j;
    }

    fi * volume[i]
}

/// Writes `force[i]` for every node.
///
/// Only array lengths are checked; see
/// [`check_bond_force_preconditions`](crate::preconditions::check_bond_force_preconditions)
/// for the per-bond contract.
pub fn evaluate_bond_force(
    backend: &dyn ComputeBackend,
    r: &[Vec3],
    r0: &[Vec3],
    nlist: &NeighbourView<'_>,
    volume: &[f64],
    bond_stiffness: f64,
    force: &mut [Vec3],
) -> PeridynResult<()> {
    check_bond_force_shapes(r, r0, nlist, volume, force)?;
    dispatch_bond_force(backend, r, r0, nlist, volume, bond_stiffness, force);
    Ok(())
}

/// Dispatch without checks. Lengths must already agree.
pub(crate) fn dispatch_bond_force(
    backend: &dyn ComputeBackend,
    r: &[Vec3],
    r0: &[Vec3],
    nlist: &NeighbourView<'_>,
    volume: &[f64],
    bond_stiffness: f64,
    force: &mut [Vec3],
) {
    backend.dispatch_vector(force, &|i| {
        node_bond_force(i, r, r0, nlist, volume, bond_stiffness)
    });
}
