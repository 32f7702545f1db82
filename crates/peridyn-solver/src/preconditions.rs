//! Input checks run before dispatch.
//!
//! Shape checks are O(1) and always run. The per-node scans are what
//! [`PreconditionPolicy::Check`](crate::PreconditionPolicy::Check) adds;
//! they touch every live bond once, about the cost of the force kernel.

use peridyn_math::geometry::bond_lengths;
use peridyn_math::Vec3;
use peridyn_model::NeighbourView;
use peridyn_types::{PeridynError, PeridynResult};

/// Fails with [`PeridynError::ShapeMismatch`] if `actual != expected`.
pub fn check_len(field: &'static str, expected: usize, actual: usize) -> PeridynResult<()> {
    if expected != actual {
        return Err(PeridynError::ShapeMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Array lengths for the damage kernel.
pub fn check_damage_shapes(n_neigh: &[u32], family: &[u32], damage: &[f64]) -> PeridynResult<()> {
    let n = n_neigh.len();
    check_len("family", n, family.len())?;
    check_len("damage", n, damage.len())
}

/// Array lengths for the bond-force kernel.
pub fn check_bond_force_shapes(
    r: &[Vec3],
    r0: &[Vec3],
    nlist: &NeighbourView<'_>,
    volume: &[f64],
    force: &[Vec3],
) -> PeridynResult<()> {
    let n = nlist.node_count();
    check_len("r", n, r.len())?;
    check_len("r0", n, r0.len())?;
    check_len("volume", n, volume.len())?;
    check_len("force", n, force.len())
}

/// Per-node damage preconditions: `0 < family[i]` and `n_neigh[i] <= family[i]`.
pub fn check_damage_preconditions(n_neigh: &[u32], family: &[u32]) -> PeridynResult<()> {
    for (node, (&count, &fam)) in n_neigh.iter().zip(family).enumerate() {
        if fam == 0 {
            return Err(PeridynError::EmptyFamily { node });
        }
        if count > fam {
            return Err(PeridynError::CountExceedsFamily {
                node,
                count,
                family: fam,
            });
        }
    }
    Ok(())
}

/// Per-bond force preconditions.
///
/// Checks:
/// - Neighbour table is well formed (capacity, index range, no self bonds)
/// - Every live bond has non-zero length in `r0` and in `r`
pub fn check_bond_force_preconditions(
    r: &[Vec3],
    r0: &[Vec3],
    nlist: &NeighbourView<'_>,
) -> PeridynResult<()> {
    nlist.validate()?;

    for node in 0..nlist.node_count() {
        for &j in nlist.neighbours(node) {
            let neighbour = j as usize;
            let (l0, l) = bond_lengths(r0, r, node, neighbour);
            if l0.is_nan() || l0 <= 0.0 {
                return Err(PeridynError::DegenerateBond {
                    node,
                    neighbour,
                    configuration: "reference",
                    length: l0,
                });
            }
            if l.is_nan() || l <= 0.0 {
                return Err(PeridynError::DegenerateBond {
                    node,
                    neighbour,
                    configuration: "current",
                    length: l,
                });
            }
        }
    }
    Ok(())
}
