//! Bond geometry in a single configuration.

use glam::DVec3;

/// Vector from node `i` at `xi` to node `j` at `xj`.
#[inline]
pub fn bond_vector(xi: DVec3, xj: DVec3) -> DVec3 {
    xj - xi
}

/// Euclidean length of the bond between `xi` and `xj`.
#[inline]
pub fn bond_length(xi: DVec3, xj: DVec3) -> f64 {
    bond_vector(xi, xj).length()
}

/// Reference and current lengths of one bond.
///
/// `r0` and `r` are the reference and current coordinate arrays; `i`, `j`
/// must be valid indices into both.
#[inline]
pub fn bond_lengths(r0: &[DVec3], r: &[DVec3], i: usize, j: usize) -> (f64, f64) {
    (bond_length(r0[i], r0[j]), bond_length(r[i], r[j]))
}
