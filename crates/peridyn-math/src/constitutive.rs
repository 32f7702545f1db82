//! Linear elastic bond law for bond-based peridynamics.
//!
//! A bond of reference length `l0` stretched to `l` carries a central
//! force of magnitude `c · s`, where `s = (l - l0) / l0` is the bond
//! strain and `c` the bond stiffness (micromodulus).

use std::f64::consts::PI;

/// Bond strain `(l - l0) / l0`.
///
/// Positive in tension, negative in compression. `l0 = 0` yields
/// an infinite or NaN strain.
#[inline]
pub fn bond_strain(length: f64, reference_length: f64) -> f64 {
    (length - reference_length) / reference_length
}

/// Scalar bond force divided by the current bond length.
///
/// Multiplying the result by the current bond vector `r[j] - r[i]`
/// projects the bond force onto the bond direction.
#[inline]
pub fn force_scale(strain: f64, bond_stiffness: f64, length: f64) -> f64 {
    strain * bond_stiffness / length
}

/// Bond stiffness of a linear bond-based material in 3D.
///
/// `c = 18 K / (π δ⁴)`, with `K` the bulk modulus and `δ` the horizon.
pub fn micromodulus(bulk_modulus: f64, horizon: f64) -> f64 {
    18.0 * bulk_modulus / (PI * horizon.powi(4))
}
