//! Integration tests for peridyn-math.

use peridyn_math::constitutive::{bond_strain, force_scale, micromodulus};
use peridyn_math::geometry::{bond_length, bond_lengths, bond_vector};
use peridyn_math::Vec3;

// ─── Geometry Tests ───────────────────────────────────────────

#[test]
fn bond_vector_points_from_i_to_j() {
    let v = bond_vector(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn bond_length_pythagorean() {
    let l = bond_length(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
    assert!((l - 5.0).abs() < 1e-12);
}

#[test]
fn bond_length_is_symmetric() {
    let a = Vec3::new(0.3, -1.2, 4.0);
    let b = Vec3::new(-2.0, 0.5, 1.0);
    assert_eq!(bond_length(a, b), bond_length(b, a));
}

#[test]
fn bond_lengths_reference_and_current() {
    let r0 = [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)];
    let r = [Vec3::ZERO, Vec3::new(1.1, 0.0, 0.0)];
    let (l0, l) = bond_lengths(&r0, &r, 0, 1);
    assert!((l0 - 1.0).abs() < 1e-12);
    assert!((l - 1.1).abs() < 1e-12);
}

// ─── Constitutive Tests ───────────────────────────────────────

#[test]
fn strain_tension_and_compression() {
    assert!((bond_strain(1.1, 1.0) - 0.1).abs() < 1e-12);
    assert!((bond_strain(0.9, 1.0) + 0.1).abs() < 1e-12);
    assert_eq!(bond_strain(2.5, 2.5), 0.0);
}

#[test]
fn strain_zero_reference_is_not_finite() {
    assert!(!bond_strain(1.0, 0.0).is_finite());
    assert!(bond_strain(0.0, 0.0).is_nan());
}

#[test]
fn force_scale_matches_hand_computation() {
    // s = 0.1, c = 100, l = 1.1 → 10 / 1.1
    let scale = force_scale(0.1, 100.0, 1.1);
    assert!((scale - 9.090_909_090_9).abs() < 1e-9);
    // Projected onto the bond vector, the magnitude is c·s.
    assert!((scale * 1.1 - 10.0).abs() < 1e-12);
}

#[test]
fn micromodulus_formula() {
    let c = micromodulus(1.0, 1.0);
    assert!((c - 18.0 / std::f64::consts::PI).abs() < 1e-12);

    // Halving the horizon scales the stiffness by 16.
    let ratio = micromodulus(2.5e9, 0.0025) / micromodulus(2.5e9, 0.005);
    assert!((ratio - 16.0).abs() < 1e-9);
}

#[test]
fn micromodulus_matches_default_constant() {
    let c = micromodulus(2.5e9, 5.0e-3);
    let rel = (c - peridyn_types::constants::DEFAULT_BOND_STIFFNESS).abs() / c;
    assert!(rel < 1e-3, "micromodulus {c:e}");
}
