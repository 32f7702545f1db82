//! Integration tests for peridyn-compute.

use std::sync::atomic::{AtomicUsize, Ordering};

use peridyn_compute::backend::{create_backend, BackendKind, ComputeBackend, RayonBackend, SerialBackend};
use peridyn_math::Vec3;

// ─── SerialBackend Tests ──────────────────────────────────────

#[test]
fn serial_identity() {
    let backend = SerialBackend::new();
    assert_eq!(backend.name(), "serial");
    assert_eq!(backend.thread_count(), 1);
    assert!(!backend.is_parallel());
}

#[test]
fn serial_dispatch_scalar() {
    let backend = SerialBackend::new();
    let mut out = vec![0.0; 5];
    backend.dispatch_scalar(&mut out, &|i| (i * i) as f64);
    assert_eq!(out, vec![0.0, 1.0, 4.0, 9.0, 16.0]);
}

#[test]
fn serial_dispatch_vector() {
    let backend = SerialBackend::new();
    let mut out = vec![Vec3::ZERO; 3];
    backend.dispatch_vector(&mut out, &|i| Vec3::new(i as f64, 0.0, -(i as f64)));
    assert_eq!(out[2], Vec3::new(2.0, 0.0, -2.0));
}

#[test]
fn serial_join_runs_both() {
    let backend = SerialBackend::new();
    let mut a = 0;
    let mut b = 0;
    backend.join(&mut || a += 1, &mut || b += 2);
    assert_eq!((a, b), (1, 2));
}

// ─── RayonBackend Tests ───────────────────────────────────────

#[test]
fn rayon_thread_count() {
    let backend = RayonBackend::new(Some(3), 16).unwrap();
    assert_eq!(backend.name(), "rayon");
    assert_eq!(backend.thread_count(), 3);
    assert!(backend.is_parallel());
    assert_eq!(backend.min_chunk_len(), 16);
}

#[test]
fn rayon_rejects_zero_threads() {
    assert!(RayonBackend::new(Some(0), 16).is_err());
}

#[test]
fn rayon_min_chunk_is_at_least_one() {
    let backend = RayonBackend::new(Some(1), 0).unwrap();
    assert_eq!(backend.min_chunk_len(), 1);
}

#[test]
fn rayon_visits_every_slot_once() {
    let backend = RayonBackend::new(Some(4), 1).unwrap();
    let calls = AtomicUsize::new(0);
    let mut out = vec![-1.0; 10_000];
    backend.dispatch_scalar(&mut out, &|i| {
        calls.fetch_add(1, Ordering::Relaxed);
        i as f64
    });
    assert_eq!(calls.load(Ordering::Relaxed), 10_000);
    assert!(out.iter().enumerate().all(|(i, &v)| v == i as f64));
}

#[test]
fn rayon_matches_serial_bitwise() {
    let kernel = |i: usize| {
        let x = i as f64 * 0.37;
        Vec3::new(x.sin(), x.cos() / (1.0 + x), x.sqrt())
    };
    let mut serial = vec![Vec3::ZERO; 4096];
    let mut parallel = vec![Vec3::ZERO; 4096];
    SerialBackend::new().dispatch_vector(&mut serial, &kernel);
    RayonBackend::new(Some(4), 8).unwrap().dispatch_vector(&mut parallel, &kernel);
    assert_eq!(serial, parallel);
}

#[test]
fn rayon_join_runs_both() {
    let backend = RayonBackend::new(Some(2), 1).unwrap();
    let mut left = vec![0.0; 100];
    let mut right = vec![0.0; 100];
    backend.join(
        &mut || backend.dispatch_scalar(&mut left, &|i| i as f64),
        &mut || backend.dispatch_scalar(&mut right, &|i| -(i as f64)),
    );
    assert_eq!(left[99], 99.0);
    assert_eq!(right[99], -99.0);
}

#[test]
fn empty_output_is_noop() {
    let backend = RayonBackend::new(Some(2), 1).unwrap();
    let mut out: Vec<f64> = Vec::new();
    backend.dispatch_scalar(&mut out, &|_| unreachable!());
    assert!(out.is_empty());
}

// ─── Factory Tests ────────────────────────────────────────────

#[test]
fn create_each_kind() {
    let serial = create_backend(BackendKind::Serial, None, 64).unwrap();
    assert_eq!(serial.name(), BackendKind::Serial.name());

    let rayon = create_backend(BackendKind::Rayon, Some(2), 64).unwrap();
    assert_eq!(rayon.name(), BackendKind::Rayon.name());
    assert_eq!(rayon.thread_count(), 2);
}

#[test]
fn backend_kind_serialization() {
    let json = serde_json::to_string(&BackendKind::Rayon).unwrap();
    assert_eq!(json, "\"rayon\"");
    let recovered: BackendKind = serde_json::from_str("\"serial\"").unwrap();
    assert_eq!(recovered, BackendKind::Serial);
    assert_eq!(BackendKind::default(), BackendKind::Rayon);
}
