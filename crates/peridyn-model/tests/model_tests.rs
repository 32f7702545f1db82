//! Integration tests for peridyn-model.

use peridyn_math::Vec3;
use peridyn_model::generators::{cubic_lattice, lattice_block, lattice_neighbours, stencil};
use peridyn_model::{NeighbourList, NeighbourView, NodeSet};
use peridyn_types::constants::UNUSED_SLOT;
use peridyn_types::{NodeId, PeridynError};

fn make_pair_list() -> NeighbourList {
    NeighbourList::from_rows(&[vec![1], vec![0]], 2).unwrap()
}

// ─── NeighbourList Tests ──────────────────────────────────────

#[test]
fn new_list_is_empty_and_padded() {
    let nlist = NeighbourList::new(3, 4);
    assert_eq!(nlist.node_count(), 3);
    assert_eq!(nlist.max_neighbours(), 4);
    assert_eq!(nlist.counts(), &[0, 0, 0]);
    assert!(nlist.view().entries().iter().all(|&e| e == UNUSED_SLOT));
    assert_eq!(nlist.bond_count(), 0);
}

#[test]
fn from_rows_fills_leading_slots() {
    let nlist = NeighbourList::from_rows(&[vec![1, 2], vec![0], vec![0]], 3).unwrap();
    assert_eq!(nlist.counts(), &[2, 1, 1]);
    assert_eq!(nlist.neighbours(0), &[1, 2]);
    assert_eq!(nlist.neighbours(1), &[0]);
    assert_eq!(nlist.bond_count(), 4);
    assert!(nlist.is_symmetric());
}

#[test]
fn push_rejects_full_row() {
    let mut nlist = NeighbourList::new(3, 1);
    nlist.push(NodeId(0), NodeId(1)).unwrap();
    let err = nlist.push(NodeId(0), NodeId(2)).unwrap_err();
    assert!(matches!(err, PeridynError::CountExceedsCapacity { node: 0, .. }));
}

#[test]
fn push_rejects_unknown_node() {
    let mut nlist = NeighbourList::new(2, 2);
    assert!(nlist.push(NodeId(5), NodeId(0)).is_err());
}

#[test]
fn push_bond_is_symmetric() {
    let mut nlist = NeighbourList::new(3, 2);
    nlist.push_bond(NodeId(0), NodeId(2)).unwrap();
    assert_eq!(nlist.neighbours(0), &[2]);
    assert_eq!(nlist.neighbours(2), &[0]);
    assert!(nlist.is_symmetric());
}

#[test]
fn asymmetric_list_detected() {
    let nlist = NeighbourList::from_rows(&[vec![1], vec![]], 1).unwrap();
    assert!(!nlist.is_symmetric());
}

#[test]
fn remove_slot_compacts_row() {
    let mut nlist = NeighbourList::from_rows(&[vec![1, 2, 3], vec![0], vec![0], vec![0]], 3).unwrap();
    let removed = nlist.remove_slot(NodeId(0), 0).unwrap();
    assert_eq!(removed, NodeId(1));
    assert_eq!(nlist.counts()[0], 2);
    // Last live entry moved into the vacated slot.
    assert_eq!(nlist.neighbours(0), &[3, 2]);
    assert_eq!(nlist.view().entries()[2], UNUSED_SLOT);
}

#[test]
fn remove_slot_rejects_dead_slot() {
    let mut nlist = make_pair_list();
    assert!(nlist.remove_slot(NodeId(0), 1).is_err());
    nlist.remove_slot(NodeId(0), 0).unwrap();
    assert!(nlist.remove_slot(NodeId(0), 0).is_err());
}

#[test]
fn validate_catches_out_of_range_neighbour() {
    let nlist = NeighbourList::from_raw(vec![7, UNUSED_SLOT], vec![1, 0], 1).unwrap();
    let err = nlist.validate().unwrap_err();
    assert!(matches!(
        err,
        PeridynError::NeighbourOutOfRange { node: 0, slot: 0, neighbour: 7, node_count: 2 }
    ));
}

#[test]
fn validate_catches_self_bond() {
    let nlist = NeighbourList::from_raw(vec![1, 1], vec![1, 1], 1).unwrap();
    assert!(matches!(nlist.validate(), Err(PeridynError::SelfBond { node: 1, slot: 0 })));
}

#[test]
fn validate_catches_count_over_capacity() {
    let nlist = NeighbourList::from_raw(vec![1, 0], vec![2, 1], 1).unwrap();
    assert!(matches!(
        nlist.validate(),
        Err(PeridynError::CountExceedsCapacity { node: 0, count: 2, max_neighbours: 1 })
    ));
}

#[test]
fn from_rows_rejects_invalid_rows() {
    assert!(NeighbourList::from_rows(&[vec![0]], 1).is_err());
    assert!(NeighbourList::from_rows(&[vec![4], vec![0]], 1).is_err());
}

#[test]
fn list_serialization_roundtrip() {
    let nlist = make_pair_list();
    let json = serde_json::to_string(&nlist).unwrap();
    let recovered: NeighbourList = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, nlist);
}

// ─── NeighbourView Tests ──────────────────────────────────────

#[test]
fn view_over_external_buffers() {
    let entries = [1u32, 2, 0, 99, 0, 99];
    let counts = [2u32, 1, 1];
    let view = NeighbourView::new(&entries, &counts, 2).unwrap();
    assert_eq!(view.node_count(), 3);
    assert_eq!(view.neighbours(0), &[1, 2]);
    assert_eq!(view.neighbours(2), &[0]);
    assert!(view.validate().is_ok());
}

#[test]
fn view_rejects_wrong_shape() {
    let entries = [1u32, 0, 0];
    let counts = [1u32, 1];
    let err = NeighbourView::new(&entries, &counts, 2).unwrap_err();
    assert!(matches!(err, PeridynError::ShapeMismatch { field: "nlist", expected: 4, actual: 3 }));
}

#[test]
#[should_panic]
fn view_never_reads_next_row() {
    let entries = [1u32, 0];
    let counts = [2u32, 1];
    let view = NeighbourView::new(&entries, &counts, 1).unwrap();
    let _ = view.neighbours(0);
}

// ─── NodeSet Tests ────────────────────────────────────────────

#[test]
fn node_set_shape_checked() {
    let coords = vec![Vec3::ZERO, Vec3::X];
    assert!(NodeSet::new(coords.clone(), vec![1.0], vec![1, 1]).is_err());
    assert!(NodeSet::new(coords, vec![1.0, 1.0], vec![1, 1]).is_ok());
}

#[test]
fn node_set_family_from_connectivity() {
    let nlist = NeighbourList::from_rows(&[vec![1, 2], vec![0], vec![0]], 2).unwrap();
    let coords = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
    let nodes = NodeSet::from_connectivity(coords, vec![1.0; 3], &nlist).unwrap();
    assert_eq!(nodes.family, vec![2, 1, 1]);
    assert!(nodes.validate().is_ok());
}

#[test]
fn node_set_validate_catches_empty_family() {
    let nodes = NodeSet::new(vec![Vec3::ZERO, Vec3::X], vec![1.0, 1.0], vec![1, 0]).unwrap();
    assert!(matches!(nodes.validate(), Err(PeridynError::EmptyFamily { node: 1 })));
}

#[test]
fn node_set_validate_catches_bad_volume() {
    let nodes = NodeSet::new(vec![Vec3::ZERO, Vec3::X], vec![1.0, -2.0], vec![1, 1]).unwrap();
    assert!(matches!(nodes.validate(), Err(PeridynError::InvalidModel(_))));
}

#[test]
fn displaced_adds_displacements() {
    let nodes = NodeSet::new(vec![Vec3::ZERO, Vec3::X], vec![1.0, 1.0], vec![1, 1]).unwrap();
    let r = nodes.displaced(&[Vec3::ZERO, Vec3::new(0.1, 0.0, 0.0)]).unwrap();
    assert_eq!(r[0], Vec3::ZERO);
    assert!((r[1].x - 1.1).abs() < 1e-12);
    assert!(nodes.displaced(&[Vec3::ZERO]).is_err());
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn lattice_coordinates() {
    let coords = cubic_lattice(2, 2, 2, 0.5);
    assert_eq!(coords.len(), 8);
    assert_eq!(coords[0], Vec3::ZERO);
    assert_eq!(coords[7], Vec3::new(0.5, 0.5, 0.5));
}

#[test]
fn stencil_sizes() {
    assert_eq!(stencil(1.0).len(), 6);
    assert_eq!(stencil(2f64.sqrt()).len(), 18);
    assert_eq!(stencil(3f64.sqrt()).len(), 26);
    assert_eq!(stencil(2.0).len(), 32);
}

#[test]
fn lattice_neighbours_interior_and_boundary() {
    let nlist = lattice_neighbours(3, 3, 3, 1.0).unwrap();
    assert_eq!(nlist.max_neighbours(), 6);
    // Centre node (1, 1, 1) has the full stencil.
    assert_eq!(nlist.counts()[13], 6);
    // Corner node has one bond per axis.
    assert_eq!(nlist.counts()[0], 3);
    assert!(nlist.validate().is_ok());
    assert!(nlist.is_symmetric());
}

#[test]
fn lattice_block_is_consistent() {
    let (nodes, nlist) = lattice_block(4, 3, 2, 0.1, 1.5).unwrap();
    assert_eq!(nodes.node_count(), 24);
    assert_eq!(nodes.family, nlist.counts());
    assert!(nodes.validate().is_ok());
    assert!((nodes.total_volume() - 24.0 * 0.001).abs() < 1e-12);
}
