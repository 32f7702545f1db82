//! Dense neighbour list.
//!
//! Bonds are stored per node in a row-major table of shape
//! `(node_count, max_neighbours)`:
//!
//! ```text
//! entries: [ n0s0 n0s1 .. n0s(m-1) | n1s0 n1s1 .. | ... ]
//! counts:  [ c0, c1, ... ]
//! ```
//!
//! Row `i` holds `counts[i]` live neighbours in its leading slots.
//! Trailing slots are padding and are never read.

use serde::{Deserialize, Serialize};
use peridyn_types::constants::UNUSED_SLOT;
use peridyn_types::{NodeId, PeridynError, PeridynResult};

/// Borrowed view over a dense neighbour table.
///
/// This is the type the evaluators consume. It wraps the
/// `(node, max_neighbours)` index arithmetic so drivers can hand over
/// their own flat buffers without copying.
#[derive(Debug, Clone, Copy)]
pub struct NeighbourView<'a> {
    entries: &'a [u32],
    counts: &'a [u32],
    max_neighbours: usize,
}

impl<'a> NeighbourView<'a> {
    /// Wraps flat `entries` (length `counts.len() * max_neighbours`) and
    /// per-node live `counts`.
    ///
    /// Only the table shape is checked here. Per-entry checks live in
    /// [`NeighbourView::validate`].
    pub fn new(
        entries: &'a [u32],
        counts: &'a [u32],
        max_neighbours: usize,
    ) -> PeridynResult<Self> {
        let expected = counts.len() * max_neighbours;
        if entries.len() != expected {
            return Err(PeridynError::ShapeMismatch {
                field: "nlist",
                expected,
                actual: entries.len(),
            });
        }
        Ok(Self {
            entries,
            counts,
            max_neighbours,
        })
    }

    /// Number of nodes (rows).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.counts.len()
    }

    /// Number of slots per row.
    #[inline]
    pub fn max_neighbours(&self) -> usize {
        self.max_neighbours
    }

    /// Live neighbour counts, one per node.
    #[inline]
    pub fn counts(&self) -> &'a [u32] {
        self.counts
    }

    /// Live neighbour count of node `i`.
    #[inline]
    pub fn count(&self, i: usize) -> usize {
        self.counts[i] as usize
    }

    /// Live neighbours of node `i`.
    ///
    /// Panics if `counts[i]` exceeds the row capacity instead of reading
    /// into the next row.
    #[inline]
    pub fn neighbours(&self, i: usize) -> &'a [u32] {
        let start = i * self.max_neighbours;
        let row = &self.entries[start..start + self.max_neighbours];
        &row[..self.counts[i] as usize]
    }

    /// Raw row-major entries, padding included.
    #[inline]
    pub fn entries(&self) -> &'a [u32] {
        self.entries
    }

    /// Total number of live directed bonds.
    pub fn bond_count(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Validates every live slot.
    ///
    /// Checks:
    /// - No row has more live neighbours than slots
    /// - Live neighbour indices are within `[0, node_count)`
    /// - No node is bonded to itself
    pub fn validate(&self) -> PeridynResult<()> {
        let n = self.node_count();
        for (node, &count) in self.counts.iter().enumerate() {
            if count as usize > self.max_neighbours {
                return Err(PeridynError::CountExceedsCapacity {
                    node,
                    count,
                    max_neighbours: self.max_neighbours,
                });
            }
            for (slot, &neighbour) in self.neighbours(node).iter().enumerate() {
                if neighbour as usize >= n {
                    return Err(PeridynError::NeighbourOutOfRange {
                        node,
                        slot,
                        neighbour,
                        node_count: n,
                    });
                }
                if neighbour as usize == node {
                    return Err(PeridynError::SelfBond { node, slot });
                }
            }
        }
        Ok(())
    }

    /// Returns true if every live bond `i -> j` has a live partner `j -> i`.
    ///
    /// Assumes the view has passed [`NeighbourView::validate`].
    pub fn is_symmetric(&self) -> bool {
        (0..self.node_count()).all(|i| {
            self.neighbours(i)
                .iter()
                .all(|&j| self.neighbours(j as usize).contains(&(i as u32)))
        })
    }
}

/// Owned dense neighbour list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighbourList {
    /// Slots per node.
    max_neighbours: usize,
    /// Row-major neighbour indices, padded with [`UNUSED_SLOT`].
    entries: Vec<u32>,
    /// Live neighbour count per node.
    counts: Vec<u32>,
}

impl NeighbourList {
    /// Creates an empty list for `node_count` nodes with `max_neighbours` slots each.
    pub fn new(node_count: usize, max_neighbours: usize) -> Self {
        Self {
            max_neighbours,
            entries: vec![UNUSED_SLOT; node_count * max_neighbours],
            counts: vec![0; node_count],
        }
    }

    /// Builds a list from per-node rows of neighbour indices.
    pub fn from_rows(rows: &[Vec<u32>], max_neighbours: usize) -> PeridynResult<Self> {
        let mut list = Self::new(rows.len(), max_neighbours);
        for (i, row) in rows.iter().enumerate() {
            for &j in row {
                list.push(NodeId(i as u32), NodeId(j))?;
            }
        }
        list.validate()?;
        Ok(list)
    }

    /// Adopts raw row-major `entries` and live `counts`.
    pub fn from_raw(
        entries: Vec<u32>,
        counts: Vec<u32>,
        max_neighbours: usize,
    ) -> PeridynResult<Self> {
        NeighbourView::new(&entries, &counts, max_neighbours)?;
        Ok(Self {
            max_neighbours,
            entries,
            counts,
        })
    }

    /// Borrowed view for the evaluators.
    #[inline]
    pub fn view(&self) -> NeighbourView<'_> {
        NeighbourView {
            entries: &self.entries,
            counts: &self.counts,
            max_neighbours: self.max_neighbours,
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.counts.len()
    }

    /// Slots per node.
    #[inline]
    pub fn max_neighbours(&self) -> usize {
        self.max_neighbours
    }

    /// Live neighbour counts (`n_neigh`).
    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Live neighbours of node `i`.
    #[inline]
    pub fn neighbours(&self, i: usize) -> &[u32] {
        self.view().neighbours(i)
    }

    /// Total number of live directed bonds.
    pub fn bond_count(&self) -> usize {
        self.view().bond_count()
    }

    /// Appends `neighbour` to the live slots of `node`.
    pub fn push(&mut self, node: NodeId, neighbour: NodeId) -> PeridynResult<()> {
        let i = node.index();
        if i >= self.node_count() {
            return Err(PeridynError::InvalidModel(format!(
                "{} is out of range (node count: {})",
                node,
                self.node_count()
            )));
        }
        let count = self.counts[i];
        if count as usize >= self.max_neighbours {
            return Err(PeridynError::CountExceedsCapacity {
                node: i,
                count: count + 1,
                max_neighbours: self.max_neighbours,
            });
        }
        self.entries[i * self.max_neighbours + count as usize] = neighbour.0;
        self.counts[i] = count + 1;
        Ok(())
    }

    /// Adds the bond in both directions.
    pub fn push_bond(&mut self, a: NodeId, b: NodeId) -> PeridynResult<()> {
        self.push(a, b)?;
        self.push(b, a)
    }

    /// Removes live slot `slot` of `node` and returns the neighbour it held.
    ///
    /// The last live entry of the row moves into the vacated slot, so
    /// neighbour order within a row is not preserved. This is the mutation
    /// a bond-breaking step applies between evaluations.
    pub fn remove_slot(&mut self, node: NodeId, slot: usize) -> PeridynResult<NodeId> {
        let i = node.index();
        if i >= self.node_count() {
            return Err(PeridynError::InvalidModel(format!(
                "{} is out of range (node count: {})",
                node,
                self.node_count()
            )));
        }
        let count = self.counts[i] as usize;
        if slot >= count {
            return Err(PeridynError::InvalidModel(format!(
                "{} has no live slot {} ({} live)",
                node, slot, count
            )));
        }
        let base = i * self.max_neighbours;
        let removed = self.entries[base + slot];
        self.entries[base + slot] = self.entries[base + count - 1];
        self.entries[base + count - 1] = UNUSED_SLOT;
        self.counts[i] -= 1;
        Ok(NodeId(removed))
    }

    /// Validates every live slot. See [`NeighbourView::validate`].
    pub fn validate(&self) -> PeridynResult<()> {
        self.view().validate()
    }

    /// Returns true if every live bond has a live partner.
    pub fn is_symmetric(&self) -> bool {
        self.view().is_symmetric()
    }
}
