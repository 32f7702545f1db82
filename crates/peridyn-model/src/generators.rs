//! Procedural lattice generators for benchmarks and testing.
//!
//! Real geometries come with their own horizon search. These generators
//! only cover regular cubic lattices, where the bond stencil is known in
//! advance and every interior node has the same family.

use peridyn_math::Vec3;
use peridyn_types::{NodeId, PeridynResult};

use crate::neighbours::NeighbourList;
use crate::nodes::NodeSet;

/// Generates the nodes of an `nx × ny × nz` cubic lattice.
///
/// Node `(ix, iy, iz)` sits at `spacing * (ix, iy, iz)` and has index
/// `ix + nx * (iy + ny * iz)` (X varies fastest).
///
/// # Example
/// ```
/// use peridyn_model::generators::cubic_lattice;
/// let coords = cubic_lattice(3, 2, 1, 0.5);
/// assert_eq!(coords.len(), 6);
/// assert_eq!(coords[4].x, 0.5); // (1, 1, 0)
/// ```
pub fn cubic_lattice(nx: usize, ny: usize, nz: usize, spacing: f64) -> Vec<Vec3> {
    let mut coords = Vec::with_capacity(nx * ny * nz);
    for iz in 0..nz {
        for iy in 0..ny {
            for ix in 0..nx {
                coords.push(Vec3::new(
                    ix as f64 * spacing,
                    iy as f64 * spacing,
                    iz as f64 * spacing,
                ));
            }
        }
    }
    coords
}

/// Integer offsets within `reach` lattice spacings, excluding the origin.
///
/// This is the bond stencil of an interior node.
pub fn stencil(reach: f64) -> Vec<[i64; 3]> {
    let r = reach.floor() as i64;
    let reach_sq = reach * reach + 1e-9;
    let mut offsets = Vec::new();
    for dz in -r..=r {
        for dy in -r..=r {
            for dx in -r..=r {
                let d2 = (dx * dx + dy * dy + dz * dz) as f64;
                if d2 > 0.0 && d2 <= reach_sq {
                    offsets.push([dx, dy, dz]);
                }
            }
        }
    }
    offsets
}

/// Bonds every pair of lattice nodes closer than `reach` lattice spacings.
///
/// `max_neighbours` is the stencil size, so interior rows are full and
/// boundary rows are partially filled. The result is symmetric.
pub fn lattice_neighbours(nx: usize, ny: usize, nz: usize, reach: f64) -> PeridynResult<NeighbourList> {
    let offsets = stencil(reach);
    let mut nlist = NeighbourList::new(nx * ny * nz, offsets.len());
    let dims = [nx as i64, ny as i64, nz as i64];
    let index = |x: i64, y: i64, z: i64| (x + dims[0] * (y + dims[1] * z)) as u32;

    for iz in 0..dims[2] {
        for iy in 0..dims[1] {
            for ix in 0..dims[0] {
                let i = index(ix, iy, iz);
                for [dx, dy, dz] in &offsets {
                    let (jx, jy, jz) = (ix + dx, iy + dy, iz + dz);
                    let inside = (0..dims[0]).contains(&jx)
                        && (0..dims[1]).contains(&jy)
                        && (0..dims[2]).contains(&jz);
                    if inside {
                        nlist.push(NodeId(i), NodeId(index(jx, jy, jz)))?;
                    }
                }
            }
        }
    }

    Ok(nlist)
}

/// A complete lattice body: nodes with volume `spacing³` and their bonds.
///
/// Families are taken from the freshly built neighbour list.
pub fn lattice_block(
    nx: usize,
    ny: usize,
    nz: usize,
    spacing: f64,
    reach: f64,
) -> PeridynResult<(NodeSet, NeighbourList)> {
    let coords = cubic_lattice(nx, ny, nz, spacing);
    let volume = vec![spacing.powi(3); coords.len()];
    let nlist = lattice_neighbours(nx, ny, nz, reach)?;
    let nodes = NodeSet::from_connectivity(coords, volume, &nlist)?;
    Ok((nodes, nlist))
}
