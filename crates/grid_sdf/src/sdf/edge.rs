//! Surface detection and seeding.
//!
//! A cell is on the surface when any cell of its clamped Moore neighborhood
//! has different occupancy. Out-of-range neighbor lookups clamp to the
//! nearest border cell, so the grid edge itself never counts as a boundary.
//!
//! The two dimensionalities seed differently:
//! - 2D seeds every surface cell at distance `0`.
//! - 3D seeds at half the distance to the nearest differing neighbor, which
//!   places the first shell on the sub-voxel boundary between them.

use log::trace;

use super::frontier::{Candidate, Frontier};
use super::observer::FrontierObserver;
use crate::coords::{CellPos2, CellPos3, GridDistance, NEIGHBORS_2D, NEIGHBORS_3D};
use crate::primitives::{Extent2, Extent3, Lattice};

/// Returns the initial distance of `pos` if it is a 2D surface cell.
///
/// # Panics
/// If `pos` is outside `extent` or `occupancy` is shorter than the grid.
pub fn surface_distance_2d(occupancy: &[u32], extent: Extent2, pos: CellPos2) -> Option<f32> {
  let inside = occupancy[extent.index_of(pos)] != 0;
  NEIGHBORS_2D
    .iter()
    .any(|&(dx, dy)| (occupancy[extent.index_of(extent.clamped(pos, dx, dy))] != 0) != inside)
    .then_some(0.0)
}

/// Returns the initial distance of `pos` if it is a 3D surface cell: the
/// minimum over differing neighbors of half their distance from `pos`.
///
/// # Panics
/// If `pos` is outside `extent` or `occupancy` is shorter than the grid.
pub fn surface_distance_3d(occupancy: &[u32], extent: Extent3, pos: CellPos3) -> Option<f32> {
  let inside = occupancy[extent.index_of(pos)] != 0;
  NEIGHBORS_3D
    .iter()
    .filter_map(|&(dx, dy, dz)| {
      let n = extent.clamped(pos, dx, dy, dz);
      ((occupancy[extent.index_of(n)] != 0) != inside).then(|| 0.5 * pos.distance(n))
    })
    .reduce(f32::min)
}

/// Queues every 2D surface cell. Returns the number of seeds.
#[cfg_attr(feature = "tracy", tracing::instrument(skip_all))]
pub(crate) fn seed_2d<O: FrontierObserver>(
  occupancy: &[u32],
  extent: Extent2,
  frontier: &mut Frontier<CellPos2>,
  observer: &mut O,
) -> usize {
  let mut seeds = 0;
  for pos in extent.positions() {
    if let Some(distance) = surface_distance_2d(occupancy, extent, pos) {
      push_seed(frontier, observer, pos, extent.index_of(pos), distance);
      seeds += 1;
    }
  }
  seeds
}

/// Queues every 3D surface cell. Returns the number of seeds.
#[cfg_attr(feature = "tracy", tracing::instrument(skip_all))]
pub(crate) fn seed_3d<O: FrontierObserver>(
  occupancy: &[u32],
  extent: Extent3,
  frontier: &mut Frontier<CellPos3>,
  observer: &mut O,
) -> usize {
  let mut seeds = 0;
  for pos in extent.positions() {
    if let Some(distance) = surface_distance_3d(occupancy, extent, pos) {
      push_seed(frontier, observer, pos, extent.index_of(pos), distance);
      seeds += 1;
    }
  }
  seeds
}

fn push_seed<P: Copy + std::fmt::Debug, O: FrontierObserver>(
  frontier: &mut Frontier<P>,
  observer: &mut O,
  pos: P,
  index: usize,
  distance: f32,
) {
  trace!("seed {:?} at {}", pos, distance);
  observer.on_seed(index, distance);
  frontier.push(Candidate {
    cell: pos,
    index,
    distance,
    source: pos,
  });
}
