//! Wavefront propagation.
//!
//! Repeatedly pops the closest candidate, freezes its cell if it is still at
//! [`UNFROZEN`], and queues every unfrozen neighbor with a distance measured
//! from the candidate's source seed. Cells move through
//! `unseeded -> queued (one or more times) -> frozen`, and a frozen value is
//! never written again.

use super::frontier::{Candidate, Frontier};
use super::observer::FrontierObserver;
use super::{SdfStats, UNFROZEN};
use crate::config::Relaxation;
use crate::coords::GridDistance;
use crate::primitives::Lattice;

/// Drains `frontier`, freezing cells into `distances`.
///
/// `distances` must hold [`UNFROZEN`] for every cell not yet frozen and have
/// `lattice.cell_count()` entries.
#[cfg_attr(feature = "tracy", tracing::instrument(skip_all))]
pub(crate) fn propagate<L: Lattice, O: FrontierObserver>(
  lattice: L,
  distances: &mut [f32],
  frontier: &mut Frontier<L::Pos>,
  relaxation: Relaxation,
  observer: &mut O,
  stats: &mut SdfStats,
) {
  while let Some(candidate) = frontier.pop() {
    stats.pops += 1;

    if distances[candidate.index] != UNFROZEN {
      stats.stale_pops += 1;
      observer.on_stale(candidate.index, candidate.distance);
      continue;
    }

    distances[candidate.index] = candidate.distance;
    stats.frozen += 1;
    observer.on_freeze(candidate.index, candidate.distance);

    let source = candidate.source;
    let offset = match relaxation {
      Relaxation::SourceRelative => 0.0,
      // The source is a seed that froze at its own initial distance.
      Relaxation::Accumulated => distances[lattice.index_of(source)],
    };

    lattice.for_each_neighbor(candidate.cell, |cell, index| {
      if distances[index] != UNFROZEN {
        return;
      }
      frontier.push(Candidate {
        cell,
        index,
        distance: cell.distance(source) + offset,
        source,
      });
    });
  }
}
