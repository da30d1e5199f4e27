//! Candidate records and the min-heap that orders them.
//!
//! A cell may be pushed many times before it is frozen. Stale entries are
//! left in the heap and discarded when popped, which keeps the queue a plain
//! [`BinaryHeap`] without decrease-key.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A proposal to freeze `cell` at `distance`, originating from the seed at
/// `source`.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<P> {
  /// Cell proposed for freezing.
  pub cell: P,
  /// Linear index of `cell`. Breaks ties between equal distances.
  pub index: usize,
  /// Tentative distance in cell units.
  pub distance: f32,
  /// Seed cell the wavefront originated from.
  pub source: P,
}

impl<P> PartialEq for Candidate<P> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl<P> Eq for Candidate<P> {}

impl<P> PartialOrd for Candidate<P> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<P> Ord for Candidate<P> {
  fn cmp(&self, other: &Self) -> Ordering {
    // BinaryHeap is a max-heap; reverse so the smallest distance pops first.
    other
      .distance
      .total_cmp(&self.distance)
      .then_with(|| other.index.cmp(&self.index))
  }
}

/// Min-heap of [`Candidate`]s ordered by ascending distance, then index.
#[derive(Debug)]
pub struct Frontier<P> {
  heap: BinaryHeap<Candidate<P>>,
  pushes: usize,
}

impl<P> Default for Frontier<P> {
  fn default() -> Self {
    Self {
      heap: BinaryHeap::new(),
      pushes: 0,
    }
  }
}

impl<P> Frontier<P> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a frontier with room for `capacity` candidates.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      heap: BinaryHeap::with_capacity(capacity),
      pushes: 0,
    }
  }

  #[inline]
  pub fn push(&mut self, candidate: Candidate<P>) {
    self.pushes += 1;
    self.heap.push(candidate);
  }

  /// Removes and returns the candidate with the smallest distance.
  #[inline]
  pub fn pop(&mut self) -> Option<Candidate<P>> {
    self.heap.pop()
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.heap.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.heap.is_empty()
  }

  /// Total number of pushes since creation, including stale duplicates.
  pub fn total_pushes(&self) -> usize {
    self.pushes
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn candidate(index: usize, distance: f32) -> Candidate<usize> {
    Candidate {
      cell: index,
      index,
      distance,
      source: index,
    }
  }

  #[test]
  fn pops_in_ascending_distance() {
    let mut f = Frontier::new();
    for (i, d) in [3.0, 0.5, 2.0, 0.0, 1.5].into_iter().enumerate() {
      f.push(candidate(i, d));
    }
    let order: Vec<f32> = std::iter::from_fn(|| f.pop()).map(|c| c.distance).collect();
    assert_eq!(order, vec![0.0, 0.5, 1.5, 2.0, 3.0]);
    assert_eq!(f.total_pushes(), 5);
  }

  #[test]
  fn equal_distances_pop_by_index() {
    let mut f = Frontier::new();
    f.push(candidate(7, 1.0));
    f.push(candidate(2, 1.0));
    f.push(candidate(5, 1.0));
    let order: Vec<usize> = std::iter::from_fn(|| f.pop()).map(|c| c.index).collect();
    assert_eq!(order, vec![2, 5, 7]);
  }

  #[test]
  fn duplicates_are_kept() {
    let mut f = Frontier::with_capacity(4);
    f.push(candidate(1, 2.0));
    f.push(candidate(1, 1.0));
    assert_eq!(f.len(), 2);
    assert_eq!(f.pop().map(|c| c.distance), Some(1.0));
    assert_eq!(f.pop().map(|c| c.distance), Some(2.0));
    assert!(f.is_empty());
  }
}
