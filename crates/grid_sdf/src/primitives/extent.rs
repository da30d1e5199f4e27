//! Grid extents and the [`Lattice`] abstraction the propagator walks.

use crate::coords::{CellPos2, CellPos3, GridDistance, NEIGHBORS_2D, NEIGHBORS_3D};

/// A dense, bounded grid of cells addressed by position or linear index.
///
/// Implemented by [`Extent2`] and [`Extent3`] so that wavefront propagation
/// is written once for both dimensionalities.
pub trait Lattice: Copy {
  /// Cell coordinate type.
  type Pos: GridDistance + std::fmt::Debug;

  /// Total number of cells.
  fn cell_count(&self) -> usize;

  /// Largest edge length, used for normalization.
  fn max_dimension(&self) -> u32;

  /// Converts a position to its linear index. The position must be in bounds.
  fn index_of(&self, pos: Self::Pos) -> usize;

  /// Calls `f(pos, index)` for every in-bounds cell of the Moore
  /// neighborhood of `pos`, excluding `pos` itself.
  fn for_each_neighbor(&self, pos: Self::Pos, f: impl FnMut(Self::Pos, usize));
}

/// Dimensions of a 2D grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent2 {
  pub width: u32,
  pub height: u32,
}

impl Extent2 {
  /// Creates a new extent.
  pub const fn new(width: u32, height: u32) -> Self {
    Self { width, height }
  }

  /// Number of cells, or `None` on overflow.
  pub fn checked_cell_count(&self) -> Option<usize> {
    (self.width as usize).checked_mul(self.height as usize)
  }

  /// Returns `true` if either dimension is zero.
  pub fn is_empty(&self) -> bool {
    self.width == 0 || self.height == 0
  }

  /// Returns the position at `pos + (dx, dy)` clamped to the grid border.
  #[inline]
  pub fn clamped(&self, pos: CellPos2, dx: i32, dy: i32) -> CellPos2 {
    CellPos2::new(
      clamp_axis(pos.x, dx, self.width),
      clamp_axis(pos.y, dy, self.height),
    )
  }

  /// Returns the position at `pos + (dx, dy)`, or `None` if out of bounds.
  #[inline]
  pub fn offset(&self, pos: CellPos2, dx: i32, dy: i32) -> Option<CellPos2> {
    Some(CellPos2::new(
      offset_axis(pos.x, dx, self.width)?,
      offset_axis(pos.y, dy, self.height)?,
    ))
  }

  /// Iterates all positions in row-major (index) order.
  pub fn positions(&self) -> impl Iterator<Item = CellPos2> + use<> {
    let (w, h) = (self.width, self.height);
    (0..h).flat_map(move |y| (0..w).map(move |x| CellPos2::new(x, y)))
  }
}

impl Lattice for Extent2 {
  type Pos = CellPos2;

  #[inline]
  fn cell_count(&self) -> usize {
    (self.width as usize) * (self.height as usize)
  }

  fn max_dimension(&self) -> u32 {
    self.width.max(self.height)
  }

  #[inline]
  fn index_of(&self, pos: CellPos2) -> usize {
    (pos.y as usize) * (self.width as usize) + (pos.x as usize)
  }

  #[inline]
  fn for_each_neighbor(&self, pos: CellPos2, mut f: impl FnMut(CellPos2, usize)) {
    for &(dx, dy) in &NEIGHBORS_2D {
      if let Some(n) = self.offset(pos, dx, dy) {
        f(n, self.index_of(n));
      }
    }
  }
}

/// Dimensions of a 3D grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent3 {
  pub width: u32,
  pub height: u32,
  pub depth: u32,
}

impl Extent3 {
  /// Creates a new extent.
  pub const fn new(width: u32, height: u32, depth: u32) -> Self {
    Self {
      width,
      height,
      depth,
    }
  }

  /// Number of cells, or `None` on overflow.
  pub fn checked_cell_count(&self) -> Option<usize> {
    (self.width as usize)
      .checked_mul(self.height as usize)?
      .checked_mul(self.depth as usize)
  }

  /// Returns `true` if any dimension is zero.
  pub fn is_empty(&self) -> bool {
    self.width == 0 || self.height == 0 || self.depth == 0
  }

  /// Returns the position at `pos + (dx, dy, dz)` clamped to the grid border.
  #[inline]
  pub fn clamped(&self, pos: CellPos3, dx: i32, dy: i32, dz: i32) -> CellPos3 {
    CellPos3::new(
      clamp_axis(pos.x, dx, self.width),
      clamp_axis(pos.y, dy, self.height),
      clamp_axis(pos.z, dz, self.depth),
    )
  }

  /// Returns the position at `pos + (dx, dy, dz)`, or `None` if out of bounds.
  #[inline]
  pub fn offset(&self, pos: CellPos3, dx: i32, dy: i32, dz: i32) -> Option<CellPos3> {
    Some(CellPos3::new(
      offset_axis(pos.x, dx, self.width)?,
      offset_axis(pos.y, dy, self.height)?,
      offset_axis(pos.z, dz, self.depth)?,
    ))
  }

  /// Iterates all positions in index order (x fastest, then y, then z).
  pub fn positions(&self) -> impl Iterator<Item = CellPos3> + use<> {
    let (w, h, d) = (self.width, self.height, self.depth);
    (0..d).flat_map(move |z| {
      (0..h).flat_map(move |y| (0..w).map(move |x| CellPos3::new(x, y, z)))
    })
  }
}

impl Lattice for Extent3 {
  type Pos = CellPos3;

  #[inline]
  fn cell_count(&self) -> usize {
    (self.width as usize) * (self.height as usize) * (self.depth as usize)
  }

  fn max_dimension(&self) -> u32 {
    self.width.max(self.height).max(self.depth)
  }

  #[inline]
  fn index_of(&self, pos: CellPos3) -> usize {
    ((pos.z as usize) * (self.height as usize) + (pos.y as usize)) * (self.width as usize)
      + (pos.x as usize)
  }

  #[inline]
  fn for_each_neighbor(&self, pos: CellPos3, mut f: impl FnMut(CellPos3, usize)) {
    for &(dx, dy, dz) in &NEIGHBORS_3D {
      if let Some(n) = self.offset(pos, dx, dy, dz) {
        f(n, self.index_of(n));
      }
    }
  }
}

#[inline]
fn clamp_axis(v: u32, d: i32, len: u32) -> u32 {
  (v as i64 + d as i64).clamp(0, len as i64 - 1) as u32
}

#[inline]
fn offset_axis(v: u32, d: i32, len: u32) -> Option<u32> {
  let n = v as i64 + d as i64;
  (0..len as i64).contains(&n).then_some(n as u32)
}
