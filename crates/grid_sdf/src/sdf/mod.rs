//! Signed distance fields from occupancy grids using fast marching.
//!
//! Each call runs one pass of three stages:
//! 1. [`edge`] finds surface cells and seeds the [`Frontier`].
//! 2. `propagate` drains the frontier, freezing each cell at the first pop
//!    that finds it still [`UNFROZEN`].
//! 3. `finalize` signs every cell by occupancy (negative inside) and
//!    normalizes.
//!
//! Occupancy values are treated as booleans: zero is outside, anything else
//! is inside.

pub mod edge;
mod finalize;
mod frontier;
mod observer;
mod propagate;

use std::fmt;

use log::debug;

pub use frontier::{Candidate, Frontier};
pub use observer::FrontierObserver;

use crate::config::{Normalization, Relaxation, SdfConfig};
use crate::primitives::{Extent2, Extent3, Lattice, Surface, Volume};

/// Distance held by a cell that has not been frozen yet.
///
/// A packed float sentinel keeps the output buffer flat; after a successful
/// call no cell holds it.
pub const UNFROZEN: f32 = f32::MAX;

/// Counters collected over one transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SdfStats {
  /// Surface cells queued by edge detection.
  pub seeds: usize,
  /// Candidates pushed, seeds included.
  pub pushes: usize,
  /// Candidates popped.
  pub pops: usize,
  /// Pops discarded because the cell was already frozen.
  pub stale_pops: usize,
  /// Cells frozen.
  pub frozen: usize,
}

/// Error returned by the transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdfError {
  /// A grid dimension is zero.
  EmptyGrid,
  /// The cell count does not fit in `usize`.
  GridTooLarge,
  /// A buffer's length differs from the grid's cell count.
  SizeMismatch {
    buffer: &'static str,
    expected: usize,
    actual: usize,
  },
  /// The grid has no inside/outside transition, so nothing can be seeded.
  NoBoundaryFound,
  /// Propagation finished with cells still unfrozen.
  ///
  /// Guard only: every grid is connected and each frozen cell queues all of
  /// its in-bounds neighbors, so once any seed exists every cell is reached.
  UnreachableCells { count: usize },
}

impl fmt::Display for SdfError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::EmptyGrid => write!(f, "grid has a zero dimension"),
      Self::GridTooLarge => write!(f, "grid cell count overflows usize"),
      Self::SizeMismatch {
        buffer,
        expected,
        actual,
      } => write!(
        f,
        "{buffer} buffer has {actual} cells, grid has {expected}"
      ),
      Self::NoBoundaryFound => write!(f, "occupancy grid has no boundary"),
      Self::UnreachableCells { count } => write!(f, "{count} cells were never reached"),
    }
  }
}

impl std::error::Error for SdfError {}

/// Runs the transform with a fixed [`SdfConfig`].
#[derive(Clone, Debug, Default)]
pub struct SdfGenerator {
  config: SdfConfig,
}

impl SdfGenerator {
  pub fn new(config: SdfConfig) -> Self {
    Self { config }
  }

  /// Writes the 2D distance field of `occupancy` into `out`.
  ///
  /// On error `out` is either untouched (invalid dimensions or buffer
  /// sizes) or left holding [`UNFROZEN`] in every unfrozen cell.
  pub fn generate_2d(
    &self,
    occupancy: &[u32],
    width: u32,
    height: u32,
    out: &mut [f32],
  ) -> Result<SdfStats, SdfError> {
    self.generate_2d_observed(occupancy, width, height, out, &mut ())
  }

  /// Like [`generate_2d`](Self::generate_2d), reporting events to `observer`.
  #[cfg_attr(feature = "tracy", tracing::instrument(skip_all))]
  pub fn generate_2d_observed<O: FrontierObserver>(
    &self,
    occupancy: &[u32],
    width: u32,
    height: u32,
    out: &mut [f32],
    observer: &mut O,
  ) -> Result<SdfStats, SdfError> {
    let extent = Extent2::new(width, height);
    if extent.is_empty() {
      return Err(SdfError::EmptyGrid);
    }
    extent.checked_cell_count().ok_or(SdfError::GridTooLarge)?;

    let stats = run(
      extent,
      occupancy,
      out,
      self.config.relaxation_2d,
      self.config.normalization,
      observer,
      |frontier, observer| edge::seed_2d(occupancy, extent, frontier, observer),
    )?;
    debug!(
      "2D SDF {}x{}: {} seeds, {} pops ({} stale), {} pushes",
      width, height, stats.seeds, stats.pops, stats.stale_pops, stats.pushes
    );
    Ok(stats)
  }

  /// Writes the 3D distance field of `occupancy` into `out`.
  pub fn generate_3d(
    &self,
    occupancy: &[u32],
    width: u32,
    height: u32,
    depth: u32,
    out: &mut [f32],
  ) -> Result<SdfStats, SdfError> {
    self.generate_3d_observed(occupancy, width, height, depth, out, &mut ())
  }

  /// Like [`generate_3d`](Self::generate_3d), reporting events to `observer`.
  #[cfg_attr(feature = "tracy", tracing::instrument(skip_all))]
  pub fn generate_3d_observed<O: FrontierObserver>(
    &self,
    occupancy: &[u32],
    width: u32,
    height: u32,
    depth: u32,
    out: &mut [f32],
    observer: &mut O,
  ) -> Result<SdfStats, SdfError> {
    let extent = Extent3::new(width, height, depth);
    if extent.is_empty() {
      return Err(SdfError::EmptyGrid);
    }
    extent.checked_cell_count().ok_or(SdfError::GridTooLarge)?;

    let stats = run(
      extent,
      occupancy,
      out,
      self.config.relaxation_3d,
      self.config.normalization,
      observer,
      |frontier, observer| edge::seed_3d(occupancy, extent, frontier, observer),
    )?;
    debug!(
      "3D SDF {}x{}x{}: {} seeds, {} pops ({} stale), {} pushes",
      width, height, depth, stats.seeds, stats.pops, stats.stale_pops, stats.pushes
    );
    Ok(stats)
  }

  /// Distance field of a [`Surface`].
  pub fn surface(&self, occupancy: &Surface<u32>) -> Result<Surface<f32>, SdfError> {
    let mut out = Surface::filled(occupancy.width(), occupancy.height(), UNFROZEN);
    self.generate_2d(
      occupancy.as_slice(),
      occupancy.width(),
      occupancy.height(),
      out.as_slice_mut(),
    )?;
    Ok(out)
  }

  /// Distance field of a [`Volume`].
  pub fn volume(&self, occupancy: &Volume<u32>) -> Result<Volume<f32>, SdfError> {
    let mut out = Volume::filled(
      occupancy.width(),
      occupancy.height(),
      occupancy.depth(),
      UNFROZEN,
    );
    self.generate_3d(
      occupancy.as_slice(),
      occupancy.width(),
      occupancy.height(),
      occupancy.depth(),
      out.as_slice_mut(),
    )?;
    Ok(out)
  }
}

fn run<L, O, S>(
  lattice: L,
  occupancy: &[u32],
  out: &mut [f32],
  relaxation: Relaxation,
  normalization: Normalization,
  observer: &mut O,
  seed: S,
) -> Result<SdfStats, SdfError>
where
  L: Lattice,
  O: FrontierObserver,
  S: FnOnce(&mut Frontier<L::Pos>, &mut O) -> usize,
{
  let cells = lattice.cell_count();
  check_len("occupancy", cells, occupancy.len())?;
  check_len("output", cells, out.len())?;

  out.fill(UNFROZEN);
  let mut frontier = Frontier::with_capacity(cells);
  let mut stats = SdfStats {
    seeds: seed(&mut frontier, &mut *observer),
    ..SdfStats::default()
  };
  if stats.seeds == 0 {
    debug!("No surface cells in {} cells, nothing to propagate", cells);
    return Err(SdfError::NoBoundaryFound);
  }

  propagate::propagate(lattice, out, &mut frontier, relaxation, observer, &mut stats);
  stats.pushes = frontier.total_pushes();

  let unreachable = out.iter().filter(|&&d| d == UNFROZEN).count();
  if unreachable > 0 {
    return Err(SdfError::UnreachableCells { count: unreachable });
  }

  finalize::finalize(occupancy, out, lattice.max_dimension(), normalization);
  Ok(stats)
}

fn check_len(buffer: &'static str, expected: usize, actual: usize) -> Result<(), SdfError> {
  if expected == actual {
    Ok(())
  } else {
    Err(SdfError::SizeMismatch {
      buffer,
      expected,
      actual,
    })
  }
}

/// Computes the 2D signed distance field of `occupancy` with default
/// settings.
pub fn make_sdf_2d(occupancy: &[u32], width: u32, height: u32) -> Result<Vec<f32>, SdfError> {
  make_sdf_2d_with(occupancy, width, height, &SdfConfig::default())
}

/// Computes the 2D signed distance field into a caller-owned buffer.
pub fn make_sdf_2d_into(
  occupancy: &[u32],
  width: u32,
  height: u32,
  out: &mut [f32],
) -> Result<(), SdfError> {
  SdfGenerator::default()
    .generate_2d(occupancy, width, height, out)
    .map(|_| ())
}

/// Computes the 2D signed distance field with an explicit config.
pub fn make_sdf_2d_with(
  occupancy: &[u32],
  width: u32,
  height: u32,
  config: &SdfConfig,
) -> Result<Vec<f32>, SdfError> {
  let mut out = vec![UNFROZEN; occupancy.len()];
  SdfGenerator::new(config.clone()).generate_2d(occupancy, width, height, &mut out)?;
  Ok(out)
}

/// Computes the 3D signed distance field of `occupancy` with default
/// settings.
pub fn make_sdf_3d(
  occupancy: &[u32],
  width: u32,
  height: u32,
  depth: u32,
) -> Result<Vec<f32>, SdfError> {
  make_sdf_3d_with(occupancy, width, height, depth, &SdfConfig::default())
}

/// Computes the 3D signed distance field into a caller-owned buffer.
pub fn make_sdf_3d_into(
  occupancy: &[u32],
  width: u32,
  height: u32,
  depth: u32,
  out: &mut [f32],
) -> Result<(), SdfError> {
  SdfGenerator::default()
    .generate_3d(occupancy, width, height, depth, out)
    .map(|_| ())
}

/// Computes the 3D signed distance field with an explicit config.
pub fn make_sdf_3d_with(
  occupancy: &[u32],
  width: u32,
  height: u32,
  depth: u32,
  config: &SdfConfig,
) -> Result<Vec<f32>, SdfError> {
  let mut out = vec![UNFROZEN; occupancy.len()];
  SdfGenerator::new(config.clone()).generate_3d(occupancy, width, height, depth, &mut out)?;
  Ok(out)
}

impl Surface<u32> {
  /// Signed distance field of this occupancy surface with default settings.
  pub fn to_sdf(&self) -> Result<Surface<f32>, SdfError> {
    SdfGenerator::default().surface(self)
  }
}

impl Volume<u32> {
  /// Signed distance field of this occupancy volume with default settings.
  pub fn to_sdf(&self) -> Result<Volume<f32>, SdfError> {
    SdfGenerator::default().volume(self)
  }
}
