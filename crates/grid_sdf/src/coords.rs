//! Cell coordinate types and neighborhood tables.
//!
//! Defines the coordinate system shared by the 2D and 3D pipelines:
//! - [`CellPos2`]: Cell position in a [`Surface`](crate::Surface) (u32)
//! - [`CellPos3`]: Cell position in a [`Volume`](crate::Volume) (u32)
//!
//! Distances between cells are measured center to center in cell units.

/// Offsets of the 8 cells surrounding a 2D cell (Moore neighborhood).
pub const NEIGHBORS_2D: [(i32, i32); 8] = [
  (-1, -1),
  (0, -1),
  (1, -1),
  (-1, 0),
  (1, 0),
  (-1, 1),
  (0, 1),
  (1, 1),
];

/// Offsets of the 26 cells surrounding a 3D cell, in z-major order.
pub const NEIGHBORS_3D: [(i32, i32, i32); 26] = moore_3d();

const fn moore_3d() -> [(i32, i32, i32); 26] {
  let mut out = [(0, 0, 0); 26];
  let mut i = 0;
  let mut dz = -1;
  while dz <= 1 {
    let mut dy = -1;
    while dy <= 1 {
      let mut dx = -1;
      while dx <= 1 {
        if dx != 0 || dy != 0 || dz != 0 {
          out[i] = (dx, dy, dz);
          i += 1;
        }
        dx += 1;
      }
      dy += 1;
    }
    dz += 1;
  }
  out
}

/// Euclidean distance between cell centers.
pub trait GridDistance: Copy {
  /// Returns the distance from `self` to `other` in cell units.
  fn distance(self, other: Self) -> f32;
}

/// Cell position in a 2D grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellPos2 {
  pub x: u32,
  pub y: u32,
}

impl CellPos2 {
  /// Creates a new cell position.
  pub const fn new(x: u32, y: u32) -> Self {
    Self { x, y }
  }
}

impl GridDistance for CellPos2 {
  #[inline]
  fn distance(self, other: Self) -> f32 {
    let dx = self.x as f32 - other.x as f32;
    let dy = self.y as f32 - other.y as f32;
    (dx * dx + dy * dy).sqrt()
  }
}

/// Cell (voxel) position in a 3D grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellPos3 {
  pub x: u32,
  pub y: u32,
  pub z: u32,
}

impl CellPos3 {
  /// Creates a new cell position.
  pub const fn new(x: u32, y: u32, z: u32) -> Self {
    Self { x, y, z }
  }
}

impl GridDistance for CellPos3 {
  #[inline]
  fn distance(self, other: Self) -> f32 {
    let dx = self.x as f32 - other.x as f32;
    let dy = self.y as f32 - other.y as f32;
    let dz = self.z as f32 - other.z as f32;
    (dx * dx + dy * dy + dz * dz).sqrt()
  }
}
