//! Dense 3D voxel buffer.
//!
//! Data is stored with x varying fastest, then y, then z
//! (`(z * height + y) * width + x`).

use std::ops::{Index, IndexMut};

use super::extent::{Extent3, Lattice};
use crate::coords::CellPos3;
use crate::sdf::SdfError;

/// A 3D buffer of elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Volume<T> {
  data: Box<[T]>,
  extent: Extent3,
}

impl<T: Clone + Default> Volume<T> {
  /// Creates a new volume filled with the default value.
  pub fn new(width: u32, height: u32, depth: u32) -> Self {
    Self::filled(width, height, depth, T::default())
  }
}

impl<T: Clone> Volume<T> {
  /// Creates a new volume filled with the given value.
  pub fn filled(width: u32, height: u32, depth: u32, value: T) -> Self {
    let extent = Extent3::new(width, height, depth);
    Self {
      data: vec![value; extent.cell_count()].into_boxed_slice(),
      extent,
    }
  }
}

impl<T> Volume<T> {
  /// Wraps an existing buffer laid out in index order.
  pub fn from_vec(width: u32, height: u32, depth: u32, data: Vec<T>) -> Result<Self, SdfError> {
    let extent = Extent3::new(width, height, depth);
    let expected = extent.checked_cell_count().ok_or(SdfError::GridTooLarge)?;
    if data.len() != expected {
      return Err(SdfError::SizeMismatch {
        buffer: "volume",
        expected,
        actual: data.len(),
      });
    }
    Ok(Self {
      data: data.into_boxed_slice(),
      extent,
    })
  }

  /// Builds a volume by evaluating `f(x, y, z)` for every voxel.
  pub fn from_fn(width: u32, height: u32, depth: u32, mut f: impl FnMut(u32, u32, u32) -> T) -> Self {
    let extent = Extent3::new(width, height, depth);
    let data: Vec<T> = extent.positions().map(|p| f(p.x, p.y, p.z)).collect();
    Self {
      data: data.into_boxed_slice(),
      extent,
    }
  }

  #[inline]
  pub fn width(&self) -> u32 {
    self.extent.width
  }

  #[inline]
  pub fn height(&self) -> u32 {
    self.extent.height
  }

  #[inline]
  pub fn depth(&self) -> u32 {
    self.extent.depth
  }

  /// Returns a reference to the voxel at (x, y, z), or `None` if out of
  /// bounds.
  #[inline]
  pub fn get(&self, x: u32, y: u32, z: u32) -> Option<&T> {
    self.extent
      .offset(CellPos3::new(x, y, z), 0, 0, 0)
      .map(|p| &self.data[self.extent.index_of(p)])
  }

  /// Returns a slice of the underlying data.
  #[inline]
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  /// Returns a mutable slice of the underlying data.
  #[inline]
  pub fn as_slice_mut(&mut self) -> &mut [T] {
    &mut self.data
  }
}

impl<T> Index<(u32, u32, u32)> for Volume<T> {
  type Output = T;

  #[inline]
  fn index(&self, (x, y, z): (u32, u32, u32)) -> &Self::Output {
    &self.data[self.extent.index_of(CellPos3::new(x, y, z))]
  }
}

impl<T> IndexMut<(u32, u32, u32)> for Volume<T> {
  #[inline]
  fn index_mut(&mut self, (x, y, z): (u32, u32, u32)) -> &mut Self::Output {
    let i = self.extent.index_of(CellPos3::new(x, y, z));
    &mut self.data[i]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn indexing_matches_layout() {
    let v = Volume::from_fn(2, 3, 4, |x, y, z| x + 10 * y + 100 * z);
    assert_eq!(v[(1, 2, 3)], 321);
    assert_eq!(v.as_slice()[(3 * 3 + 2) * 2 + 1], 321);
    assert_eq!(v.get(2, 0, 0), None);
    assert_eq!(v.get(1, 2, 3), Some(&321));
  }

  #[test]
  fn from_vec_checks_length() {
    assert!(Volume::from_vec(2, 2, 2, vec![0u32; 8]).is_ok());
    assert!(Volume::from_vec(2, 2, 2, vec![0u32; 7]).is_err());
  }
}
