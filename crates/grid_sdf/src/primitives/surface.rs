//! Dense 2D cell buffer.
//!
//! A [`Surface`] is a generic 2D buffer that can hold any element type. The
//! transform reads occupancy from a `Surface<u32>` and writes distances into a
//! `Surface<f32>`.
//!
//! Data is stored in row-major order (`y * width + x`), matching the flat
//! slice layout accepted by [`make_sdf_2d`](crate::make_sdf_2d).

use std::ops::{Index, IndexMut};

use super::extent::{Extent2, Lattice};
use crate::coords::CellPos2;
use crate::sdf::SdfError;

/// A 2D buffer of elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface<T> {
  data: Box<[T]>,
  width: u32,
  height: u32,
}

impl<T: Clone + Default> Surface<T> {
  /// Creates a new surface filled with the default value.
  pub fn new(width: u32, height: u32) -> Self {
    Self::filled(width, height, T::default())
  }
}

impl<T: Clone> Surface<T> {
  /// Creates a new surface filled with the given value.
  pub fn filled(width: u32, height: u32, value: T) -> Self {
    let len = (width as usize) * (height as usize);
    Self {
      data: vec![value; len].into_boxed_slice(),
      width,
      height,
    }
  }
}

impl<T> Surface<T> {
  /// Wraps an existing row-major buffer.
  pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self, SdfError> {
    let expected = Extent2::new(width, height)
      .checked_cell_count()
      .ok_or(SdfError::GridTooLarge)?;
    if data.len() != expected {
      return Err(SdfError::SizeMismatch {
        buffer: "surface",
        expected,
        actual: data.len(),
      });
    }
    Ok(Self {
      data: data.into_boxed_slice(),
      width,
      height,
    })
  }

  /// Builds a surface by evaluating `f(x, y)` for every cell.
  pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
    let data: Vec<T> = Extent2::new(width, height)
      .positions()
      .map(|p| f(p.x, p.y))
      .collect();
    Self {
      data: data.into_boxed_slice(),
      width,
      height,
    }
  }

  /// Returns the width of the surface.
  #[inline]
  pub fn width(&self) -> u32 {
    self.width
  }

  /// Returns the height of the surface.
  #[inline]
  pub fn height(&self) -> u32 {
    self.height
  }

  /// Returns the dimensions of the surface.
  #[inline]
  pub fn extent(&self) -> Extent2 {
    Extent2::new(self.width, self.height)
  }

  /// Converts (x, y) to a linear index, or `None` if out of bounds.
  #[inline]
  fn index_of(&self, x: u32, y: u32) -> Option<usize> {
    if x < self.width && y < self.height {
      Some(self.extent().index_of(CellPos2::new(x, y)))
    } else {
      None
    }
  }

  /// Returns a reference to the element at (x, y), or `None` if out of bounds.
  #[inline]
  pub fn get(&self, x: u32, y: u32) -> Option<&T> {
    self.index_of(x, y).map(|i| &self.data[i])
  }

  /// Sets the element at (x, y). Returns `true` if successful, `false` if out
  /// of bounds.
  #[inline]
  pub fn set(&mut self, x: u32, y: u32, value: T) -> bool {
    if let Some(i) = self.index_of(x, y) {
      self.data[i] = value;
      true
    } else {
      false
    }
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

impl<T> Index<(u32, u32)> for Surface<T> {
  type Output = T;

  #[inline]
  fn index(&self, (x, y): (u32, u32)) -> &Self::Output {
    let i = (y as usize) * (self.width as usize) + (x as usize);
    &self.data[i]
  }
}

impl<T> IndexMut<(u32, u32)> for Surface<T> {
  #[inline]
  fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Self::Output {
    let i = (y as usize) * (self.width as usize) + (x as usize);
    &mut self.data[i]
  }
}
