//! Grid SDF - signed distance fields from binary occupancy grids.
//!
//! Converts a 2D image or 3D voxel volume, with each cell flagged inside or
//! outside a shape, into a dense field of signed distances using the Fast
//! Marching Method: surface cells seed a min-heap wavefront that freezes
//! cells in order of increasing distance.
//!
//! Distances are negative inside the shape and, by default, normalized by the
//! largest grid dimension into `[-1, 1]`.
//!
//! # Example
//! ```
//! use grid_sdf::make_sdf_2d;
//!
//! // 4x4 grid with the central 2x2 block inside the shape.
//! #[rustfmt::skip]
//! let occupancy = [
//!   0, 0, 0, 0,
//!   0, 1, 1, 0,
//!   0, 1, 1, 0,
//!   0, 0, 0, 0,
//! ];
//! let field = make_sdf_2d(&occupancy, 4, 4).unwrap();
//! assert!(field[5].is_sign_negative());
//! assert!(field[0].is_sign_positive());
//! ```

pub mod config;
pub mod coords;
pub mod primitives;
pub mod sdf;
#[cfg(feature = "tracy")]
mod tracy_init;

pub use config::{ConfigError, Normalization, Relaxation, SdfConfig};
pub use coords::{CellPos2, CellPos3, GridDistance};
pub use primitives::{Extent2, Extent3, Lattice, Surface, Volume};
pub use sdf::{
  FrontierObserver, SdfError, SdfGenerator, SdfStats, UNFROZEN, make_sdf_2d, make_sdf_2d_into,
  make_sdf_2d_with, make_sdf_3d, make_sdf_3d_into, make_sdf_3d_with,
};
#[cfg(feature = "tracy")]
pub use tracy_init::init_tracy;
