mod extent;
mod surface;
mod volume;

pub use extent::{Extent2, Extent3, Lattice};
pub use surface::Surface;
pub use volume::Volume;
