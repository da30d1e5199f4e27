//! Sign assignment and normalization.

use crate::config::Normalization;

/// Signs every frozen distance by occupancy (negative inside) and applies
/// `normalization`. Runs once over the whole buffer after propagation.
#[cfg_attr(feature = "tracy", tracing::instrument(skip_all))]
pub(crate) fn finalize(
  occupancy: &[u32],
  distances: &mut [f32],
  max_dimension: u32,
  normalization: Normalization,
) {
  match normalization {
    Normalization::MaxDimension => {
      // No dimension is zero by the time we get here.
      let scale = 1.0 / max_dimension as f32;
      for (d, &occ) in distances.iter_mut().zip(occupancy) {
        *d = (*d * sign(occ) * scale).clamp(-1.0, 1.0);
      }
    }
    Normalization::Raw => {
      for (d, &occ) in distances.iter_mut().zip(occupancy) {
        *d *= sign(occ);
      }
    }
  }
}

#[inline]
fn sign(occupancy: u32) -> f32 {
  if occupancy != 0 { -1.0 } else { 1.0 }
}
