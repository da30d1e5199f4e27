//! End-to-end scenarios for the 2D and 3D transforms.

use grid_sdf::{
  Normalization, Relaxation, SdfConfig, SdfError, Surface, UNFROZEN, Volume, make_sdf_2d,
  make_sdf_2d_into, make_sdf_2d_with, make_sdf_3d, make_sdf_3d_into, make_sdf_3d_with,
};

const EPS: f32 = 1e-5;

fn assert_close(actual: f32, expected: f32) {
  assert!(
    (actual - expected).abs() < EPS,
    "expected {expected}, got {actual}"
  );
}

/// Occupied axis-aligned block `[x0, x1) x [y0, y1)`.
fn block_2d(width: u32, height: u32, x0: u32, x1: u32, y0: u32, y1: u32) -> Surface<u32> {
  Surface::from_fn(width, height, |x, y| {
    u32::from((x0..x1).contains(&x) && (y0..y1).contains(&y))
  })
}

fn single_voxel(size: u32) -> Volume<u32> {
  let c = size / 2;
  Volume::from_fn(size, size, size, |x, y, z| u32::from((x, y, z) == (c, c, c)))
}

// ============================================================================
// Scenario A: 4x4 grid, central 2x2 block
// ============================================================================

#[test]
fn scenario_a_center_block_2d() {
  let occ = block_2d(4, 4, 1, 3, 1, 3);
  let field = make_sdf_2d(occ.as_slice(), 4, 4).unwrap();
  let field = Surface::from_vec(4, 4, field).unwrap();

  for y in 0..4 {
    for x in 0..4 {
      let v = field[(x, y)];
      assert!(v.abs() <= 1.0);
      assert_eq!(
        v.is_sign_negative(),
        occ[(x, y)] != 0,
        "sign mismatch at ({x}, {y}): {v}"
      );
    }
  }

  let max_magnitude = field.as_slice().iter().fold(0f32, |m, v| m.max(v.abs()));
  for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
    assert!(field[(x, y)] >= 0.0);
    assert_eq!(field[(x, y)].abs(), max_magnitude);
  }
  for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
    assert!(field[(x, y)].is_sign_negative());
    assert!(field[(x, y)].abs() <= field[(0, 0)].abs());
  }
}

#[test]
fn block_distances_are_euclidean_to_nearest_surface_cell() {
  // 6x6 block in a 12x12 grid: the seeds are the two rings either side of
  // the block edge.
  let occ = block_2d(12, 12, 3, 9, 3, 9);
  let config = SdfConfig::default().with_normalization(Normalization::Raw);
  let field = make_sdf_2d_with(occ.as_slice(), 12, 12, &config).unwrap();
  let at = |x: usize, y: usize| field[y * 12 + x];

  assert_close(at(0, 0), 8f32.sqrt());
  assert_close(at(11, 11), 8f32.sqrt());
  assert_close(at(6, 1), 1.0);
  assert_close(at(5, 5), -2.0);
  assert_eq!(at(2, 5), 0.0);
  assert!(at(3, 5) == 0.0 && at(3, 5).is_sign_negative());

  let normalized = make_sdf_2d(occ.as_slice(), 12, 12).unwrap();
  assert_close(normalized[0], 8f32.sqrt() / 12.0);
}

#[test]
fn accumulated_relaxation_matches_source_relative_in_2d() {
  // 2D seeds all start at zero, so adding the source distance changes
  // nothing.
  let occ = block_2d(16, 10, 2, 11, 4, 7);
  let a = make_sdf_2d_with(
    occ.as_slice(),
    16,
    10,
    &SdfConfig::unified(Relaxation::SourceRelative),
  )
  .unwrap();
  let b = make_sdf_2d_with(
    occ.as_slice(),
    16,
    10,
    &SdfConfig::unified(Relaxation::Accumulated),
  )
  .unwrap();
  assert_eq!(a, b);
}

// ============================================================================
// Scenario B: 3x3x3 volume, single center voxel
// ============================================================================

#[test]
fn scenario_b_center_voxel_3d() {
  let occ = single_voxel(3);
  let field = occ.to_sdf().unwrap();

  let center = field[(1, 1, 1)];
  assert!(center < 0.0);
  assert_close(center, -0.5 / 3.0);

  let positives: Vec<f32> = field
    .as_slice()
    .iter()
    .copied()
    .filter(|v| *v > 0.0)
    .collect();
  assert_eq!(positives.len(), 26);
  let smallest = positives.iter().copied().fold(f32::MAX, f32::min);
  let largest = positives.iter().copied().fold(0f32, f32::max);

  let faces = [
    (0, 1, 1),
    (2, 1, 1),
    (1, 0, 1),
    (1, 2, 1),
    (1, 1, 0),
    (1, 1, 2),
  ];
  for (x, y, z) in faces {
    assert_eq!(field[(x, y, z)], smallest);
  }
  assert!(center.abs() <= smallest);

  for z in [0, 2] {
    for y in [0, 2] {
      for x in [0, 2] {
        assert_eq!(field[(x, y, z)], largest);
      }
    }
  }
  assert_close(largest, 0.5 * 3f32.sqrt() / 3.0);
}

#[test]
fn accumulated_relaxation_carries_seed_offset_in_3d() {
  let occ = single_voxel(7);
  let raw = SdfConfig::default().with_normalization(Normalization::Raw);
  let accumulated = make_sdf_3d_with(occ.as_slice(), 7, 7, 7, &raw).unwrap();
  let relative = make_sdf_3d_with(
    occ.as_slice(),
    7,
    7,
    7,
    &SdfConfig::unified(Relaxation::SourceRelative).with_normalization(Normalization::Raw),
  )
  .unwrap();
  let at = |field: &[f32], x: usize, y: usize, z: usize| field[(z * 7 + y) * 7 + x];

  assert_close(at(accumulated.as_slice(), 3, 3, 0), 2.5);
  assert_close(at(relative.as_slice(), 3, 3, 0), 2.0);
  assert_close(at(accumulated.as_slice(), 0, 0, 0), 0.5 * 3f32.sqrt() + 12f32.sqrt());
  assert_close(at(relative.as_slice(), 0, 0, 0), 12f32.sqrt());
  // Seeds freeze at their own initial distance under either rule.
  assert_close(at(accumulated.as_slice(), 3, 3, 3), -0.5);
  assert_close(at(relative.as_slice(), 3, 3, 3), -0.5);
}

// ============================================================================
// Scenario C: no boundary
// ============================================================================

#[test]
fn scenario_c_all_exterior_2d() {
  let occ = vec![0u32; 5 * 4];
  assert_eq!(make_sdf_2d(&occ, 5, 4), Err(SdfError::NoBoundaryFound));

  let mut out = vec![0.0; 20];
  assert_eq!(
    make_sdf_2d_into(&occ, 5, 4, &mut out),
    Err(SdfError::NoBoundaryFound)
  );
  assert!(out.iter().all(|&v| v == UNFROZEN));
}

#[test]
fn scenario_c_all_interior_3d() {
  let occ = vec![3u32; 4 * 4 * 2];
  assert_eq!(make_sdf_3d(&occ, 4, 4, 2), Err(SdfError::NoBoundaryFound));

  let mut out = vec![0.0; 32];
  assert_eq!(
    make_sdf_3d_into(&occ, 4, 4, 2, &mut out),
    Err(SdfError::NoBoundaryFound)
  );
  assert!(out.iter().all(|&v| v == UNFROZEN));
}

#[test]
fn single_cell_grid_has_no_boundary() {
  assert_eq!(make_sdf_2d(&[1], 1, 1), Err(SdfError::NoBoundaryFound));
  assert_eq!(Volume::<u32>::new(1, 1, 1).to_sdf(), Err(SdfError::NoBoundaryFound));
}

// ============================================================================
// Degenerate shapes
// ============================================================================

#[test]
fn one_dimensional_strip() {
  let occ = [1, 1, 0, 0, 0, 0];
  let raw = SdfConfig::default().with_normalization(Normalization::Raw);
  let field = make_sdf_2d_with(&occ, 6, 1, &raw).unwrap();
  assert_eq!(field, vec![-1.0, -0.0, 0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn shape_in_corner_saturates_instead_of_overflowing() {
  let occ = Surface::from_fn(10, 10, |x, y| u32::from(x == 0 && y == 0));
  let field = occ.to_sdf().unwrap();
  // sqrt(8^2 + 8^2) / 10 > 1 before clamping.
  assert_eq!(field[(9, 9)], 1.0);
  assert!(field.as_slice().iter().all(|v| v.abs() <= 1.0));
}

// ============================================================================
// Editing occupancy in place
// ============================================================================

#[test]
fn carving_a_surface_cell_moves_the_boundary() {
  let mut occ = block_2d(8, 8, 2, 6, 2, 6);
  let before = occ.to_sdf().unwrap();
  assert!(before[(4, 4)] < 0.0);

  occ[(4, 4)] = 0;
  let after = occ.to_sdf().unwrap();
  assert!(after[(4, 4)] == 0.0 && after[(4, 4)].is_sign_positive());
  // Its former inside neighbors are now on the surface too.
  assert!(after[(3, 3)] == 0.0 && after[(3, 3)].is_sign_negative());
  assert!(before[(3, 3)] < 0.0);
}

#[test]
fn placing_a_voxel_creates_a_boundary() {
  let mut occ = Volume::<u32>::new(5, 5, 5);
  assert_eq!(occ.to_sdf(), Err(SdfError::NoBoundaryFound));

  occ[(2, 2, 2)] = 1;
  let field = occ.to_sdf().unwrap();
  assert_close(field[(2, 2, 2)], -0.5 / 5.0);
  assert!(field[(0, 0, 0)] > 0.0);
}
