// This module contains strategies for:
//  * points on an integer grid
//  * point sets with many colinear and duplicate points
//  * grid points with sub-tolerance noise
//  * tiny point sets where the tolerance decides most orientations
// On the integer grids every cross product is exact. The noisy grid keeps the
// noise in cross products below the tolerance, so orientations still match the
// underlying grid and hull properties can be checked exactly.
use crate::data::Point;

use core::ops::Range;
use proptest::collection::*;
use proptest::prelude::*;

fn grid_point(range: Range<i32>) -> impl Strategy<Value = Point<f64>> {
  (range.clone(), range).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn any_grid_point() -> impl Strategy<Value = Point<f64>> {
  grid_point(-50..50)
}

/// Up to `max_len` points with coordinates in `-50..50`.
pub fn grid_points(max_len: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_grid_point(), 0..max_len)
}

/// A tiny grid. Most triples are colinear and duplicates are common.
pub fn colinear_heavy_points(max_len: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(grid_point(-3..4), 0..max_len)
}

/// Points on a single line through `origin` with direction `dir`.
pub fn colinear_points(max_len: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
  (
    grid_point(-20..20),
    grid_point(-5..6),
    vec(-10i32..10, 0..max_len),
  )
    .prop_map(|(origin, dir, steps)| {
      steps
        .into_iter()
        .map(|k| {
          let k = f64::from(k);
          Point::new([origin[0] + k * dir[0], origin[1] + k * dir[1]])
        })
        .collect()
    })
}

/// Grid points with spacing `0.01` in `[-0.25, 0.25)`, each y coordinate moved
/// by up to `3e-13`.
///
/// Differences in x are at most `0.49` and the noise in differences in y at
/// most `6e-13`, so colinear grid triples get cross products up to about
/// `6e-13`, just below the tolerance. Other triples stay at least `1e-4` away from zero. Copies of
/// a grid point round to the same key and are merged. The noise is applied to
/// y only, so sorting by x then y matches the grid order.
pub fn noisy_grid_points(max_len: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec((-25i32..25, -25i32..25, -3e-13f64..3e-13), 0..max_len).prop_map(|pts| {
    pts
      .into_iter()
      .map(|(x, y, noise)| Point::new([f64::from(x) * 1e-2, f64::from(y) * 1e-2 + noise]))
      .collect()
  })
}

/// Points in a square of side `1e-6`. Most cross products are below the
/// tolerance, and orientations are not transitive.
pub fn tiny_points(max_len: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(
    (0f64..1e-6, 0f64..1e-6).prop_map(|(x, y)| Point::new([x, y])),
    0..max_len,
  )
}
