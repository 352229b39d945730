use claims::debug_assert_ok;
use log::debug;
use std::cmp::Ordering;
use std::ops::Deref;

use crate::data::{Point, PointLocation};
use crate::{Error, HullScalar, Orientation};

/// Vertices of a convex hull in counter-clockwise order.
///
/// The first vertex is the input point with the smallest x coordinate (ties
/// broken by the smallest y coordinate) and is not repeated at the end. Only
/// extreme points are kept: no vertex is colinear with its two neighbours.
///
/// Hulls of fewer than three distinct points are degenerate. They hold zero,
/// one or two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull<T>(Vec<Point<T>>);

impl<T> Hull<T> {
  /// The hull of nothing. Also reported to sinks when a computation is aborted.
  pub fn empty() -> Hull<T> {
    Hull(Vec::new())
  }

  pub fn as_slice(&self) -> &[Point<T>] {
    &self.0
  }

  pub fn into_vec(self) -> Vec<Point<T>> {
    self.0
  }
}

impl<T: HullScalar> Hull<T> {
  /// $O(1)$ Assume that the points form a valid hull.
  ///
  /// # Safety
  /// Every consecutive triple of vertices (wrapping around) has to turn
  /// counter-clockwise.
  pub fn new_unchecked(points: Vec<Point<T>>) -> Hull<T> {
    let hull = Hull(points);
    debug_assert_ok!(hull.validate());
    hull
  }

  /// Close a counter-clockwise walk over the distinct `points` into a hull.
  ///
  /// If every point lies within tolerance of the line through the smallest and
  /// the largest point, the hull is that segment. Otherwise vertices that
  /// don't turn left are dropped until the walk is convex. The first vertex of
  /// the walk is always kept.
  pub(crate) fn from_walk(points: &[Point<T>], walk: Vec<Point<T>>) -> Hull<T> {
    if let Some(segment) = colinear_extremes(points) {
      return Hull(segment);
    }
    let walked = walk.len();
    let hull = prune(walk);
    if hull.len() < walked {
      debug!("dropped {} vertices that do not turn left", walked - hull.len());
    }
    Hull::new_unchecked(hull)
  }

  /// $O(n)$ Check convexity and extremality.
  ///
  /// Degenerate hulls (fewer than three vertices) are always valid.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.0.len();
    if n < 3 {
      return Ok(());
    }
    for i in 0..n {
      let prev = &self.0[(i + n - 1) % n];
      let next = &self.0[(i + 1) % n];
      if Point::orient(prev, &self.0[i], next) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.0.as_slice() {
      [] => PointLocation::Outside,
      [a] => {
        if a.key() == pt.key() {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      [a, b] => {
        if Point::orient(a, b, pt).is_colinear() && within_span(a, b, pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      vertices => {
        let mut on_edge = false;
        for (i, a) in vertices.iter().enumerate() {
          let b = &vertices[(i + 1) % vertices.len()];
          match Point::orient(a, b, pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_edge = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_edge {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }
}

// Projection test for a point already known to be colinear with a->b.
fn within_span<T: HullScalar>(a: &Point<T>, b: &Point<T>, pt: &Point<T>) -> bool {
  let dx = b[0] - a[0];
  let dy = b[1] - a[1];
  let t = (pt[0] - a[0]) * dx + (pt[1] - a[1]) * dy;
  -T::tolerance() <= t && t <= dx * dx + dy * dy + T::tolerance()
}

// Smallest and largest point, if all points are colinear with them.
fn colinear_extremes<T: HullScalar>(points: &[Point<T>]) -> Option<Vec<Point<T>>> {
  if points.len() < 2 {
    return None;
  }
  let lo = points.iter().min_by(|a, b| a.cmp_xy(b))?;
  let hi = points.iter().max_by(|a, b| a.cmp_xy(b))?;
  points
    .iter()
    .all(|pt| Point::orient(lo, hi, pt).is_colinear())
    .then(|| vec![*lo, *hi])
}

// Remove vertices until every consecutive triple (wrapping around) turns
// left. The first vertex is never removed.
fn prune<T: HullScalar>(mut walk: Vec<Point<T>>) -> Vec<Point<T>> {
  loop {
    let n = walk.len();
    if n < 3 {
      return walk;
    }
    let turns_left =
      |i: usize| Point::orient(&walk[(i + n - 1) % n], &walk[i], &walk[(i + 1) % n]).is_ccw();
    let reflex = (1..n).find(|&i| !turns_left(i));
    let start_turns_left = turns_left(0);
    match (reflex, start_turns_left) {
      (Some(i), _) => {
        walk.remove(i);
      }
      (None, true) => return walk,
      // Drop the neighbour of the start that is closer to it.
      (None, false) => {
        let i = match walk[0].cmp_distance_to(&walk[1], &walk[n - 1]) {
          Ordering::Greater => n - 1,
          _ => 1,
        };
        walk.remove(i);
      }
    }
  }
}

impl<T> Deref for Hull<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &[Point<T>] {
    &self.0
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.0
  }
}

impl<T> IntoIterator for Hull<T> {
  type Item = Point<T>;
  type IntoIter = std::vec::IntoIter<Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
