use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Index;

use crate::{HullScalar, Orientation};

/// A point in the plane. Points have no identity beyond their coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T: HullScalar> Point<T> {
  pub fn x_coord(&self) -> T {
    self.array[0]
  }

  pub fn y_coord(&self) -> T {
    self.array[1]
  }

  /// Both coordinates are neither NaN nor infinite.
  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  /// Direction of the turn `p1 -> p2 -> p3`. See [`Orientation::new`].
  pub fn orient(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation {
    Orientation::new(&p1.array, &p2.array, &p3.array)
  }

  /// Coordinates rounded to [`PRECISION`](crate::PRECISION) decimal places.
  /// Points with equal keys are considered identical.
  pub fn key(&self) -> [OrderedFloat<f64>; 2] {
    [self.x_coord().quantize(), self.y_coord().quantize()]
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T {
    let dx = self.array[0] - rhs.array[0];
    let dy = self.array[1] - rhs.array[1];
    dx * dx + dy * dy
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .cmp_exact(&self.squared_euclidean_distance(q))
  }

  /// Lexicographic order: x first, then y. Exact, no tolerance.
  pub fn cmp_xy(&self, other: &Point<T>) -> Ordering {
    self
      .x_coord()
      .cmp_exact(&other.x_coord())
      .then_with(|| self.y_coord().cmp_exact(&other.y_coord()))
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}
